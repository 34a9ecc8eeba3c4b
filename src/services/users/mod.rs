pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::{
    entities::UserRole,
    requests::{BulkAccountEntry, CreateAccountRequest},
};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建单个登录账号
    pub async fn create_account(
        &self,
        request: &HttpRequest,
        account: CreateAccountRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_account(self, request, account).await
    }

    // 批量创建教师 / 学生账号
    pub async fn create_bulk_accounts(
        &self,
        request: &HttpRequest,
        entries: Vec<BulkAccountEntry>,
    ) -> ActixResult<HttpResponse> {
        create::create_bulk_accounts(self, request, entries).await
    }

    // 教师账号列表，附带教师档案
    pub async fn list_teacher_accounts(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_teacher_accounts(self, request).await
    }

    // 学生账号列表，附带学生档案
    pub async fn list_student_accounts(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_student_accounts(self, request).await
    }

    // 删除指定角色的账号
    pub async fn delete_account(
        &self,
        request: &HttpRequest,
        id: i64,
        role: UserRole,
    ) -> ActixResult<HttpResponse> {
        delete::delete_account(self, request, id, role).await
    }
}
