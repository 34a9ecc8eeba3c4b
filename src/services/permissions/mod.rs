pub mod grant;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::permissions::requests::{GrantPermissionRequest, PermissionQuery};
use crate::storage::Storage;

pub struct PermissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl PermissionService {
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

    // 批量写入权限
    pub async fn grant_permissions(
        &self,
        request: &HttpRequest,
        permissions: Vec<GrantPermissionRequest>,
    ) -> ActixResult<HttpResponse> {
        grant::grant_permissions(self, request, permissions).await
    }

    // 同时给出 classId 与 teacherId 时只返回已授权记录
    pub async fn list_permissions(
        &self,
        request: &HttpRequest,
        query: PermissionQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_permissions(self, request, query).await
    }

    // 教师端查询，两个参数都必须提供
    pub async fn list_teacher_permissions(
        &self,
        request: &HttpRequest,
        query: PermissionQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_teacher_permissions(self, request, query).await
    }
}
