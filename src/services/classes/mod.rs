pub mod assign;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod schedule;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{
    AssignSubjectsRequest, AssignTeachersRequest, CreateClassRequest,
};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    // 获取班级列表
    pub async fn list_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_classes(self, request).await
    }

    pub async fn create_class(
        &self,
        request: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, request, class_data).await
    }

    // 根据班级 ID 删除班级
    pub async fn delete_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, request, class_id).await
    }

    // 整体替换课表
    pub async fn set_schedule(
        &self,
        request: &HttpRequest,
        class_id: i64,
        schedule: serde_json::Value,
    ) -> ActixResult<HttpResponse> {
        schedule::set_schedule(self, request, class_id, schedule).await
    }

    pub async fn get_schedule(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        schedule::get_schedule(self, request, class_id).await
    }

    // 班级科目 ID 列表
    pub async fn get_class_subjects(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_class_subjects(self, request, class_id).await
    }

    // 班级教师 ID 列表
    pub async fn get_class_teachers(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_class_teachers(self, request, class_id).await
    }

    pub async fn assign_subjects(
        &self,
        request: &HttpRequest,
        class_id: i64,
        body: AssignSubjectsRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_subjects(self, request, class_id, body).await
    }

    pub async fn assign_teachers(
        &self,
        request: &HttpRequest,
        class_id: i64,
        body: AssignTeachersRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_teachers(self, request, class_id, body).await
    }
}

fn class_not_found() -> HttpResponse {
    use crate::models::{ApiResponse, ErrorCode};

    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::ClassNotFound,
        "Class not found",
    ))
}
