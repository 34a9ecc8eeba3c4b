pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::CreateStudentRequest;
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    pub async fn list_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_students(self, request).await
    }

    pub async fn list_students_by_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_students_by_class(self, request, class_id).await
    }

    pub async fn create_student(
        &self,
        request: &HttpRequest,
        student: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, student).await
    }

    pub async fn bulk_create_students(
        &self,
        request: &HttpRequest,
        students: Vec<CreateStudentRequest>,
    ) -> ActixResult<HttpResponse> {
        create::bulk_create_students(self, request, students).await
    }

    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, id).await
    }
}
