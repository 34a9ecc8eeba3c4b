pub mod get;
pub mod upload;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::marks::requests::MarkEntryRequest;
use crate::storage::Storage;

pub struct MarksService {
    storage: Option<Arc<dyn Storage>>,
}

impl MarksService {
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

    // 先更新已有成绩，再插入新成绩
    pub async fn upload_marks(
        &self,
        request: &HttpRequest,
        entries: Vec<MarkEntryRequest>,
    ) -> ActixResult<HttpResponse> {
        upload::upload_marks(self, request, entries).await
    }

    pub async fn get_student_marks(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_student_marks(self, request, student_id).await
    }
}
