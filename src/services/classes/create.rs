use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    if class_data.class_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Class name is required",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} created with id {}", class.class_name, class.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(class, "Class created successfully")))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::ClassCreationFailed,
            "Class creation failed",
            &e,
        )),
    }
}
