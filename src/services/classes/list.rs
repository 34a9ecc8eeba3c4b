use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classes().await {
        Ok(classes) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(classes, "Classes retrieved")))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch classes",
            &e,
        )),
    }
}
