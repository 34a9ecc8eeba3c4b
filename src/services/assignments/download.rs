use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::files::download_document;
use crate::services::storage_error_response;

pub async fn download_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(id).await {
        Ok(Some(assignment)) => Ok(download_document(
            storage.upload_dir(),
            &assignment.stored_name,
            &assignment.file_name,
        )),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "Assignment not found",
        ))),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Assignment query failed",
            &e,
        )),
    }
}
