use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MarksService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn get_student_marks(
    service: &MarksService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_marks_by_student(student_id).await {
        Ok(Some(marks)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(marks, "Marks retrieved")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MarksNotFound,
            "Marks not found",
        ))),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch marks",
            &e,
        )),
    }
}
