use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students().await {
        Ok(students) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(students, "Students retrieved")))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch students",
            &e,
        )),
    }
}

pub async fn list_students_by_class(
    service: &StudentService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students_by_class(class_id).await {
        // 空班级视为未找到
        Ok(students) if students.is_empty() => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::StudentNotFound, "No students found for this class"),
        )),
        Ok(students) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(students, "Students retrieved")))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch students by class",
            &e,
        )),
    }
}
