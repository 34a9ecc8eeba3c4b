use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, BulkInsertResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    if !student.is_valid() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Enrollment number is required",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_student(student).await {
        Ok(student) => {
            info!("Student {} created", student.enrollment_number);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student added successfully")))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Student creation failed",
            &e,
        )),
    }
}

pub async fn bulk_create_students(
    service: &StudentService,
    request: &HttpRequest,
    students: Vec<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    let total = students.len();
    let valid: Vec<CreateStudentRequest> =
        students.into_iter().filter(|s| s.is_valid()).collect();

    if valid.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NoValidEntries,
            "No valid students to insert",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_students(valid).await {
        Ok(inserted) => {
            info!("Bulk imported {} students", inserted);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                BulkInsertResponse {
                    inserted,
                    skipped: total - inserted,
                },
                "Students added successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Bulk student import failed",
            &e,
        )),
    }
}
