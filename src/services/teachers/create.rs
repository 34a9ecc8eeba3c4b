use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::{ApiResponse, BulkInsertResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    if !teacher.is_valid() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Faculty name and abbreviation are required",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_teacher(teacher).await {
        Ok(teacher) => {
            info!("Teacher {} created", teacher.faculty_name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(teacher, "Teacher created successfully")))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Teacher creation failed",
            &e,
        )),
    }
}

pub async fn bulk_create_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    teachers: Vec<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    let total = teachers.len();
    let valid: Vec<CreateTeacherRequest> = teachers
        .into_iter()
        .filter(|entry| entry.is_valid())
        .collect();

    if valid.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NoValidEntries,
            "No valid teachers found in the CSV.",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_teachers(valid).await {
        Ok(inserted) => {
            info!("Bulk imported {} teachers", inserted);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                BulkInsertResponse {
                    inserted,
                    skipped: total - inserted,
                },
                format!("{inserted} teachers added successfully"),
            )))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Bulk teacher import failed",
            &e,
        )),
    }
}
