use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, BulkInsertResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if !subject.is_valid() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Subject code, name and abbreviation are required",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_subject(subject).await {
        Ok(subject) => {
            info!("Subject {} created", subject.subject_name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(subject, "Subject created successfully")))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Subject creation failed",
            &e,
        )),
    }
}

pub async fn bulk_create_subjects(
    service: &SubjectService,
    request: &HttpRequest,
    subjects: Vec<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    let total = subjects.len();
    let valid: Vec<CreateSubjectRequest> = subjects
        .into_iter()
        .filter(|entry| entry.is_valid())
        .collect();

    if valid.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NoValidEntries,
            "No valid subjects found in the CSV.",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_subjects(valid).await {
        Ok(inserted) => {
            info!("Bulk imported {} subjects", inserted);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                BulkInsertResponse {
                    inserted,
                    skipped: total - inserted,
                },
                format!("{inserted} subjects added successfully"),
            )))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Bulk subject import failed",
            &e,
        )),
    }
}
