use std::collections::BTreeSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MarksService;
use crate::models::marks::requests::MarkEntryRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn upload_marks(
    service: &MarksService,
    request: &HttpRequest,
    entries: Vec<MarkEntryRequest>,
) -> ActixResult<HttpResponse> {
    if entries.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MarksInvalid,
            "Marks data must be a non-empty array",
        )));
    }

    // 任意一条非法则整批拒绝
    if let Some(bad) = entries.iter().find(|e| !e.is_valid()) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MarksInvalid,
            format!(
                "Invalid marks for student {}: {} out of {}",
                bad.student_id, bad.marks, bad.max_marks
            ),
        )));
    }

    let storage = service.get_storage(request);

    // 每个（教师, 班级, 科目）组合都必须已授权
    let keys: BTreeSet<(i64, i64, i64)> =
        entries.iter().map(MarkEntryRequest::permission_key).collect();
    for (teacher_id, class_id, subject_id) in keys {
        match storage
            .has_upload_permission(teacher_id, class_id, subject_id)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::PermissionDenied,
                    format!(
                        "Teacher {teacher_id} does not have permission to upload marks for class {class_id}, subject {subject_id}"
                    ),
                )));
            }
            Err(e) => {
                return Ok(storage_error_response(
                    ErrorCode::InternalServerError,
                    "Permission check failed",
                    &e,
                ));
            }
        }
    }

    match storage.upload_marks(entries).await {
        Ok(result) => {
            info!(
                "Marks uploaded: {} updated, {} inserted",
                result.updated, result.inserted
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                result,
                "Marks uploaded successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::MarksUploadFailed,
            "Marks upload failed",
            &e,
        )),
    }
}
