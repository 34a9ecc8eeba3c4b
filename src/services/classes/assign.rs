use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ClassService, class_not_found};
use crate::errors::SchoolError;
use crate::models::classes::requests::{AssignSubjectsRequest, AssignTeachersRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn assign_subjects(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    body: AssignSubjectsRequest,
) -> ActixResult<HttpResponse> {
    let Some(subject_ids) = body.subject_ids() else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AssignmentInputInvalid,
            "Invalid input. Subjects should be an array of IDs.",
        )));
    };

    let storage = service.get_storage(request);
    match storage.assign_class_subjects(class_id, subject_ids).await {
        Ok(Some(class)) => {
            info!("Class {} now has subjects {:?}", class_id, class.subjects);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(class, "Subjects assigned successfully")))
        }
        Ok(None) => Ok(class_not_found()),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to assign subjects",
            &e,
        )),
    }
}

pub async fn assign_teachers(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    body: AssignTeachersRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_ids) = body.teacher_ids() else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AssignmentInputInvalid,
            "Invalid input. teacherIds should be an array of IDs.",
        )));
    };

    let storage = service.get_storage(request);
    match storage.assign_class_teachers(class_id, teacher_ids).await {
        Ok(Some(class)) => {
            info!("Class {} now has teachers {:?}", class_id, class.teachers);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                class,
                "Teachers assigned and subjects updated successfully",
            )))
        }
        Ok(None) => Ok(class_not_found()),
        // 教师不存在
        Err(SchoolError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::TeacherNotFound, msg))),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to assign teachers",
            &e,
        )),
    }
}
