use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassService, class_not_found};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn get_class_subjects(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(class.subjects, "Class subjects retrieved"))),
        Ok(None) => Ok(class_not_found()),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch class subjects",
            &e,
        )),
    }
}

pub async fn get_class_teachers(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(class.teachers, "Class teachers retrieved"))),
        Ok(None) => Ok(class_not_found()),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch class teachers",
            &e,
        )),
    }
}
