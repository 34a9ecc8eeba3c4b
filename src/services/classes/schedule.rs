use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassService, class_not_found};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn set_schedule(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    schedule: serde_json::Value,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_class_schedule(class_id, schedule).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(class, "Schedule updated successfully"))),
        Ok(None) => Ok(class_not_found()),
        Err(e) => Ok(storage_error_response(
            ErrorCode::ScheduleUpdateFailed,
            "Schedule update failed",
            &e,
        )),
    }
}

pub async fn get_schedule(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(class.schedule, "Schedule retrieved")))
        }
        Ok(None) => Ok(class_not_found()),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch schedule",
            &e,
        )),
    }
}
