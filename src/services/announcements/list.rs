use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn list_announcements(
    service: &AnnouncementService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let now = chrono::Utc::now().timestamp();

    match storage.list_active_announcements(now).await {
        Ok(announcements) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            announcements,
            "Announcements retrieved",
        ))),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch announcements",
            &e,
        )),
    }
}
