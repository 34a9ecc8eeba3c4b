use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AnnouncementService;
use crate::models::announcements::requests::{
    CreateAnnouncementRequest, NewAnnouncement, parse_expires_at,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn create_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    announcement: CreateAnnouncementRequest,
) -> ActixResult<HttpResponse> {
    let Some((text, posted_by, expires_at)) = announcement.required_fields() else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AnnouncementInvalid,
            "Text, postedBy, and expiresAt are required",
        )));
    };

    let expires_at = match parse_expires_at(expires_at) {
        Ok(dt) => dt,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AnnouncementInvalid,
                format!("Invalid expiresAt: {}", e.message()),
            )));
        }
    };

    let new_announcement = NewAnnouncement {
        text: text.to_string(),
        posted_by: posted_by.trim().to_string(),
        expires_at,
    };

    let storage = service.get_storage(request);
    match storage.create_announcement(new_announcement).await {
        Ok(announcement) => {
            info!(
                "Announcement {} posted by {}",
                announcement.id, announcement.posted_by
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                announcement,
                "Announcement created successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Announcement creation failed",
            &e,
        )),
    }
}
