use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoomService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn list_rooms(
    service: &RoomService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_rooms().await {
        Ok(rooms) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(rooms, "Rooms retrieved")))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch rooms",
            &e,
        )),
    }
}
