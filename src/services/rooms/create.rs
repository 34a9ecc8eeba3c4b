use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RoomService;
use crate::models::rooms::requests::CreateRoomRequest;
use crate::models::{ApiResponse, BulkInsertResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn create_room(
    service: &RoomService,
    request: &HttpRequest,
    room: CreateRoomRequest,
) -> ActixResult<HttpResponse> {
    if !room.is_valid() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Room name is required",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_room(room).await {
        Ok(room) => {
            info!("Room {} created", room.room_name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(room, "Room created successfully")))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Room creation failed",
            &e,
        )),
    }
}

pub async fn bulk_create_rooms(
    service: &RoomService,
    request: &HttpRequest,
    rooms: Vec<CreateRoomRequest>,
) -> ActixResult<HttpResponse> {
    let total = rooms.len();
    let valid: Vec<CreateRoomRequest> = rooms
        .into_iter()
        .filter(|entry| entry.is_valid())
        .collect();

    if valid.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NoValidEntries,
            "No valid rooms found in the CSV.",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_rooms(valid).await {
        Ok(inserted) => {
            info!("Bulk imported {} rooms", inserted);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                BulkInsertResponse {
                    inserted,
                    skipped: total - inserted,
                },
                format!("{inserted} rooms added successfully"),
            )))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Bulk room import failed",
            &e,
        )),
    }
}
