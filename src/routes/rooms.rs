use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::rooms::requests::CreateRoomRequest;
use crate::services::RoomService;
use crate::utils::SafeIdI64;

// 懒加载的全局 ROOM_SERVICE 实例
static ROOM_SERVICE: Lazy<RoomService> = Lazy::new(RoomService::new_lazy);

// HTTP处理程序
pub async fn list_rooms(req: HttpRequest) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.list_rooms(&req).await
}

pub async fn create_room(
    req: HttpRequest,
    room: web::Json<CreateRoomRequest>,
) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.create_room(&req, room.into_inner()).await
}

pub async fn bulk_create_rooms(
    req: HttpRequest,
    rooms: web::Json<Vec<CreateRoomRequest>>,
) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.bulk_create_rooms(&req, rooms.into_inner()).await
}

pub async fn delete_room(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ROOM_SERVICE.delete_room(&req, id.0).await
}

// 配置路由
pub fn configure_rooms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/rooms")
            .service(
                web::resource("")
                    .route(web::get().to(list_rooms))
                    .route(web::post().to(create_room)),
            )
            .service(web::resource("/bulk").route(web::post().to(bulk_create_rooms)))
            .service(web::resource("/{id}").route(web::delete().to(delete_room))),
    );
}
