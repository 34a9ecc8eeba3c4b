pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::rooms::requests::CreateRoomRequest;
use crate::storage::Storage;

pub struct RoomService {
    storage: Option<Arc<dyn Storage>>,
}

impl RoomService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_rooms(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_rooms(self, request).await
    }

    pub async fn create_room(
        &self,
        request: &HttpRequest,
        room: CreateRoomRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_room(self, request, room).await
    }

    // 批量导入（前端由 CSV 解析而来）
    pub async fn bulk_create_rooms(
        &self,
        request: &HttpRequest,
        rooms: Vec<CreateRoomRequest>,
    ) -> ActixResult<HttpResponse> {
        create::bulk_create_rooms(self, request, rooms).await
    }

    pub async fn delete_room(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_room(self, request, id).await
    }
}
