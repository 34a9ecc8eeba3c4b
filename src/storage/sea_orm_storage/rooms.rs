//! 教室存储操作

use super::SeaOrmStorage;
use crate::entity::rooms::{ActiveModel, Column, Entity as Rooms};
use crate::errors::{Result, SchoolError};
use crate::models::rooms::{entities::Room, requests::CreateRoomRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部教室
    pub async fn list_rooms_impl(&self) -> Result<Vec<Room>> {
        let rooms = Rooms::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教室列表失败: {e}")))?;

        Ok(rooms.into_iter().map(|m| m.into_room()).collect())
    }

    /// 创建教室
    pub async fn create_room_impl(&self, req: CreateRoomRequest) -> Result<Room> {
        let model = ActiveModel {
            room_name: Set(req.room_name.trim().to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_write_error("创建教室失败", e))?;

        Ok(result.into_room())
    }

    /// 批量创建教室
    pub async fn create_rooms_impl(&self, rooms: Vec<CreateRoomRequest>) -> Result<usize> {
        if rooms.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let count = rooms.len();
        let models = rooms.into_iter().map(|r| ActiveModel {
            room_name: Set(r.room_name.trim().to_string()),
            created_at: Set(now),
            ..Default::default()
        });

        Rooms::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| Self::map_write_error("批量创建教室失败", e))?;

        Ok(count)
    }

    /// 删除教室
    pub async fn delete_room_impl(&self, id: i64) -> Result<bool> {
        let result = Rooms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除教室失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
