//! 公告存储操作

use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{Result, SchoolError};
use crate::models::announcements::{entities::Announcement, requests::NewAnnouncement};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出尚未过期的公告，最新的在前
    pub async fn list_active_announcements_impl(&self, now: i64) -> Result<Vec<Announcement>> {
        let rows = Announcements::find()
            .filter(Column::ExpiresAt.gt(now))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_announcement()).collect())
    }

    /// 创建公告
    pub async fn create_announcement_impl(&self, req: NewAnnouncement) -> Result<Announcement> {
        let model = ActiveModel {
            text: Set(req.text),
            posted_by: Set(req.posted_by),
            created_at: Set(chrono::Utc::now().timestamp()),
            expires_at: Set(req.expires_at.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    /// 删除公告
    pub async fn delete_announcement_impl(&self, id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
