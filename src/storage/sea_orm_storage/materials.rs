//! 课程资料存储操作

use super::SeaOrmStorage;
use crate::entity::materials::{ActiveModel, Column, Entity as Materials};
use crate::errors::{Result, SchoolError};
use crate::models::materials::{
    entities::Material,
    requests::{CreateMaterialRequest, MaterialListQuery},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建资料记录
    pub async fn create_material_impl(&self, req: CreateMaterialRequest) -> Result<Material> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            teacher_id: Set(req.teacher_id),
            subject_id: Set(req.subject_id),
            title: Set(req.title),
            description: Set(req.description),
            file_name: Set(req.file.file_name),
            stored_name: Set(req.file.stored_name),
            file_size: Set(req.file.file_size),
            content_type: Set(req.file.content_type),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_write_error("创建资料记录失败", e))?;

        Ok(result.into_material(&self.upload_dir))
    }

    /// 列出资料，可按班级与科目筛选
    pub async fn list_materials_impl(&self, query: MaterialListQuery) -> Result<Vec<Material>> {
        let mut select = Materials::find();
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        let rows = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询资料列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|m| m.into_material(&self.upload_dir))
            .collect())
    }

    /// 通过 ID 获取资料
    pub async fn get_material_by_id_impl(&self, id: i64) -> Result<Option<Material>> {
        let result = Materials::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询资料失败: {e}")))?;

        Ok(result.map(|m| m.into_material(&self.upload_dir)))
    }

    /// 删除资料记录，返回被删除的记录
    pub async fn delete_material_impl(&self, id: i64) -> Result<Option<Material>> {
        let Some(existing) = Materials::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        Materials::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除资料失败: {e}")))?;

        Ok(Some(existing.into_material(&self.upload_dir)))
    }
}
