//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{Result, SchoolError};
use crate::models::assignments::{
    entities::Assignment,
    requests::{AssignmentListQuery, CreateAssignmentRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建作业记录
    pub async fn create_assignment_impl(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            teacher_id: Set(req.teacher_id),
            subject_id: Set(req.subject_id),
            title: Set(req.title),
            description: Set(req.description),
            due_date: Set(req.due_date.map(|d| d.timestamp())),
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
            .map_err(|e| Self::map_write_error("创建作业记录失败", e))?;

        Ok(result.into_assignment(&self.upload_dir))
    }

    /// 列出作业，可按班级与科目筛选，截止时间近的在前
    pub async fn list_assignments_impl(&self, query: AssignmentListQuery) -> Result<Vec<Assignment>> {
        let mut select = Assignments::find();
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        let rows = select
            .order_by_asc(Column::DueDate)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|m| m.into_assignment(&self.upload_dir))
            .collect())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment(&self.upload_dir)))
    }

    /// 删除作业记录，返回被删除的记录
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let Some(existing) = Assignments::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(Some(existing.into_assignment(&self.upload_dir)))
    }
}
