//! 科目存储操作

use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{Result, SchoolError};
use crate::models::subjects::{entities::Subject, requests::CreateSubjectRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部科目
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    fn subject_active_model(req: CreateSubjectRequest, now: i64) -> ActiveModel {
        ActiveModel {
            subject_code: Set(req.subject_code.trim().to_string()),
            subject_name: Set(req.subject_name.trim().to_string()),
            subject_abbreviation: Set(req.subject_abbreviation.trim().to_string()),
            created_at: Set(now),
            ..Default::default()
        }
    }

    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();
        let result = Self::subject_active_model(req, now)
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_write_error("创建科目失败", e))?;

        Ok(result.into_subject())
    }

    /// 批量创建科目
    pub async fn create_subjects_impl(&self, subjects: Vec<CreateSubjectRequest>) -> Result<usize> {
        if subjects.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let count = subjects.len();
        let models = subjects
            .into_iter()
            .map(|s| Self::subject_active_model(s, now));

        Subjects::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| Self::map_write_error("批量创建科目失败", e))?;

        Ok(count)
    }

    /// 删除科目，班级与教师中的引用随外键级联删除
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
