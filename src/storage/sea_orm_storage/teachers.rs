//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::teacher_subjects::{Column as TeacherSubjectColumn, Entity as TeacherSubjects};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, SchoolError};
use crate::models::teachers::{entities::Teacher, requests::CreateTeacherRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

impl SeaOrmStorage {
    /// 列出全部教师及其任教科目
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let rows = Teachers::find()
            .order_by_asc(Column::Id)
            .find_with_related(TeacherSubjects)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(teacher, subjects)| teacher.into_teacher(subjects))
            .collect())
    }

    /// 加载单个教师的任教科目
    async fn load_teacher(&self, model: crate::entity::teachers::Model) -> Result<Teacher> {
        let subjects = TeacherSubjects::find()
            .filter(TeacherSubjectColumn::TeacherId.eq(model.id))
            .order_by_asc(TeacherSubjectColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师科目失败: {e}")))?;

        Ok(model.into_teacher(subjects))
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.load_teacher(model).await?)),
            None => Ok(None),
        }
    }

    /// 通过登录名获取教师
    pub async fn get_teacher_by_username_impl(&self, username: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(self.load_teacher(model).await?)),
            None => Ok(None),
        }
    }

    /// 按登录名批量获取教师
    pub async fn list_teachers_by_usernames_impl(
        &self,
        usernames: &[String],
    ) -> Result<Vec<Teacher>> {
        if usernames.is_empty() {
            return Ok(Vec::new());
        }

        let rows = Teachers::find()
            .filter(Column::Username.is_in(usernames.iter().cloned()))
            .order_by_asc(Column::Id)
            .find_with_related(TeacherSubjects)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(teacher, subjects)| teacher.into_teacher(subjects))
            .collect())
    }

    fn teacher_active_model(req: CreateTeacherRequest, now: i64) -> ActiveModel {
        let username = req.normalized_username();
        ActiveModel {
            faculty_name: Set(req.faculty_name.trim().to_string()),
            faculty_abbreviation: Set(req.faculty_abbreviation.trim().to_string()),
            username: Set(username),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();
        let result = Self::teacher_active_model(req, now)
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_write_error("创建教师失败", e))?;

        Ok(result.into_teacher(Vec::new()))
    }

    /// 批量创建教师
    pub async fn create_teachers_impl(&self, teachers: Vec<CreateTeacherRequest>) -> Result<usize> {
        if teachers.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let count = teachers.len();
        let models = teachers
            .into_iter()
            .map(|t| Self::teacher_active_model(t, now));

        Teachers::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| Self::map_write_error("批量创建教师失败", e))?;

        Ok(count)
    }

    /// 删除教师，同时删除 username 相同的用户账号
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        let Some(teacher) = Teachers::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };

        Teachers::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除教师失败: {e}")))?;

        if let Some(username) = teacher.username.as_deref() {
            let removed = Users::delete_many()
                .filter(UserColumn::Username.eq(username))
                .exec(&txn)
                .await
                .map_err(|e| SchoolError::database_operation(format!("删除教师账号失败: {e}")))?;
            if removed.rows_affected > 0 {
                info!("教师 {} 的登录账号 {} 已一并删除", id, username);
            }
        }

        txn.commit().await?;
        Ok(true)
    }
}
