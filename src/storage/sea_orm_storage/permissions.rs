//! 权限存储操作

use super::SeaOrmStorage;
use crate::entity::permissions::{ActiveModel, Column, Entity as Permissions};
use crate::entity::subjects::Entity as Subjects;
use crate::errors::{Result, SchoolError};
use crate::models::permissions::{
    entities::{Permission, PermissionWithSubject},
    requests::GrantPermissionRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 按请求原样批量写入权限记录，不做去重
    pub async fn grant_permissions_impl(
        &self,
        permissions: Vec<GrantPermissionRequest>,
    ) -> Result<Vec<Permission>> {
        if permissions.is_empty() {
            return Ok(Vec::new());
        }

        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await?;

        let mut created = Vec::with_capacity(permissions.len());
        for req in permissions {
            let model = ActiveModel {
                teacher_id: Set(req.teacher_id),
                class_id: Set(req.class_id),
                subject_id: Set(req.subject_id),
                have_permission: Set(req.have_permission),
                created_at: Set(now),
                ..Default::default()
            };
            let inserted = model
                .insert(&txn)
                .await
                .map_err(|e| Self::map_write_error("写入权限失败", e))?;
            created.push(inserted.into_permission());
        }

        txn.commit().await?;
        Ok(created)
    }

    /// 列出权限，给定班级时只返回该班级的记录
    pub async fn list_permissions_impl(&self, class_id: Option<i64>) -> Result<Vec<Permission>> {
        let mut select = Permissions::find();
        if let Some(class_id) = class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        let rows = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询权限失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_permission()).collect())
    }

    /// 列出教师在班级中已获授权的记录，并附带科目
    pub async fn list_granted_permissions_impl(
        &self,
        class_id: i64,
        teacher_id: i64,
    ) -> Result<Vec<PermissionWithSubject>> {
        let rows = Permissions::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::HavePermission.eq(true))
            .order_by_asc(Column::Id)
            .find_also_related(Subjects)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询授权记录失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(permission, subject)| PermissionWithSubject {
                permission: permission.into_permission(),
                subject: subject.map(|s| s.into_subject()),
            })
            .collect())
    }

    /// 教师是否拥有某班级某科目的上传权限
    pub async fn has_upload_permission_impl(
        &self,
        teacher_id: i64,
        class_id: i64,
        subject_id: i64,
    ) -> Result<bool> {
        let count = Permissions::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::HavePermission.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询上传权限失败: {e}")))?;

        Ok(count > 0)
    }
}
