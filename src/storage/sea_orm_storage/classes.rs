//! 班级存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::class_subjects::{
    ActiveModel as ClassSubjectActiveModel, Column as ClassSubjectColumn, Entity as ClassSubjects,
};
use crate::entity::class_teachers::{
    ActiveModel as ClassTeacherActiveModel, Column as ClassTeacherColumn, Entity as ClassTeachers,
};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes, Model as ClassModel};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::entity::teacher_subjects::{
    ActiveModel as TeacherSubjectActiveModel, Column as TeacherSubjectColumn,
    Entity as TeacherSubjects,
};
use crate::entity::teachers::Entity as Teachers;
use crate::errors::{Result, SchoolError};
use crate::models::classes::{entities::Class, requests::CreateClassRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 保序去重
fn dedup_ids(ids: Vec<i64>) -> Vec<i64> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

impl SeaOrmStorage {
    /// 读取班级关联的科目与教师 ID
    async fn load_class_links<C: ConnectionTrait>(
        conn: &C,
        class_ids: &[i64],
    ) -> Result<(HashMap<i64, Vec<i64>>, HashMap<i64, Vec<i64>>)> {
        let mut subjects: HashMap<i64, Vec<i64>> = HashMap::new();
        let mut teachers: HashMap<i64, Vec<i64>> = HashMap::new();
        if class_ids.is_empty() {
            return Ok((subjects, teachers));
        }

        let subject_links = ClassSubjects::find()
            .filter(ClassSubjectColumn::ClassId.is_in(class_ids.iter().copied()))
            .order_by_asc(ClassSubjectColumn::Id)
            .all(conn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询班级科目失败: {e}")))?;
        for link in subject_links {
            subjects.entry(link.class_id).or_default().push(link.subject_id);
        }

        let teacher_links = ClassTeachers::find()
            .filter(ClassTeacherColumn::ClassId.is_in(class_ids.iter().copied()))
            .order_by_asc(ClassTeacherColumn::Id)
            .all(conn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询班级教师失败: {e}")))?;
        for link in teacher_links {
            teachers.entry(link.class_id).or_default().push(link.teacher_id);
        }

        Ok((subjects, teachers))
    }

    async fn load_class<C: ConnectionTrait>(conn: &C, model: ClassModel) -> Result<Class> {
        let (mut subjects, mut teachers) = Self::load_class_links(conn, &[model.id]).await?;
        let id = model.id;
        Ok(model.into_class(
            subjects.remove(&id).unwrap_or_default(),
            teachers.remove(&id).unwrap_or_default(),
        ))
    }

    /// 列出全部班级
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询班级列表失败: {e}")))?;

        let ids: Vec<i64> = classes.iter().map(|c| c.id).collect();
        let (mut subjects, mut teachers) = Self::load_class_links(&self.db, &ids).await?;

        Ok(classes
            .into_iter()
            .map(|c| {
                let id = c.id;
                c.into_class(
                    subjects.remove(&id).unwrap_or_default(),
                    teachers.remove(&id).unwrap_or_default(),
                )
            })
            .collect())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询班级失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(Self::load_class(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    /// 创建班级，同时写入初始科目与教师关联
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();
        let schedule = req
            .schedule
            .unwrap_or_else(|| serde_json::Value::Object(Default::default()));

        let txn = self.db.begin().await?;

        let class = ActiveModel {
            class_name: Set(req.class_name.trim().to_string()),
            section: Set(req.section),
            schedule: Set(serde_json::to_string(&schedule)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| Self::map_write_error("创建班级失败", e))?;

        let subject_ids = dedup_ids(req.subjects);
        if !subject_ids.is_empty() {
            ClassSubjects::insert_many(subject_ids.into_iter().map(|subject_id| {
                ClassSubjectActiveModel {
                    class_id: Set(class.id),
                    subject_id: Set(subject_id),
                    ..Default::default()
                }
            }))
            .exec(&txn)
            .await
            .map_err(|e| Self::map_write_error("写入班级科目失败", e))?;
        }

        let teacher_ids = dedup_ids(req.teachers);
        if !teacher_ids.is_empty() {
            ClassTeachers::insert_many(teacher_ids.into_iter().map(|teacher_id| {
                ClassTeacherActiveModel {
                    class_id: Set(class.id),
                    teacher_id: Set(teacher_id),
                    ..Default::default()
                }
            }))
            .exec(&txn)
            .await
            .map_err(|e| Self::map_write_error("写入班级教师失败", e))?;
        }

        let created = Self::load_class(&txn, class).await?;
        txn.commit().await?;
        Ok(created)
    }

    /// 删除班级，关联记录随外键级联删除
    pub async fn delete_class_impl(&self, id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 整体替换课表
    pub async fn update_class_schedule_impl(
        &self,
        id: i64,
        schedule: serde_json::Value,
    ) -> Result<Option<Class>> {
        let Some(existing) = Classes::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.schedule = Set(serde_json::to_string(&schedule)?);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新课表失败: {e}")))?;

        Ok(Some(Self::load_class(&self.db, updated).await?))
    }

    /// 替换班级科目列表
    pub async fn assign_class_subjects_impl(
        &self,
        id: i64,
        subject_ids: Vec<i64>,
    ) -> Result<Option<Class>> {
        let txn = self.db.begin().await?;

        let Some(existing) = Classes::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        ClassSubjects::delete_many()
            .filter(ClassSubjectColumn::ClassId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("清空班级科目失败: {e}")))?;

        let subject_ids = dedup_ids(subject_ids);
        if !subject_ids.is_empty() {
            ClassSubjects::insert_many(subject_ids.into_iter().map(|subject_id| {
                ClassSubjectActiveModel {
                    class_id: Set(id),
                    subject_id: Set(subject_id),
                    ..Default::default()
                }
            }))
            .exec(&txn)
            .await
            .map_err(|e| Self::map_write_error("写入班级科目失败", e))?;
        }

        let mut model: ActiveModel = existing.into();
        model.updated_at = Set(chrono::Utc::now().timestamp());
        let updated = model.update(&txn).await?;

        let class = Self::load_class(&txn, updated).await?;
        txn.commit().await?;
        Ok(Some(class))
    }

    /// 为班级分配教师
    ///
    /// 班级的每个科目以未授权状态追加到教师的任教科目中（按科目去重），
    /// 教师同时关联到班级。任一教师不存在时整体回滚。
    pub async fn assign_class_teachers_impl(
        &self,
        id: i64,
        teacher_ids: Vec<i64>,
    ) -> Result<Option<Class>> {
        let txn = self.db.begin().await?;

        let Some(existing) = Classes::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let class_subject_ids: Vec<i64> = ClassSubjects::find()
            .filter(ClassSubjectColumn::ClassId.eq(id))
            .order_by_asc(ClassSubjectColumn::Id)
            .all(&txn)
            .await?
            .into_iter()
            .map(|link| link.subject_id)
            .collect();

        let subjects = if class_subject_ids.is_empty() {
            Vec::new()
        } else {
            Subjects::find()
                .filter(SubjectColumn::Id.is_in(class_subject_ids))
                .order_by_asc(SubjectColumn::Id)
                .all(&txn)
                .await?
        };

        for teacher_id in dedup_ids(teacher_ids) {
            if Teachers::find_by_id(teacher_id).one(&txn).await?.is_none() {
                return Err(SchoolError::not_found(format!(
                    "Teacher with id {teacher_id} not found"
                )));
            }

            for subject in &subjects {
                let assigned = TeacherSubjects::find()
                    .filter(TeacherSubjectColumn::TeacherId.eq(teacher_id))
                    .filter(TeacherSubjectColumn::SubjectId.eq(subject.id))
                    .one(&txn)
                    .await?;
                if assigned.is_some() {
                    continue;
                }

                TeacherSubjectActiveModel {
                    teacher_id: Set(teacher_id),
                    subject_id: Set(subject.id),
                    subject_name: Set(subject.subject_name.clone()),
                    upload_permission: Set(false),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| Self::map_write_error("写入教师科目失败", e))?;
            }

            let linked = ClassTeachers::find()
                .filter(ClassTeacherColumn::ClassId.eq(id))
                .filter(ClassTeacherColumn::TeacherId.eq(teacher_id))
                .one(&txn)
                .await?;
            if linked.is_none() {
                ClassTeacherActiveModel {
                    class_id: Set(id),
                    teacher_id: Set(teacher_id),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| Self::map_write_error("写入班级教师失败", e))?;
            }
        }

        let mut model: ActiveModel = existing.into();
        model.updated_at = Set(chrono::Utc::now().timestamp());
        let updated = model.update(&txn).await?;

        let class = Self::load_class(&txn, updated).await?;
        txn.commit().await?;
        Ok(Some(class))
    }
}

#[cfg(test)]
mod tests {
    use super::dedup_ids;

    #[test]
    fn test_dedup_ids_keeps_first_occurrence() {
        assert_eq!(dedup_ids(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert!(dedup_ids(Vec::new()).is_empty());
    }
}
