//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::mark_entries::{
    ActiveModel as MarkEntryActiveModel, Column as MarkEntryColumn, Entity as MarkEntries,
    Model as MarkEntryModel,
};
use crate::entity::marks::{ActiveModel, Column, Entity as MarksEntity, Model as MarksModel};
use crate::errors::{Result, SchoolError};
use crate::models::marks::{
    entities::{ExamType, GradeEntry, Grades, Marks},
    requests::MarkEntryRequest,
    responses::UploadMarksResponse,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::warn;

impl SeaOrmStorage {
    async fn find_marks_record(
        txn: &DatabaseTransaction,
        student_id: i64,
    ) -> Result<Option<MarksModel>> {
        Ok(MarksEntity::find()
            .filter(Column::StudentId.eq(student_id))
            .one(txn)
            .await?)
    }

    async fn find_mark_entry(
        txn: &DatabaseTransaction,
        marks_id: i64,
        entry: &MarkEntryRequest,
    ) -> Result<Option<MarkEntryModel>> {
        Ok(MarkEntries::find()
            .filter(MarkEntryColumn::MarksId.eq(marks_id))
            .filter(MarkEntryColumn::Exam.eq(entry.exam.as_str()))
            .filter(MarkEntryColumn::SubjectId.eq(entry.subject_id))
            .one(txn)
            .await?)
    }

    // 成绩单按学生唯一，提交的班级必须与已有成绩单一致
    fn ensure_same_class(record: &MarksModel, entry: &MarkEntryRequest) -> Result<()> {
        if record.class_id != entry.class_id {
            return Err(SchoolError::validation(format!(
                "student {} has marks recorded under class {}, not class {}",
                entry.student_id, record.class_id, entry.class_id
            )));
        }
        Ok(())
    }

    async fn overwrite_mark_entry(
        txn: &DatabaseTransaction,
        existing: MarkEntryModel,
        entry: &MarkEntryRequest,
    ) -> Result<()> {
        let mut model: MarkEntryActiveModel = existing.into();
        model.marks = Set(entry.marks);
        model.max_marks = Set(entry.max_marks);
        model
            .update(txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新成绩失败: {e}")))?;
        Ok(())
    }

    /// 上传成绩
    ///
    /// 第一轮原地更新已存在的（学生, 考试, 科目）条目；第二轮为其余条目
    /// 按需创建学生成绩单并插入。两轮在同一事务中完成，班级与已有成绩单
    /// 不符时整批回滚。
    pub async fn upload_marks_impl(
        &self,
        entries: Vec<MarkEntryRequest>,
    ) -> Result<UploadMarksResponse> {
        let now = chrono::Utc::now().timestamp();
        let mut result = UploadMarksResponse::default();
        let txn = self.db.begin().await?;

        // 第一轮：更新
        let mut pending = Vec::new();
        for entry in entries {
            let existing = match Self::find_marks_record(&txn, entry.student_id).await? {
                Some(record) => {
                    Self::ensure_same_class(&record, &entry)?;
                    Self::find_mark_entry(&txn, record.id, &entry).await?
                }
                None => None,
            };
            match existing {
                Some(model) => {
                    Self::overwrite_mark_entry(&txn, model, &entry).await?;
                    result.updated += 1;
                }
                None => pending.push(entry),
            }
        }

        // 第二轮：插入
        for entry in pending {
            let record = match Self::find_marks_record(&txn, entry.student_id).await? {
                Some(record) => {
                    Self::ensure_same_class(&record, &entry)?;
                    record
                }
                None => ActiveModel {
                    student_id: Set(entry.student_id),
                    class_id: Set(entry.class_id),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| Self::map_write_error("创建成绩单失败", e))?,
            };

            // 同一批次内重复的条目
            if let Some(model) = Self::find_mark_entry(&txn, record.id, &entry).await? {
                Self::overwrite_mark_entry(&txn, model, &entry).await?;
                result.updated += 1;
                continue;
            }

            MarkEntryActiveModel {
                marks_id: Set(record.id),
                exam: Set(entry.exam.to_string()),
                subject_id: Set(entry.subject_id),
                marks: Set(entry.marks),
                max_marks: Set(entry.max_marks),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| Self::map_write_error("写入成绩失败", e))?;
            result.inserted += 1;
        }

        txn.commit().await?;
        Ok(result)
    }

    /// 获取学生成绩单
    pub async fn get_marks_by_student_impl(&self, student_id: i64) -> Result<Option<Marks>> {
        let Some(record) = MarksEntity::find()
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询成绩失败: {e}")))?
        else {
            return Ok(None);
        };

        let rows = MarkEntries::find()
            .filter(MarkEntryColumn::MarksId.eq(record.id))
            .order_by_asc(MarkEntryColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询成绩明细失败: {e}")))?;

        let mut grades = Grades::default();
        for row in rows {
            let Ok(exam) = row.exam.parse::<ExamType>() else {
                warn!("成绩条目 {} 的考试类型无法识别: {}", row.id, row.exam);
                continue;
            };
            grades.bucket_mut(exam).push(GradeEntry {
                subject: row.subject_id,
                marks: row.marks,
                max_marks: row.max_marks,
            });
        }

        Ok(Some(Marks {
            id: record.id,
            student_id: record.student_id,
            class_id: record.class_id,
            grades,
        }))
    }
}
