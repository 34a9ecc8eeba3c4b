//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolError};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    fn student_active_model(req: CreateStudentRequest, now: i64) -> ActiveModel {
        ActiveModel {
            enrollment_number: Set(req.enrollment_number.trim().to_string()),
            name: Set(req.name.trim().to_string()),
            age: Set(req.age),
            class_id: Set(req.class_id),
            created_at: Set(now),
            ..Default::default()
        }
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let students = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出班级中的学生
    pub async fn list_students_by_class_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::EnrollmentNumber)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询班级学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 通过学号获取学生
    pub async fn get_student_by_enrollment_impl(
        &self,
        enrollment_number: &str,
    ) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::EnrollmentNumber.eq(enrollment_number))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 按学号批量获取学生
    pub async fn list_students_by_enrollments_impl(
        &self,
        enrollments: &[String],
    ) -> Result<Vec<Student>> {
        if enrollments.is_empty() {
            return Ok(Vec::new());
        }

        let students = Students::find()
            .filter(Column::EnrollmentNumber.is_in(enrollments.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();
        let result = Self::student_active_model(req, now)
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_write_error("创建学生失败", e))?;

        Ok(result.into_student())
    }

    /// 批量创建学生
    pub async fn create_students_impl(&self, students: Vec<CreateStudentRequest>) -> Result<usize> {
        if students.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let count = students.len();
        let models = students
            .into_iter()
            .map(|s| Self::student_active_model(s, now));

        Students::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| Self::map_write_error("批量创建学生失败", e))?;

        Ok(count)
    }

    /// 删除学生，成绩随外键级联删除
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
