//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod assignments;
mod classes;
mod marks;
mod materials;
mod permissions;
mod rooms;
mod students;
mod subjects;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
    // 上传目录，用于拼接资料文件路径
    pub(crate) upload_dir: String,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::from_connection(db, &config.upload.dir).await?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(storage)
    }

    /// 使用已有连接创建存储并运行迁移
    pub async fn from_connection(db: DatabaseConnection, upload_dir: &str) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self {
            db,
            upload_dir: upload_dir.to_string(),
        })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            // 级联删除依赖外键约束
            .foreign_keys(true)
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(2)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 将约束冲突映射为业务错误，其余保持为数据库错误
    pub(crate) fn map_write_error(context: &str, err: sea_orm::DbErr) -> SchoolError {
        let err = SchoolError::database_operation(format!("{context}: {err}"));
        if err.is_foreign_key_violation() {
            SchoolError::validation(format!("{context}: 引用的记录不存在"))
        } else if err.is_unique_violation() {
            SchoolError::conflict(format!("{context}: 记录已存在"))
        } else {
            err
        }
    }
}

// Storage trait 实现
use crate::models::{
    announcements::{entities::Announcement, requests::NewAnnouncement},
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest},
    },
    classes::{entities::Class, requests::CreateClassRequest},
    marks::{entities::Marks, requests::MarkEntryRequest, responses::UploadMarksResponse},
    materials::{
        entities::Material,
        requests::{CreateMaterialRequest, MaterialListQuery},
    },
    permissions::{
        entities::{Permission, PermissionWithSubject},
        requests::GrantPermissionRequest,
    },
    rooms::{entities::Room, requests::CreateRoomRequest},
    students::{entities::Student, requests::CreateStudentRequest},
    subjects::{entities::Subject, requests::CreateSubjectRequest},
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
    users::{
        entities::{User, UserRole},
        requests::NewAccount,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    fn upload_dir(&self) -> &str {
        &self.upload_dir
    }

    // 教室模块
    async fn list_rooms(&self) -> Result<Vec<Room>> {
        self.list_rooms_impl().await
    }

    async fn create_room(&self, room: CreateRoomRequest) -> Result<Room> {
        self.create_room_impl(room).await
    }

    async fn create_rooms(&self, rooms: Vec<CreateRoomRequest>) -> Result<usize> {
        self.create_rooms_impl(rooms).await
    }

    async fn delete_room(&self, id: i64) -> Result<bool> {
        self.delete_room_impl(id).await
    }

    // 教师模块
    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_username(&self, username: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_username_impl(username).await
    }

    async fn list_teachers_by_usernames(&self, usernames: &[String]) -> Result<Vec<Teacher>> {
        self.list_teachers_by_usernames_impl(usernames).await
    }

    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn create_teachers(&self, teachers: Vec<CreateTeacherRequest>) -> Result<usize> {
        self.create_teachers_impl(teachers).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 科目模块
    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn create_subjects(&self, subjects: Vec<CreateSubjectRequest>) -> Result<usize> {
        self.create_subjects_impl(subjects).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 班级模块
    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn get_class_by_id(&self, id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(id).await
    }

    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn delete_class(&self, id: i64) -> Result<bool> {
        self.delete_class_impl(id).await
    }

    async fn update_class_schedule(
        &self,
        id: i64,
        schedule: serde_json::Value,
    ) -> Result<Option<Class>> {
        self.update_class_schedule_impl(id, schedule).await
    }

    async fn assign_class_subjects(
        &self,
        id: i64,
        subject_ids: Vec<i64>,
    ) -> Result<Option<Class>> {
        self.assign_class_subjects_impl(id, subject_ids).await
    }

    async fn assign_class_teachers(
        &self,
        id: i64,
        teacher_ids: Vec<i64>,
    ) -> Result<Option<Class>> {
        self.assign_class_teachers_impl(id, teacher_ids).await
    }

    // 权限模块
    async fn grant_permissions(
        &self,
        permissions: Vec<GrantPermissionRequest>,
    ) -> Result<Vec<Permission>> {
        self.grant_permissions_impl(permissions).await
    }

    async fn list_permissions(&self, class_id: Option<i64>) -> Result<Vec<Permission>> {
        self.list_permissions_impl(class_id).await
    }

    async fn list_granted_permissions(
        &self,
        class_id: i64,
        teacher_id: i64,
    ) -> Result<Vec<PermissionWithSubject>> {
        self.list_granted_permissions_impl(class_id, teacher_id)
            .await
    }

    async fn has_upload_permission(
        &self,
        teacher_id: i64,
        class_id: i64,
        subject_id: i64,
    ) -> Result<bool> {
        self.has_upload_permission_impl(teacher_id, class_id, subject_id)
            .await
    }

    // 用户模块
    async fn create_user(&self, account: NewAccount) -> Result<User> {
        self.create_user_impl(account).await
    }

    async fn create_users(&self, accounts: Vec<NewAccount>) -> Result<usize> {
        self.create_users_impl(accounts).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn find_existing_usernames(&self, usernames: &[String]) -> Result<Vec<String>> {
        self.find_existing_usernames_impl(usernames).await
    }

    async fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>> {
        self.list_users_by_role_impl(role).await
    }

    async fn delete_user_with_role(&self, id: i64, role: UserRole) -> Result<bool> {
        self.delete_user_with_role_impl(id, role).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学生模块
    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_class_impl(class_id).await
    }

    async fn get_student_by_enrollment(
        &self,
        enrollment_number: &str,
    ) -> Result<Option<Student>> {
        self.get_student_by_enrollment_impl(enrollment_number).await
    }

    async fn list_students_by_enrollments(&self, enrollments: &[String]) -> Result<Vec<Student>> {
        self.list_students_by_enrollments_impl(enrollments).await
    }

    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn create_students(&self, students: Vec<CreateStudentRequest>) -> Result<usize> {
        self.create_students_impl(students).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 公告模块
    async fn list_active_announcements(&self, now: i64) -> Result<Vec<Announcement>> {
        self.list_active_announcements_impl(now).await
    }

    async fn create_announcement(&self, announcement: NewAnnouncement) -> Result<Announcement> {
        self.create_announcement_impl(announcement).await
    }

    async fn delete_announcement(&self, id: i64) -> Result<bool> {
        self.delete_announcement_impl(id).await
    }

    // 成绩模块
    async fn upload_marks(&self, entries: Vec<MarkEntryRequest>) -> Result<UploadMarksResponse> {
        self.upload_marks_impl(entries).await
    }

    async fn get_marks_by_student(&self, student_id: i64) -> Result<Option<Marks>> {
        self.get_marks_by_student_impl(student_id).await
    }

    // 课程资料模块
    async fn create_material(&self, material: CreateMaterialRequest) -> Result<Material> {
        self.create_material_impl(material).await
    }

    async fn list_materials(&self, query: MaterialListQuery) -> Result<Vec<Material>> {
        self.list_materials_impl(query).await
    }

    async fn get_material_by_id(&self, id: i64) -> Result<Option<Material>> {
        self.get_material_by_id_impl(id).await
    }

    async fn delete_material(&self, id: i64) -> Result<Option<Material>> {
        self.delete_material_impl(id).await
    }

    // 作业模块
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn list_assignments(&self, query: AssignmentListQuery) -> Result<Vec<Assignment>> {
        self.list_assignments_impl(query).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<Option<Assignment>> {
        self.delete_assignment_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("school.db").unwrap(),
            "sqlite://school.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert!(SeaOrmStorage::build_database_url("postgres://localhost/school").is_ok());
        assert!(SeaOrmStorage::build_database_url("redis://localhost").is_err());
    }
}
