use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 上传文件所在目录
    fn upload_dir(&self) -> &str;

    /// 教室管理方法
    async fn list_rooms(&self) -> Result<Vec<Room>>;
    async fn create_room(&self, room: CreateRoomRequest) -> Result<Room>;
    // 批量创建，返回写入条数
    async fn create_rooms(&self, rooms: Vec<CreateRoomRequest>) -> Result<usize>;
    async fn delete_room(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过登录名获取教师档案
    async fn get_teacher_by_username(&self, username: &str) -> Result<Option<Teacher>>;
    async fn list_teachers_by_usernames(&self, usernames: &[String]) -> Result<Vec<Teacher>>;
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn create_teachers(&self, teachers: Vec<CreateTeacherRequest>) -> Result<usize>;
    // 删除教师及同名用户账号
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 科目管理方法
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn create_subjects(&self, subjects: Vec<CreateSubjectRequest>) -> Result<usize>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 班级管理方法
    async fn list_classes(&self) -> Result<Vec<Class>>;
    async fn get_class_by_id(&self, id: i64) -> Result<Option<Class>>;
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    async fn delete_class(&self, id: i64) -> Result<bool>;
    // 整体替换课表
    async fn update_class_schedule(
        &self,
        id: i64,
        schedule: serde_json::Value,
    ) -> Result<Option<Class>>;
    // 整体替换班级科目
    async fn assign_class_subjects(&self, id: i64, subject_ids: Vec<i64>)
    -> Result<Option<Class>>;
    // 把班级科目追加到每位教师并关联教师到班级
    async fn assign_class_teachers(&self, id: i64, teacher_ids: Vec<i64>)
    -> Result<Option<Class>>;

    /// 权限管理方法
    async fn grant_permissions(
        &self,
        permissions: Vec<GrantPermissionRequest>,
    ) -> Result<Vec<Permission>>;
    // 不区分授权状态
    async fn list_permissions(&self, class_id: Option<i64>) -> Result<Vec<Permission>>;
    // 仅返回已授权记录并附带科目
    async fn list_granted_permissions(
        &self,
        class_id: i64,
        teacher_id: i64,
    ) -> Result<Vec<PermissionWithSubject>>;
    async fn has_upload_permission(
        &self,
        teacher_id: i64,
        class_id: i64,
        subject_id: i64,
    ) -> Result<bool>;

    /// 用户管理方法
    async fn create_user(&self, account: NewAccount) -> Result<User>;
    // 单事务批量创建
    async fn create_users(&self, accounts: Vec<NewAccount>) -> Result<usize>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 已存在的用户名
    async fn find_existing_usernames(&self, usernames: &[String]) -> Result<Vec<String>>;
    async fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>>;
    // 仅当用户存在且角色匹配时删除
    async fn delete_user_with_role(&self, id: i64, role: UserRole) -> Result<bool>;
    async fn count_users(&self) -> Result<u64>;

    /// 学生管理方法
    async fn list_students(&self) -> Result<Vec<Student>>;
    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>>;
    async fn get_student_by_enrollment(&self, enrollment_number: &str)
    -> Result<Option<Student>>;
    async fn list_students_by_enrollments(&self, enrollments: &[String]) -> Result<Vec<Student>>;
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn create_students(&self, students: Vec<CreateStudentRequest>) -> Result<usize>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 公告管理方法
    // 仅返回未过期公告
    async fn list_active_announcements(&self, now: i64) -> Result<Vec<Announcement>>;
    async fn create_announcement(&self, announcement: NewAnnouncement) -> Result<Announcement>;
    async fn delete_announcement(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    async fn upload_marks(&self, entries: Vec<MarkEntryRequest>) -> Result<UploadMarksResponse>;
    async fn get_marks_by_student(&self, student_id: i64) -> Result<Option<Marks>>;

    /// 课程资料方法
    async fn create_material(&self, material: CreateMaterialRequest) -> Result<Material>;
    async fn list_materials(&self, query: MaterialListQuery) -> Result<Vec<Material>>;
    async fn get_material_by_id(&self, id: i64) -> Result<Option<Material>>;
    // 返回被删除的记录，供调用方清理文件
    async fn delete_material(&self, id: i64) -> Result<Option<Material>>;

    /// 作业方法
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    async fn list_assignments(&self, query: AssignmentListQuery) -> Result<Vec<Assignment>>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<Option<Assignment>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
