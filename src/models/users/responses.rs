use serde::Serialize;
use ts_rs::TS;

use super::entities::{User, UserRole};
use crate::models::{students::entities::Student, teachers::entities::Teacher};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct AccountResponse {
    pub username: String,
    pub role: UserRole,
}

// 教师账号及其教师档案
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct TeacherAccount {
    #[serde(flatten)]
    #[ts(flatten)]
    pub user: User,
    pub teacher_details: Option<Teacher>,
}

// 学生账号及其学生档案
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct StudentAccount {
    #[serde(flatten)]
    #[ts(flatten)]
    pub user: User,
    pub student_details: Option<Student>,
}
