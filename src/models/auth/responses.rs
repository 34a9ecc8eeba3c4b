use serde::Serialize;

use crate::models::{students::entities::Student, teachers::entities::Teacher};

// 登录返回的档案，字段直接展开到响应对象中
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LoginProfile {
    Teacher(Teacher),
    Student(Student),
    Admin { username: String },
}

// 登录响应：{ role, ...档案字段 }
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub role: String,
    #[serde(flatten)]
    pub profile: LoginProfile,
}
