use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师任教科目条目，按 subject_id 去重
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherSubject {
    pub subject_id: i64,
    pub subject_name: String,
    pub upload_permission: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub faculty_name: String,
    // 教师姓名缩写，排课表中使用
    pub faculty_abbreviation: String,
    // 对应 users 表中的登录名
    pub username: Option<String>,
    pub subjects: Vec<TeacherSubject>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
