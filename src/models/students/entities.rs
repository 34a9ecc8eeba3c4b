use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    // 学号，同时作为学生账号的 username
    pub enrollment_number: String,
    pub name: String,
    pub age: Option<String>,
    pub class_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
