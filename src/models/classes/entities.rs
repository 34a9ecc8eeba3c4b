use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub class_name: String,
    // 分班
    pub section: Option<String>,
    // 课表，结构由前端决定，后端整体存取
    pub schedule: serde_json::Value,
    // 班级开设的科目ID
    pub subjects: Vec<i64>,
    // 班级任课教师ID
    pub teachers: Vec<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
