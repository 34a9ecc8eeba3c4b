use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程资料
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct Material {
    pub id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub description: Option<String>,
    // 上传时的原始文件名
    pub file_name: String,
    // 磁盘上的 UUID 文件名
    pub stored_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub content_type: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
