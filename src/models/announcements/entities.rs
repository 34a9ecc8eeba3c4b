use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: i64,
    pub text: String,
    pub posted_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 过期后不再出现在列表中
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
