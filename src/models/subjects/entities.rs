use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: i64,
    // 科目代码，如 CS301
    pub subject_code: String,
    pub subject_name: String,
    // 科目简称
    pub subject_abbreviation: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
