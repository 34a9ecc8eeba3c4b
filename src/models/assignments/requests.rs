use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::StoredDocument;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListQuery {
    pub class_id: Option<i64>,
    pub subject_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct CreateAssignmentRequest {
    pub class_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub file: StoredDocument,
}
