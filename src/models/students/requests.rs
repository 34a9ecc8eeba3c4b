use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    #[serde(default)]
    pub enrollment_number: String,
    #[serde(default)]
    pub name: String,
    pub age: Option<String>,
    pub class_id: Option<i64>,
}

impl CreateStudentRequest {
    pub fn is_valid(&self) -> bool {
        !self.enrollment_number.trim().is_empty()
    }
}
