use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    #[serde(default)]
    pub faculty_name: String,
    #[serde(default)]
    pub faculty_abbreviation: String,
    pub username: Option<String>,
}

impl CreateTeacherRequest {
    pub fn is_valid(&self) -> bool {
        !self.faculty_name.trim().is_empty() && !self.faculty_abbreviation.trim().is_empty()
    }

    /// 空白用户名按未设置处理
    pub fn normalized_username(&self) -> Option<String> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string)
    }
}
