use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    #[serde(default)]
    pub subject_code: String,
    #[serde(default)]
    pub subject_name: String,
    #[serde(default)]
    pub subject_abbreviation: String,
}

impl CreateSubjectRequest {
    // 三个字段都必须非空
    pub fn is_valid(&self) -> bool {
        !self.subject_code.trim().is_empty()
            && !self.subject_name.trim().is_empty()
            && !self.subject_abbreviation.trim().is_empty()
    }
}
