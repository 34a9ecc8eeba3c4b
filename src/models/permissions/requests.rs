use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/permission.ts")]
pub struct GrantPermissionRequest {
    pub teacher_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    #[serde(default)]
    pub have_permission: bool,
}

// 权限查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/permission.ts")]
pub struct PermissionQuery {
    pub class_id: Option<i64>,
    pub teacher_id: Option<i64>,
}
