use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::subjects::entities::Subject;

// 教师在某班级某科目上的上传权限
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/permission.ts")]
pub struct Permission {
    pub id: i64,
    pub teacher_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub have_permission: bool,
}

// 已授权记录，附带科目信息
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/permission.ts")]
pub struct PermissionWithSubject {
    #[serde(flatten)]
    #[ts(flatten)]
    pub permission: Permission,
    // 科目已被删除时为 null
    pub subject: Option<Subject>,
}
