use serde::Serialize;
use ts_rs::TS;

// 成绩上传结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct UploadMarksResponse {
    // 原地更新的条目数
    pub updated: usize,
    // 新增的条目数
    pub inserted: usize,
}
