use serde::Serialize;
use ts_rs::TS;

// 批量导入结果
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/bulk.ts")]
pub struct BulkInsertResponse {
    // 成功写入的条数
    pub inserted: usize,
    // 因字段缺失被过滤掉的条数
    pub skipped: usize,
}
