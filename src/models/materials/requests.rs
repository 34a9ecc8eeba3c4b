use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::StoredDocument;

// 资料列表查询参数，参数均可省略
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct MaterialListQuery {
    pub class_id: Option<i64>,
    pub subject_id: Option<i64>,
}

// 存储层使用的新资料记录，文件已落盘
#[derive(Debug, Clone)]
pub struct CreateMaterialRequest {
    pub class_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub file: StoredDocument,
}
