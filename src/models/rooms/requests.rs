use serde::Deserialize;
use ts_rs::TS;

// 创建教室请求；批量导入时同样使用，缺字段的行会被过滤而不是整体报错
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/room.ts")]
pub struct CreateRoomRequest {
    #[serde(default)]
    pub room_name: String,
}

impl CreateRoomRequest {
    pub fn is_valid(&self) -> bool {
        !self.room_name.trim().is_empty()
    }
}
