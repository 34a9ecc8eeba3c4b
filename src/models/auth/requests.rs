use serde::Deserialize;
use ts_rs::TS;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 用户名；学生为学号
    #[serde(default)]
    pub username: String,
    /// 密码
    #[serde(default)]
    pub password: String,
}
