use serde::Deserialize;
use ts_rs::TS;

use super::entities::UserRole;

// 创建单个账号
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateAccountRequest {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

// 批量创建账号中的一行，角色在服务层逐条校验
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct BulkAccountEntry {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

// 存储层使用的新账号，密码已哈希
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
}
