//! 用户存储操作

use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, SchoolError};
use crate::models::users::{
    entities::{User, UserRole},
    requests::NewAccount,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    fn user_active_model(account: NewAccount, now: i64) -> ActiveModel {
        ActiveModel {
            username: Set(account.username),
            password_hash: Set(account.password_hash),
            role: Set(account.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    /// 创建用户
    pub async fn create_user_impl(&self, account: NewAccount) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let result = Self::user_active_model(account, now)
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_write_error("创建用户失败", e))?;

        Ok(result.into_user())
    }

    /// 在同一事务中批量创建用户，任一失败则全部回滚
    pub async fn create_users_impl(&self, accounts: Vec<NewAccount>) -> Result<usize> {
        if accounts.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let count = accounts.len();
        let txn = self.db.begin().await?;

        Users::insert_many(
            accounts
                .into_iter()
                .map(|account| Self::user_active_model(account, now)),
        )
        .exec(&txn)
        .await
        .map_err(|e| Self::map_write_error("批量创建用户失败", e))?;

        txn.commit().await?;
        Ok(count)
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 返回给定用户名中已被占用的部分
    pub async fn find_existing_usernames_impl(&self, usernames: &[String]) -> Result<Vec<String>> {
        if usernames.is_empty() {
            return Ok(Vec::new());
        }

        let existing: Vec<String> = Users::find()
            .select_only()
            .column(Column::Username)
            .filter(Column::Username.is_in(usernames.iter().cloned()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询用户名失败: {e}")))?;

        Ok(existing)
    }

    /// 按角色列出用户
    pub async fn list_users_by_role_impl(&self, role: UserRole) -> Result<Vec<User>> {
        let users = Users::find()
            .filter(Column::Role.eq(role.as_str()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 删除指定角色的用户，档案记录保留
    pub async fn delete_user_with_role_impl(&self, id: i64, role: UserRole) -> Result<bool> {
        let result = Users::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::Role.eq(role.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 用户总数
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计用户数失败: {e}")))
    }
}
