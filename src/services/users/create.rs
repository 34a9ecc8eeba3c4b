use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::errors::SchoolError;
use crate::models::{
    ApiResponse, BulkInsertResponse, ErrorCode,
    users::{
        entities::UserRole,
        requests::{BulkAccountEntry, CreateAccountRequest, NewAccount},
        responses::AccountResponse,
    },
};
use crate::services::storage_error_response;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_username};

/// 在阻塞线程池中哈希密码
async fn hash_in_background(password: String) -> Result<String, SchoolError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| SchoolError::validation(format!("密码处理失败: {e}")))?
}

fn hashing_failed(e: SchoolError) -> HttpResponse {
    error!("Password hashing failed: {}", e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Password hashing failed: {e}"),
    ))
}

pub async fn create_account(
    service: &UserService,
    request: &HttpRequest,
    account: CreateAccountRequest,
) -> ActixResult<HttpResponse> {
    let username = account.username.trim().to_string();

    // 验证用户名
    if let Err(msg) = validate_username(&username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }
    if let Err(msg) = validate_password(&account.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let storage = service.get_storage(request);

    match storage.get_user_by_username(&username).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "User with this username already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(storage_error_response(
                ErrorCode::InternalServerError,
                "Failed to check username",
                &e,
            ));
        }
    }

    let password_hash = match hash_in_background(account.password).await {
        Ok(hash) => hash,
        Err(e) => return Ok(hashing_failed(e)),
    };

    let new_account = NewAccount {
        username,
        password_hash,
        role: account.role,
    };

    match storage.create_user(new_account).await {
        Ok(user) => {
            info!("Account {} created with role {}", user.username, user.role);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AccountResponse {
                    username: user.username,
                    role: account.role,
                },
                "User created successfully",
            )))
        }
        // 并发创建同名账号
        Err(SchoolError::Conflict(_)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "User with this username already exists",
            ),
        )),
        Err(e) => Ok(storage_error_response(
            ErrorCode::UserCreationFailed,
            "User creation failed",
            &e,
        )),
    }
}

/// 批量账号校验，返回第一条错误信息
fn validate_bulk_entries(entries: &[BulkAccountEntry]) -> Result<Vec<UserRole>, String> {
    let mut roles = Vec::with_capacity(entries.len());
    let mut seen = HashSet::new();

    for entry in entries {
        let username = entry.username.trim();
        let role = entry
            .role
            .trim()
            .parse::<UserRole>()
            .ok()
            .filter(UserRole::is_bulk_creatable)
            .ok_or_else(|| format!("Invalid role for user: {username}"))?;

        validate_username(username).map_err(|msg| format!("{msg}: {username}"))?;
        validate_password(&entry.password).map_err(|msg| format!("{msg}: {username}"))?;

        if !seen.insert(username.to_string()) {
            return Err(format!("Duplicate username in request: {username}"));
        }
        roles.push(role);
    }

    Ok(roles)
}

pub async fn create_bulk_accounts(
    service: &UserService,
    request: &HttpRequest,
    entries: Vec<BulkAccountEntry>,
) -> ActixResult<HttpResponse> {
    if entries.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NoValidEntries,
            "No users provided",
        )));
    }

    let roles = match validate_bulk_entries(&entries) {
        Ok(roles) => roles,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::InvalidRole, msg)));
        }
    };

    let storage = service.get_storage(request);
    let usernames: Vec<String> = entries.iter().map(|e| e.username.trim().to_string()).collect();

    match storage.find_existing_usernames(&usernames).await {
        Ok(existing) if !existing.is_empty() => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                format!(
                    "User with this username already exists: {}",
                    existing.join(", ")
                ),
            )));
        }
        Ok(_) => {}
        Err(e) => {
            return Ok(storage_error_response(
                ErrorCode::InternalServerError,
                "Failed to check usernames",
                &e,
            ));
        }
    }

    let mut accounts = Vec::with_capacity(entries.len());
    for ((entry, username), role) in entries.into_iter().zip(usernames).zip(roles) {
        let password_hash = match hash_in_background(entry.password).await {
            Ok(hash) => hash,
            Err(e) => return Ok(hashing_failed(e)),
        };
        accounts.push(NewAccount {
            username,
            password_hash,
            role,
        });
    }

    match storage.create_users(accounts).await {
        Ok(inserted) => {
            info!("Bulk created {} accounts", inserted);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                BulkInsertResponse {
                    inserted,
                    skipped: 0,
                },
                "Users created successfully",
            )))
        }
        Err(SchoolError::Conflict(_)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "User with this username already exists",
            ),
        )),
        Err(e) => Ok(storage_error_response(
            ErrorCode::UserCreationFailed,
            "Bulk user creation failed",
            &e,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(username: &str, role: &str) -> BulkAccountEntry {
        BulkAccountEntry {
            username: username.to_string(),
            password: "pw-123".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_bulk_accepts_teacher_and_student() {
        let roles =
            validate_bulk_entries(&[entry("tsharma", "teacher"), entry("0801CS01", "student")])
                .unwrap();
        assert_eq!(roles, vec![UserRole::Teacher, UserRole::Student]);
    }

    #[test]
    fn test_bulk_rejects_admin_role() {
        let err = validate_bulk_entries(&[entry("boss1", "admin")]).unwrap_err();
        assert_eq!(err, "Invalid role for user: boss1");
    }

    #[test]
    fn test_bulk_rejects_unknown_role() {
        let err = validate_bulk_entries(&[entry("tsharma", "teacher"), entry("guest", "visitor")])
            .unwrap_err();
        assert_eq!(err, "Invalid role for user: guest");
    }

    #[test]
    fn test_bulk_rejects_duplicates_in_batch() {
        let err = validate_bulk_entries(&[entry("tsharma", "teacher"), entry("tsharma", "student")])
            .unwrap_err();
        assert!(err.starts_with("Duplicate username"));
    }
}
