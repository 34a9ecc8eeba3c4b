use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{
        requests::LoginRequest,
        responses::{LoginProfile, LoginResponse},
    },
    users::entities::UserRole,
};
use crate::services::storage_error_response;
use crate::utils::password::verify_password;

use super::AuthService;

fn bad_request(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let username = login_request.username.trim();

    // 1. 根据用户名获取用户
    let user = match storage.get_user_by_username(username).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(bad_request(ErrorCode::UserNotFound, "User not found")),
        Err(e) => {
            return Ok(storage_error_response(
                ErrorCode::InternalServerError,
                "Login failed",
                &e,
            ));
        }
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &user.password_hash) {
        return Ok(bad_request(ErrorCode::InvalidPassword, "Invalid password"));
    }

    // 3. 按角色加载档案
    let profile = match user.parsed_role() {
        Some(UserRole::Teacher) => match storage.get_teacher_by_username(&user.username).await {
            Ok(Some(teacher)) => LoginProfile::Teacher(teacher),
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ProfileNotFound,
                    "Teacher data not found",
                )));
            }
            Err(e) => {
                return Ok(storage_error_response(
                    ErrorCode::InternalServerError,
                    "Login failed",
                    &e,
                ));
            }
        },
        Some(UserRole::Student) => {
            match storage.get_student_by_enrollment(&user.username).await {
                Ok(Some(student)) => LoginProfile::Student(student),
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::ProfileNotFound,
                        "Student data not found",
                    )));
                }
                Err(e) => {
                    return Ok(storage_error_response(
                        ErrorCode::InternalServerError,
                        "Login failed",
                        &e,
                    ));
                }
            }
        }
        Some(UserRole::Admin) => LoginProfile::Admin {
            username: user.username.clone(),
        },
        None => {
            tracing::warn!("User {} has unknown role '{}'", user.username, user.role);
            return Ok(bad_request(ErrorCode::InvalidRole, "Invalid role"));
        }
    };

    let response = LoginResponse {
        role: user.role.clone(),
        profile,
    };

    // 档案字段展开后无固定 TS 类型，这里以 JSON 值返回
    let data = match serde_json::to_value(&response) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Failed to serialize login response: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Login failed",
            )));
        }
    };

    tracing::info!("User {} logged in successfully", user.username);
    Ok(HttpResponse::Ok().json(ApiResponse::success(data, "Login successful")))
}
