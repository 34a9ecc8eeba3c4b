use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::{ApiResponse, ErrorCode, users::entities::UserRole};
use crate::services::storage_error_response;

pub async fn delete_account(
    service: &UserService,
    request: &HttpRequest,
    id: i64,
    role: UserRole,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let label = match role {
        UserRole::Teacher => "Teacher",
        UserRole::Student => "Student",
        UserRole::Admin => "Admin",
    };

    match storage.delete_user_with_role(id, role).await {
        Ok(true) => {
            info!("{} account {} deleted", label, id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
                "{label} deleted successfully"
            ))))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            format!("{label} not found or invalid role"),
        ))),
        Err(e) => Ok(storage_error_response(
            ErrorCode::UserDeleteFailed,
            "User deletion failed",
            &e,
        )),
    }
}
