pub mod announcements;
pub mod assignments;
pub mod auth;
pub mod classes;
pub mod files;
pub mod marks;
pub mod materials;
pub mod permissions;
pub mod rooms;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use announcements::AnnouncementService;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use marks::MarksService;
pub use materials::MaterialService;
pub use permissions::PermissionService;
pub use rooms::RoomService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;
pub use users::UserService;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::SchoolError;
use crate::models::{ApiResponse, ErrorCode};

/// 存储层错误转换为响应
///
/// 引用不存在返回 400，唯一约束冲突返回 409，未找到返回 404，其余为 500。
pub(crate) fn storage_error_response(
    code: ErrorCode,
    context: &str,
    err: &SchoolError,
) -> HttpResponse {
    match err {
        SchoolError::Validation(msg) => HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ReferenceNotFound,
            format!("{context}: {msg}"),
        )),
        SchoolError::Conflict(msg) => HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            format!("{context}: {msg}"),
        )),
        SchoolError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg.clone()))
        }
        _ => {
            error!("{}: {}", context, err);
            HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(code, format!("{context}: {err}")))
        }
    }
}
