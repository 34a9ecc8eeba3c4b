use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::files::remove_stored_file;
use crate::services::storage_error_response;

pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_assignment(id).await {
        Ok(Some(assignment)) => {
            // 记录已删除，文件删除失败不影响结果
            remove_stored_file(storage.upload_dir(), &assignment.stored_name);
            info!("Assignment {} deleted", assignment.id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Assignment deleted successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "Assignment not found",
        ))),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Assignment deletion failed",
            &e,
        )),
    }
}
