use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MaterialService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::files::remove_stored_file;
use crate::services::storage_error_response;

pub async fn delete_material(
    service: &MaterialService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_material(id).await {
        Ok(Some(material)) => {
            // 记录已删除，文件删除失败不影响结果
            remove_stored_file(storage.upload_dir(), &material.stored_name);
            info!("Material {} deleted", material.id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Material deleted successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "Material not found",
        ))),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Material deletion failed",
            &e,
        )),
    }
}
