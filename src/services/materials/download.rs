use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::files::download_document;
use crate::services::storage_error_response;

pub async fn download_material(
    service: &MaterialService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_material_by_id(id).await {
        Ok(Some(material)) => Ok(download_document(
            storage.upload_dir(),
            &material.stored_name,
            &material.file_name,
        )),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "Material not found",
        ))),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Material query failed",
            &e,
        )),
    }
}
