use actix_web::{HttpResponse, http::header};
use std::path::Path;

use crate::errors::SchoolError;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::content_type_for;

/// 读取已存储的文件并以附件形式返回，文件名使用上传时的原始名称
pub fn download_document(upload_dir: &str, stored_name: &str, file_name: &str) -> HttpResponse {
    let file_path = Path::new(upload_dir).join(stored_name);

    if !file_path.exists() {
        return HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "File not found on disk",
        ));
    }

    let buf = match std::fs::read(&file_path) {
        Ok(buf) => buf,
        Err(e) => {
            tracing::error!("{}", SchoolError::file_operation(format!("{e}")));
            return HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "File read failed",
            ));
        }
    };

    let extension = Path::new(stored_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type_for(&extension)))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name.replace('"', "")),
        ))
        .body(buf)
}
