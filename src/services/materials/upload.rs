use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MaterialService;
use crate::config::AppConfig;
use crate::models::materials::requests::CreateMaterialRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::files::{receive_upload, remove_stored_file};
use crate::services::storage_error_response;

pub async fn upload_material(
    service: &MaterialService,
    request: &HttpRequest,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let upload_dir = storage.upload_dir().to_string();

    // 1. 接收文件与表单字段
    let form = match receive_upload(payload, &upload_dir, &AppConfig::get().upload).await {
        Ok(form) => form,
        Err(response) => return Ok(response),
    };
    let stored_name = form.document.stored_name.clone();

    // 2. 校验必填字段
    let (Some(class_id), Some(teacher_id), Some(subject_id), Some(title)) = (
        form.id("classId"),
        form.id("teacherId"),
        form.id("subjectId"),
        form.text("title").map(str::to_string),
    ) else {
        remove_stored_file(&upload_dir, &stored_name);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UploadFormInvalid,
            "classId, teacherId, subjectId and title are required",
        )));
    };

    // 3. 上传权限检查
    match storage
        .has_upload_permission(teacher_id, class_id, subject_id)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            remove_stored_file(&upload_dir, &stored_name);
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PermissionDenied,
                "Teacher does not have upload permission for this class and subject",
            )));
        }
        Err(e) => {
            remove_stored_file(&upload_dir, &stored_name);
            return Ok(storage_error_response(
                ErrorCode::InternalServerError,
                "Permission check failed",
                &e,
            ));
        }
    }

    let material = CreateMaterialRequest {
        class_id,
        teacher_id,
        subject_id,
        title,
        description: form.text("description").map(str::to_string),
        file: form.document,
    };

    // 4. 写入记录，失败时删除已落盘的文件
    match storage.create_material(material).await {
        Ok(material) => {
            info!(
                "Material {} uploaded by teacher {}",
                material.id, material.teacher_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                material,
                "Material uploaded successfully",
            )))
        }
        Err(e) => {
            remove_stored_file(&upload_dir, &stored_name);
            Ok(storage_error_response(
                ErrorCode::FileUploadFailed,
                "Material upload failed",
                &e,
            ))
        }
    }
}
