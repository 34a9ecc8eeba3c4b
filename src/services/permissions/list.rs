use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PermissionService;
use crate::models::permissions::requests::PermissionQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn list_permissions(
    service: &PermissionService,
    request: &HttpRequest,
    query: PermissionQuery,
) -> ActixResult<HttpResponse> {
    if let (Some(class_id), Some(teacher_id)) = (query.class_id, query.teacher_id) {
        return granted_permissions(service, request, class_id, teacher_id).await;
    }

    let storage = service.get_storage(request);
    match storage.list_permissions(query.class_id).await {
        Ok(permissions) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(permissions, "Permissions retrieved"))),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch permissions",
            &e,
        )),
    }
}

pub async fn list_teacher_permissions(
    service: &PermissionService,
    request: &HttpRequest,
    query: PermissionQuery,
) -> ActixResult<HttpResponse> {
    match (query.class_id, query.teacher_id) {
        (Some(class_id), Some(teacher_id)) => {
            granted_permissions(service, request, class_id, teacher_id).await
        }
        _ => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PermissionQueryInvalid,
            "Missing classId or teacherId",
        ))),
    }
}

async fn granted_permissions(
    service: &PermissionService,
    request: &HttpRequest,
    class_id: i64,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_granted_permissions(class_id, teacher_id).await {
        Ok(permissions) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(permissions, "Permissions retrieved"))),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch permissions",
            &e,
        )),
    }
}
