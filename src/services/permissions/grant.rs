use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PermissionService;
use crate::models::permissions::requests::GrantPermissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn grant_permissions(
    service: &PermissionService,
    request: &HttpRequest,
    permissions: Vec<GrantPermissionRequest>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.grant_permissions(permissions).await {
        Ok(created) => {
            info!("{} permission records written", created.len());
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(created, "Permissions saved successfully")))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to save permissions",
            &e,
        )),
    }
}
