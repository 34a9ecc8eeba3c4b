use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::permissions::requests::{GrantPermissionRequest, PermissionQuery};
use crate::services::PermissionService;

static PERMISSION_SERVICE: Lazy<PermissionService> = Lazy::new(PermissionService::new_lazy);

pub async fn grant_permissions(
    req: HttpRequest,
    permissions: web::Json<Vec<GrantPermissionRequest>>,
) -> ActixResult<HttpResponse> {
    PERMISSION_SERVICE
        .grant_permissions(&req, permissions.into_inner())
        .await
}

pub async fn list_permissions(
    req: HttpRequest,
    query: web::Query<PermissionQuery>,
) -> ActixResult<HttpResponse> {
    PERMISSION_SERVICE
        .list_permissions(&req, query.into_inner())
        .await
}

pub async fn list_teacher_permissions(
    req: HttpRequest,
    query: web::Query<PermissionQuery>,
) -> ActixResult<HttpResponse> {
    PERMISSION_SERVICE
        .list_teacher_permissions(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_permissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/permissions")
            .route(web::get().to(list_permissions))
            .route(web::post().to(grant_permissions)),
    )
    // 教师端使用的旧路径，两个参数都必须提供
    .service(web::resource("/permissions").route(web::get().to(list_teacher_permissions)));
}
