use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::AssignmentListQuery;
use crate::services::AssignmentService;
use crate::utils::SafeIdI64;

// 懒加载的全局 ASSIGNMENT_SERVICE 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

pub async fn upload_assignment(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.upload_assignment(&req, payload).await
}

pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

pub async fn download_assignment(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.download_assignment(&req, id.0).await
}

pub async fn delete_assignment(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.delete_assignment(&req, id.0).await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/assignments")
            .service(web::resource("").route(web::get().to(list_assignments)))
            .service(web::resource("/upload").route(web::post().to(upload_assignment)))
            .service(web::resource("/{id}/download").route(web::get().to(download_assignment)))
            .service(web::resource("/{id}").route(web::delete().to(delete_assignment))),
    );
}
