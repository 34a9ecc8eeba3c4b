use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::materials::requests::MaterialListQuery;
use crate::services::MaterialService;
use crate::utils::SafeIdI64;

// 懒加载的全局 MATERIAL_SERVICE 实例
static MATERIAL_SERVICE: Lazy<MaterialService> = Lazy::new(MaterialService::new_lazy);

// HTTP处理程序
pub async fn upload_material(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.upload_material(&req, payload).await
}

pub async fn list_materials(
    req: HttpRequest,
    query: web::Query<MaterialListQuery>,
) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE
        .list_materials(&req, query.into_inner())
        .await
}

pub async fn download_material(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.download_material(&req, id.0).await
}

pub async fn delete_material(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    MATERIAL_SERVICE.delete_material(&req, id.0).await
}

// 配置路由
pub fn configure_materials_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/materials")
            .service(web::resource("").route(web::get().to(list_materials)))
            .service(web::resource("/upload").route(web::post().to(upload_material)))
            .service(web::resource("/{id}/download").route(web::get().to(download_material)))
            .service(web::resource("/{id}").route(web::delete().to(delete_material))),
    );
}
