use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::classes::requests::{
    AssignSubjectsRequest, AssignTeachersRequest, CreateClassRequest,
};
use crate::services::ClassService;
use crate::utils::SafeClassIdI64;

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, class_id.0).await
}

// 课表是前端定义的任意 JSON
pub async fn set_schedule(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    schedule: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .set_schedule(&req, class_id.0, schedule.into_inner())
        .await
}

pub async fn get_schedule(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_schedule(&req, class_id.0).await
}

pub async fn get_class_subjects(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class_subjects(&req, class_id.0).await
}

pub async fn get_class_teachers(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class_teachers(&req, class_id.0).await
}

pub async fn assign_subjects(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    body: web::Json<AssignSubjectsRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .assign_subjects(&req, class_id.0, body.into_inner())
        .await
}

pub async fn assign_teachers(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    body: web::Json<AssignTeachersRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .assign_teachers(&req, class_id.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/classes")
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    .route(web::post().to(create_class)),
            )
            .service(web::resource("/{class_id}").route(web::delete().to(delete_class)))
            .service(
                web::resource("/{class_id}/subjects").route(web::get().to(get_class_subjects)),
            )
            .service(
                web::resource("/{class_id}/teachers").route(web::get().to(get_class_teachers)),
            )
            .service(
                web::resource("/{class_id}/assign-subjects").route(web::put().to(assign_subjects)),
            )
            .service(
                web::resource("/{class_id}/assign-teachers").route(web::put().to(assign_teachers)),
            ),
    )
    // 单数路径保留给课表编辑页面
    .service(
        web::scope("/api/class")
            .service(
                web::resource("/{class_id}/schedule")
                    .route(web::get().to(get_schedule))
                    .route(web::post().to(set_schedule)),
            )
            .service(
                web::resource("/{class_id}/subjects").route(web::get().to(get_class_subjects)),
            ),
    );
}
