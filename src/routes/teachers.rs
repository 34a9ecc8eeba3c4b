use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::teachers::requests::CreateTeacherRequest;
use crate::services::TeacherService;
use crate::utils::SafeIdI64;

// 懒加载的全局 TEACHER_SERVICE 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

// HTTP处理程序
pub async fn list_teachers(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(&req).await
}

pub async fn create_teacher(
    req: HttpRequest,
    teacher: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.create_teacher(&req, teacher.into_inner()).await
}

pub async fn bulk_create_teachers(
    req: HttpRequest,
    teachers: web::Json<Vec<CreateTeacherRequest>>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.bulk_create_teachers(&req, teachers.into_inner()).await
}

pub async fn delete_teacher(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(&req, id.0).await
}

// 配置路由
pub fn configure_teachers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/teachers")
            .service(
                web::resource("")
                    .route(web::get().to(list_teachers))
                    .route(web::post().to(create_teacher)),
            )
            .service(web::resource("/bulk").route(web::post().to(bulk_create_teachers)))
            .service(web::resource("/{id}").route(web::delete().to(delete_teacher))),
    );
}
