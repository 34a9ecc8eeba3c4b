use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::students::requests::CreateStudentRequest;
use crate::services::StudentService;
use crate::utils::{SafeClassIdI64, SafeIdI64};

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

pub async fn create_student(
    req: HttpRequest,
    student: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, student.into_inner())
        .await
}

pub async fn bulk_create_students(
    req: HttpRequest,
    students: web::Json<Vec<CreateStudentRequest>>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .bulk_create_students(&req, students.into_inner())
        .await
}

pub async fn list_students_by_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students_by_class(&req, class_id.0).await
}

pub async fn delete_student(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, id.0).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/students")
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            .service(
                web::resource("/class/{class_id}").route(web::get().to(list_students_by_class)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_student))),
    )
    .service(web::resource("/api/bulk-add-students").route(web::post().to(bulk_create_students)));
}
