use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::subjects::requests::CreateSubjectRequest;
use crate::services::SubjectService;
use crate::utils::SafeIdI64;

static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn list_subjects(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(&req).await
}

pub async fn create_subject(
    req: HttpRequest,
    subject: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.create_subject(&req, subject.into_inner()).await
}

pub async fn bulk_create_subjects(
    req: HttpRequest,
    subjects: web::Json<Vec<CreateSubjectRequest>>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.bulk_create_subjects(&req, subjects.into_inner()).await
}

pub async fn delete_subject(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(&req, id.0).await
}

// 配置路由
pub fn configure_subjects_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/subjects")
            .service(
                web::resource("")
                    .route(web::get().to(list_subjects))
                    .route(web::post().to(create_subject)),
            )
            .service(web::resource("/bulk").route(web::post().to(bulk_create_subjects)))
            .service(web::resource("/{id}").route(web::delete().to(delete_subject))),
    );
}
