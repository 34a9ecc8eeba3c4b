use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::marks::requests::MarkEntryRequest;
use crate::services::MarksService;
use crate::utils::SafeStudentIdI64;

static MARKS_SERVICE: Lazy<MarksService> = Lazy::new(MarksService::new_lazy);

pub async fn upload_marks(
    req: HttpRequest,
    entries: web::Json<Vec<MarkEntryRequest>>,
) -> ActixResult<HttpResponse> {
    MARKS_SERVICE.upload_marks(&req, entries.into_inner()).await
}

pub async fn get_student_marks(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    MARKS_SERVICE.get_student_marks(&req, student_id.0).await
}

// 配置路由
pub fn configure_marks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/upload-marks").route(web::post().to(upload_marks)))
        .service(
            web::resource("/api/marks/{student_id}").route(web::get().to(get_student_marks)),
        );
}
