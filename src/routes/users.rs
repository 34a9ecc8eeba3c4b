use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::users::{
    entities::UserRole,
    requests::{BulkAccountEntry, CreateAccountRequest},
};
use crate::services::UserService;
use crate::utils::SafeIdI64;

// 懒加载的全局 USER_SERVICE 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn create_account(
    req: HttpRequest,
    account: web::Json<CreateAccountRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_account(&req, account.into_inner()).await
}

pub async fn create_bulk_accounts(
    req: HttpRequest,
    entries: web::Json<Vec<BulkAccountEntry>>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .create_bulk_accounts(&req, entries.into_inner())
        .await
}

pub async fn list_teacher_accounts(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_teacher_accounts(&req).await
}

pub async fn list_student_accounts(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_student_accounts(&req).await
}

pub async fn delete_teacher_account(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .delete_account(&req, id.0, UserRole::Teacher)
        .await
}

pub async fn delete_student_account(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .delete_account(&req, id.0, UserRole::Student)
        .await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(web::resource("/accounts").route(web::post().to(create_account)))
            .service(
                web::resource("/accounts/create-bulk-users")
                    .route(web::post().to(create_bulk_accounts)),
            )
            .service(web::resource("/teachers").route(web::get().to(list_teacher_accounts)))
            .service(
                web::resource("/teachers/{id}").route(web::delete().to(delete_teacher_account)),
            )
            .service(web::resource("/students").route(web::get().to(list_student_accounts)))
            .service(
                web::resource("/students/{id}").route(web::delete().to(delete_student_account)),
            ),
    );
}
