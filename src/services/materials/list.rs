use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MaterialService;
use crate::models::materials::requests::MaterialListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn list_materials(
    service: &MaterialService,
    request: &HttpRequest,
    query: MaterialListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_materials(query).await {
        Ok(materials) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(materials, "Materials retrieved")))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to fetch materials",
            &e,
        )),
    }
}
