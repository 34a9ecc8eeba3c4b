//! 路径参数提取器
//!
//! 非法 ID 在进入处理函数前即以 400 拒绝。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 从路径中解析正整数 ID
fn parse_path_id(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Invalid {name}: '{raw}'"),
            ));
            let reason = format!("invalid path parameter {name}");
            Err(InternalError::from_response(reason, response).into())
        }
    }
}

macro_rules! define_safe_id {
    ($($name:ident => $param:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                    ready(parse_path_id(req, $param).map($name))
                }
            }
        )*
    };
}

define_safe_id! {
    SafeIdI64 => "id",
    SafeClassIdI64 => "class_id",
    SafeStudentIdI64 => "student_id",
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_id() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        let id = SafeIdI64::extract(&req).await.unwrap();
        assert_eq!(id, SafeIdI64(42));
    }

    #[actix_web::test]
    async fn test_rejects_non_numeric_and_non_positive() {
        for raw in ["abc", "0", "-3", "1.5"] {
            let req = TestRequest::default()
                .param("class_id", raw)
                .to_http_request();
            assert!(SafeClassIdI64::extract(&req).await.is_err(), "{raw}");
        }
    }
}
