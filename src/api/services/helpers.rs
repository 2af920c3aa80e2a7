//! 通用响应构建

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use tracing::{debug, error};

use crate::errors::ShortlinkError;

use super::types::ErrorBody;

/// 构建 `{"error": ...}` 响应
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
            error: message.to_string(),
        })
}

/// 从 ShortlinkError 构建错误响应
///
/// 内部错误只记录日志，客户端收到 `fallback`。
pub fn error_from_shortlink(err: &ShortlinkError, fallback: &str) -> HttpResponse {
    let status = err.http_status();
    if err.is_internal() {
        error!("{} [{}]: {}", fallback, err.code(), err.message());
        error_response(status, fallback)
    } else {
        error_response(status, err.message())
    }
}

/// 请求体不是合法 JSON 时返回 400
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected request body: {}", err);
    let response = error_response(StatusCode::BAD_REQUEST, "Invalid request body.");
    InternalError::from_response(err, response).into()
}
