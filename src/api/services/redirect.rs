use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderValue, LOCATION};
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::{debug, error, trace};

use crate::services::LinkService;
use crate::storage::ShortLink;

use super::helpers::{error_from_shortlink, error_response};

const RESOLVE_FAILED: &str = "Failed to retrieve short link.";

pub struct RedirectService {}

impl RedirectService {
    /// GET|HEAD /{short_url}
    pub async fn handle_redirect(
        path: web::Path<String>,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let code = path.into_inner();
        trace!("Redirect request for: {}", code);

        match service.resolve(&code).await {
            Ok(link) => Self::finish_redirect(link),
            Err(e) => {
                debug!("Redirect for '{}' failed: {}", code, e);
                error_from_shortlink(&e, RESOLVE_FAILED)
            }
        }
    }

    fn finish_redirect(link: ShortLink) -> HttpResponse {
        // 存量数据可能含有无法作为 header 的字符
        match HeaderValue::from_str(&link.original_url) {
            Ok(location) => HttpResponse::build(StatusCode::FOUND)
                .insert_header((LOCATION, location))
                .finish(),
            Err(e) => {
                error!(
                    "Stored URL for '{}' is not a valid Location header: {}",
                    link.short_code, e
                );
                error_response(StatusCode::INTERNAL_SERVER_ERROR, RESOLVE_FAILED)
            }
        }
    }
}

/// Redirect 路由配置，短码后的 `/` 可省略
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("").service(
        web::resource(["/{short_url}", "/{short_url}/"])
            .route(web::get().to(RedirectService::handle_redirect))
            .route(web::head().to(RedirectService::handle_redirect)),
    )
}
