//! 链接管理 API（/api 下的增删改查）

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::trace;

use crate::services::{CreateLinkRequest, LinkService, UpdateLinkRequest};

use super::helpers::{error_from_shortlink, error_response};
use super::types::{
    EditRequest, EditResponse, MessageResponse, ShortenRequest, ShortenResponse,
    ShortlinksResponse,
};

const CREATE_FAILED: &str = "Failed to create short link.";
const LIST_FAILED: &str = "Failed to fetch shortlinks.";
const UPDATE_FAILED: &str = "Failed to update short link.";
const DELETE_FAILED: &str = "Failed to delete short link.";

pub const UPDATED_MESSAGE: &str = "Short link updated successfully";
pub const DELETED_MESSAGE: &str = "Short link deleted successfully";

pub struct LinkApi;

impl LinkApi {
    /// POST /api/shorten
    pub async fn shorten(
        body: web::Json<ShortenRequest>,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let body = body.into_inner();
        trace!("API: shorten request: {:?}", body);

        let Some(original_url) = body.original_url else {
            return error_response(
                StatusCode::BAD_REQUEST,
                crate::services::INVALID_URL_MESSAGE,
            );
        };

        let req = CreateLinkRequest {
            original_url,
            custom_short_url: body.custom_short_url,
        };

        match service.create_link(req).await {
            Ok(result) => HttpResponse::Ok().json(ShortenResponse {
                original_url: result.link.original_url,
                short_url: result.link.short_code,
            }),
            Err(e) => error_from_shortlink(&e, CREATE_FAILED),
        }
    }

    /// GET /api/shortlinks
    pub async fn list(service: web::Data<Arc<LinkService>>) -> impl Responder {
        match service.list_links().await {
            Ok(shortlinks) => HttpResponse::Ok().json(ShortlinksResponse { shortlinks }),
            Err(e) => error_from_shortlink(&e, LIST_FAILED),
        }
    }

    /// PUT /api/edit/{short_url}
    pub async fn edit(
        path: web::Path<String>,
        body: web::Json<EditRequest>,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let code = path.into_inner();
        let body = body.into_inner();
        trace!("API: edit request for '{}': {:?}", code, body);

        let req = UpdateLinkRequest {
            original_url: body.original_url,
            new_short_url: body.new_short_url,
        };

        match service.update_link(&code, req).await {
            Ok(link) => HttpResponse::Ok().json(EditResponse {
                message: UPDATED_MESSAGE.to_string(),
                link,
            }),
            Err(e) => error_from_shortlink(&e, UPDATE_FAILED),
        }
    }

    /// DELETE /api/delete/{short_url}
    pub async fn delete(
        path: web::Path<String>,
        service: web::Data<Arc<LinkService>>,
    ) -> impl Responder {
        let code = path.into_inner();

        match service.delete_link(&code).await {
            Ok(()) => HttpResponse::Ok().json(MessageResponse {
                message: DELETED_MESSAGE.to_string(),
            }),
            Err(e) => error_from_shortlink(&e, DELETE_FAILED),
        }
    }
}

/// 链接管理路由 `/api`
///
/// 必须在重定向路由之前注册，否则 `/{short_url}` 会吞掉 `/api`。
pub fn link_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/shorten", web::post().to(LinkApi::shorten))
        .route("/shortlinks", web::get().to(LinkApi::list))
        .route("/edit/{short_url}", web::put().to(LinkApi::edit))
        .route("/delete/{short_url}", web::delete().to(LinkApi::delete))
}
