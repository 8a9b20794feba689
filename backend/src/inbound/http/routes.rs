//! Fixed route table and dispatch fallbacks.

use actix_web::{HttpRequest, HttpResponse, web};

use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::{health, items};

/// Register the versioned API routes.
///
/// Each resource carries a default service so a known path with an
/// unsupported method reports 405 naming the method; unknown paths under
/// the scope fall through to the 404 envelope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::resource("/healthcheck")
                    .route(web::get().to(health::healthcheck))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/items")
                    .route(web::post().to(items::create_item))
                    .route(web::get().to(items::list_items))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/item/{id}")
                    .route(web::get().to(items::get_item))
                    .route(web::put().to(items::update_item))
                    .route(web::delete().to(items::delete_item))
                    .default_service(web::to(method_not_allowed)),
            )
            .default_service(web::to(not_found)),
    );
}

/// Fallback for unmatched paths.
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(ApiError::NotFound)
}

/// Fallback for matched paths with unsupported methods.
pub async fn method_not_allowed(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(ApiError::MethodNotAllowed(req.method().to_string()))
}
