//! Healthcheck endpoint reporting service availability.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::VERSION;
use crate::inbound::http::codec;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;

/// Report service status plus environment and version metadata.
#[utoipa::path(
    get,
    path = "/api/v1/healthcheck",
    responses(
        (status = 200, description = "Service is available"),
        (status = 405, description = "Method not allowed")
    ),
    tags = ["health"],
    operation_id = "healthcheck"
)]
pub async fn healthcheck(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let health = json!({
        "status": "available",
        "system_info": {
            "environment": &state.env,
            "version": VERSION,
        },
    });
    Ok(codec::json_response(StatusCode::OK, &health, &[]))
}
