//! CRUD handlers for the todolist resource.
//!
//! ```text
//! POST   /api/v1/items      Create an item
//! GET    /api/v1/items      List all items
//! GET    /api/v1/item/{id}  Fetch one item
//! PUT    /api/v1/item/{id}  Merge partial input and rewrite one item
//! DELETE /api/v1/item/{id}  Remove one item
//! ```
//!
//! Handlers are state-free: one request, one pass over codec → validation →
//! storage.

use actix_web::http::StatusCode;
use actix_web::http::header::{ContentType, HeaderValue, LOCATION};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{Item, Validator, validate_item};
use crate::inbound::http::codec;
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Body accepted by [`create_item`].
///
/// Omitted fields fall back to their zero values; unknown fields fail the
/// decode.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateItemRequest {
    /// Item label.
    #[serde(default)]
    pub title: String,
    /// Free-form detail.
    #[serde(default)]
    pub description: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}

/// Body accepted by [`update_item`]; any subset of fields may be present.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateItemRequest {
    /// Replacement label, when present.
    pub title: Option<String>,
    /// Replacement detail, when present.
    pub description: Option<String>,
    /// Replacement completion flag, when present.
    pub completed: Option<bool>,
}

/// Parse the `{id}` path segment as a base-10 64-bit integer.
///
/// An unparseable segment reports not-found rather than echoing the raw
/// value back to the client.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::NotFound)
}

fn validated(item: &Item) -> Result<(), ApiError> {
    let mut validator = Validator::new();
    validate_item(&mut validator, item);
    if validator.valid() {
        Ok(())
    } else {
        Err(ApiError::Validation(validator.into_errors()))
    }
}

/// Create a new item.
#[utoipa::path(
    post,
    path = "/api/v1/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Created item under the \"item\" key", body = Item),
        (status = 400, description = "Undecodable body"),
        (status = 422, description = "Validation failure, field-keyed messages"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
pub async fn create_item(
    state: web::Data<HttpState>,
    mut payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let input: CreateItemRequest = codec::read_json(&mut payload).await?;

    // Any client-supplied id is rejected by the decoder; storage assigns one.
    let item = Item {
        id: 0,
        title: input.title,
        description: input.description,
        completed: input.completed,
    };
    validated(&item)?;

    let item = state.items.insert(item).await?;

    let location = HeaderValue::try_from(format!("/api/v1/items/{}", item.id))
        .map_err(|_| ApiError::Internal)?;
    Ok(codec::json_response(
        StatusCode::CREATED,
        &json!({ "item": item }),
        &[(LOCATION, location)],
    ))
}

/// List every item in ascending id order.
#[utoipa::path(
    get,
    path = "/api/v1/items",
    responses(
        (status = 200, description = "All items under the \"todolist\" key", body = [Item]),
        (status = 500, description = "Storage failure")
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let items = state.items.get_all().await?;
    Ok(codec::json_response(
        StatusCode::OK,
        &json!({ "todolist": items }),
        &[],
    ))
}

/// Fetch one item by id.
#[utoipa::path(
    get,
    path = "/api/v1/item/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item under the \"item\" key", body = Item),
        (status = 404, description = "No such item"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
pub async fn get_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path)?;
    let item = state.items.get(id).await?;
    Ok(codec::json_response(
        StatusCode::OK,
        &json!({ "item": item }),
        &[],
    ))
}

/// Merge partial input into an existing item and rewrite it.
///
/// The read and the write are separate statements; concurrent updates of
/// the same item can lose the earlier write.
#[utoipa::path(
    put,
    path = "/api/v1/item/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Merged item under the \"updated item\" key", body = Item),
        (status = 400, description = "Undecodable body"),
        (status = 404, description = "No such item"),
        (status = 422, description = "Validation failure, field-keyed messages"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
pub async fn update_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    mut payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path)?;
    let mut item = state.items.get(id).await?;

    let input: UpdateItemRequest = codec::read_json(&mut payload).await?;
    if let Some(title) = input.title {
        item.title = title;
    }
    if let Some(description) = input.description {
        item.description = description;
    }
    if let Some(completed) = input.completed {
        item.completed = completed;
    }

    validated(&item)?;
    let item = state.items.update(item).await?;
    Ok(codec::json_response(
        StatusCode::OK,
        &json!({ "updated item": item }),
        &[],
    ))
}

/// Remove one item by id.
///
/// Responds with a plain-text confirmation line for wire compatibility with
/// existing clients.
#[utoipa::path(
    delete,
    path = "/api/v1/item/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Plain-text confirmation", body = String, content_type = "text/plain"),
        (status = 404, description = "No such item"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
pub async fn delete_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.items.delete(id).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("Delete item: {id}\n")))
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod tests;
