//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates the REST paths and component schemas. Swagger UI
//! serves the generated document in debug builds.

use utoipa::OpenApi;

use crate::domain::Item;
use crate::inbound::http::items::{CreateItemRequest, UpdateItemRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todolist backend API",
        description = "CRUD interface for the todolist resource."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::health::healthcheck,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::get_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::delete_item,
    ),
    components(schemas(Item, CreateItemRequest, UpdateItemRequest))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn document_covers_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/v1/healthcheck",
            "/api/v1/items",
            "/api/v1/item/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
