//! Server construction and wiring.

mod config;

pub use config::Config;

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::KeepAlive;
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::domain::ItemStore;
use backend::inbound::http::routes;
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the application with the given dependency bundle.
pub fn build_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(web::Data::new(state))
        .configure(routes::configure)
        .default_service(web::to(routes::not_found));

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Run the HTTP server until shutdown.
///
/// Keep-alive and client request timeouts bound how long an idle or slow
/// connection can hold resources.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the listen address cannot be bound.
pub async fn run(config: Config, items: Arc<dyn ItemStore>) -> std::io::Result<()> {
    let env = config.env.clone();
    let server = HttpServer::new(move || build_app(HttpState::new(items.clone(), env.clone())))
        .keep_alive(KeepAlive::Timeout(Duration::from_secs(60)))
        .client_request_timeout(Duration::from_secs(10))
        .bind(("0.0.0.0", config.port))?;

    info!(port = config.port, env = %config.env, "starting server");
    server.run().await
}
