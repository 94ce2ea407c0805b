//! Elysian landing page server.
//!
//! Renders the page with Leptos, serves the WASM bundle, stylesheet and
//! static assets produced by cargo-leptos, and answers unknown paths with the
//! rendered "Page not found." view.

#![recursion_limit = "256"]

mod error;

use app::{App, shell};
use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

use crate::error::{Result, ServerError};

#[tokio::main]
async fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    // Reads [[workspace.metadata.leptos]] plus any LEPTOS_* overrides set by cargo-leptos.
    let conf = get_configuration(None)?;
    let options = conf.leptos_options;
    let addr = options.site_addr;

    let app = router(options);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    log::info!("listening on http://{addr}");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)?;

    Ok(())
}

/// Page routes, static files and the 404 fallback.
fn router(options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    log::debug!("generated {} page routes", routes.len());

    Router::new()
        .leptos_routes(&options, routes, {
            let options = options.clone();
            move || shell(options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(options)
}
