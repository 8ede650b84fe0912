//! Server router definition.
//!
//! The following routes are supported:
//!
//! - GET: `/api/v1/health`
//! - POST: `/api/v1/message`
//! - POST: `/api/v1/callback`

use crate::{
    config::{RelayToken, VerificationToken},
    interaction::interaction_router,
    relay::relay_router,
};
use axum::{http::StatusCode, routing::get, Router};
use herald::{slack::auth::SigningSecret, WebhookClient};
use tower_http::trace::{self, TraceLayer};
use tracing::Level;
use url::Url;

/// Dependencies shared by routes across requests.
#[derive(Clone)]
pub struct Deps {
    pub client: WebhookClient,
    pub webhook_url: Url,
    pub verification_token: Option<VerificationToken>,
    pub signing_secret: Option<SigningSecret>,
}

/// Instantiate a new router with tracing.
pub fn new(deps: Deps, relay_token: &RelayToken) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
        .on_response(trace::DefaultOnResponse::new().level(Level::INFO));

    let v1 = Router::new()
        .nest("/message", relay_router(relay_token))
        .nest("/callback", interaction_router())
        .layer(trace_layer)
        // Exclude the health check route from tracing.
        .route("/health", get(|| async { StatusCode::OK }))
        .with_state(deps);

    let api = Router::new().nest("/v1", v1);

    Router::new().nest("/api", api)
}
