//! Message relay subrouter definition.
//!
//! The following subroute is supported:
//!
//! - POST: `/`

use crate::{config::RelayToken, router::Deps};
use axum::{
    extract::{self, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Router,
};
use herald::{Message, SlackError};
use tower_http::validate_request::ValidateRequestHeaderLayer;
use tracing::{error, info};

/// Instantiate a new relay subrouter.
pub fn relay_router(token: &RelayToken) -> Router<Deps> {
    Router::new()
        .route("/", post(msg_handler))
        .layer(ValidateRequestHeaderLayer::bearer(&token.0))
}

/// Handler for the POST subroute `/`.
///
/// A `Bearer` `Authorization` header matching `$HERALD_TOKEN` must be present.
///
/// Accepts a [Message] in `application/json` format and posts it to the
/// configured webhook.
async fn msg_handler(
    State(deps): State<Deps>,
    extract::Json(m): extract::Json<Message>,
) -> impl IntoResponse {
    let res = deps.client.post_message(&deps.webhook_url, &m).await;

    match res {
        Ok(_) => {
            info!(attachments = m.attachments.len(), "Relayed message");
            (StatusCode::OK, String::new())
        }
        Err(e) => handle_slack_err(&e),
    }
}

pub fn handle_slack_err(e: &SlackError) -> (StatusCode, String) {
    let code = match e {
        SlackError::Validation(_) => StatusCode::BAD_REQUEST,
        SlackError::Serialization(_) | SlackError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        SlackError::Transport(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        SlackError::Transport(_) | SlackError::Delivery { .. } | SlackError::Redirect { .. } => {
            StatusCode::BAD_GATEWAY
        }
    };

    let es = e.to_string();

    error!("{}", es);
    (code, es)
}
