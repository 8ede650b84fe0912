//! Interactive callback subrouter definition.
//!
//! The following subroute is supported:
//!
//! - POST: `/`
//!
//! Point the Slack app's "Interactivity" request URL here.

use crate::router::Deps;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use axum_extra::{headers, TypedHeader};
use herald::{
    slack::auth::{unix_now, verify_signature, SigningSecret, SIGNATURE_HEADER, TIMESTAMP_HEADER},
    AttachmentActionCallback, SignatureError,
};
use tracing::{info, warn};

/// Instantiate a new interactive callback subrouter.
pub fn interaction_router() -> Router<Deps> {
    Router::new().route("/", post(callback_handler))
}

/// Handler for the POST subroute `/`.
///
/// When `$SLACK_SIGNING_SECRET` is set the request must carry a valid
/// signature, and when `$SLACK_VERIFICATION_TOKEN` is set the payload's token
/// must match it.
///
/// Accepts an [AttachmentActionCallback] in Slack's
/// `application/x-www-form-urlencoded` format.
async fn callback_handler(
    State(deps): State<Deps>,
    TypedHeader(content_type): TypedHeader<headers::ContentType>,
    headers: HeaderMap,
    // We can't parse this at all yet as we need to compare signatures.
    body: Bytes,
) -> Result<StatusCode, (StatusCode, String)> {
    if content_type != headers::ContentType::form_url_encoded() {
        return Err((
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            String::from(
                "Requests must have `Content-Type: application/x-www-form-urlencoded`",
            ),
        ));
    }

    if let Some(secret) = &deps.signing_secret {
        validate_request_signature(secret, &headers, &body).map_err(|e| {
            warn!("Rejected callback: {}", e);
            (StatusCode::UNAUTHORIZED, String::new())
        })?;
    }

    let callback = AttachmentActionCallback::from_form(&body).map_err(|e| {
        let msg = format!("Failed to parse callback: {}", e);
        warn!("{}", msg);

        (StatusCode::UNPROCESSABLE_ENTITY, msg)
    })?;

    if let Some(expected) = &deps.verification_token {
        if !expected.matches(&callback.token) {
            warn!("Rejected callback: invalid verification token");
            return Err((StatusCode::UNAUTHORIZED, String::new()));
        }
    }

    info!(
        callback_id = callback.callback_id.as_str(),
        action = callback.action().map(|x| x.name.as_str()),
        value = callback.selected_value(),
        "Received interactive callback"
    );

    Ok(StatusCode::OK)
}

fn validate_request_signature(
    secret: &SigningSecret,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(), SignatureError> {
    let get = |k: &str| headers.get(k).and_then(|x| x.to_str().ok());

    let timestamp = get(TIMESTAMP_HEADER).ok_or(SignatureError::Missing)?;
    let signature = get(SIGNATURE_HEADER).ok_or(SignatureError::Missing)?;

    verify_signature(secret, timestamp, body, signature, unix_now())
}
