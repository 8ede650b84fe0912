//! Helpers around Slack's signing of inbound requests.
//!
//! Slack signs every request it sends to an app with the app's signing secret.
//! The signature covers a version prefix, the request timestamp, and the raw
//! body. We'll compute our own signature and compare it against the one in the
//! `X-Slack-Signature` header to know if the request really came from Slack.
//!
//! <https://api.slack.com/authentication/verifying-requests-from-slack>

use super::error::SignatureError;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "x-slack-signature";
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";

/// Requests older than this are rejected to prevent replay.
pub const MAX_REQUEST_AGE_SECS: u64 = 60 * 5;

const VERSION: &str = "v0";

/// A newtype wrapper around an app's signing secret.
#[derive(Clone)]
pub struct SigningSecret(pub String);

/// Verify a request's signature. `timestamp` and `signature` are the raw
/// header values, and `now` is the current Unix time in seconds (see
/// [unix_now]).
pub fn verify_signature(
    secret: &SigningSecret,
    timestamp: &str,
    body: &[u8],
    signature: &str,
    now: u64,
) -> Result<(), SignatureError> {
    let ts: u64 = timestamp.parse().map_err(|_| SignatureError::Invalid)?;
    if now.abs_diff(ts) > MAX_REQUEST_AGE_SECS {
        return Err(SignatureError::Stale);
    }

    let offered = signature
        .strip_prefix("v0=")
        .and_then(|x| hex::decode(x).ok())
        .ok_or(SignatureError::Invalid)?;

    mac(secret, timestamp, body)
        .ok_or(SignatureError::Invalid)?
        .verify_slice(&offered)
        .map_err(|_| SignatureError::Invalid)
}

/// Generate a valid `X-Slack-Signature` header value with our secret.
pub fn gen_signature(secret: &SigningSecret, timestamp: &str, body: &[u8]) -> Option<String> {
    mac(secret, timestamp, body)
        .map(|mac| format!("{}={}", VERSION, hex::encode(mac.finalize().into_bytes())))
}

fn mac(secret: &SigningSecret, timestamp: &str, body: &[u8]) -> Option<HmacSha256> {
    HmacSha256::new_from_slice(secret.0.as_bytes())
        .map(|mut mac| {
            mac.update(format!("{}:{}:", VERSION, timestamp).as_bytes());
            mac.update(body);
            mac
        })
        .ok()
}

/// The current Unix time in seconds.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
