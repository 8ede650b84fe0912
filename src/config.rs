//! Environment configuration for the relay.

use herald::{slack::auth::SigningSecret, TransportConfig};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// The bearer token callers of `/api/v1/message` must present.
#[derive(Clone)]
pub struct RelayToken(pub String);

/// Slack's legacy verification token, echoed back in every callback.
#[derive(Clone)]
pub struct VerificationToken(pub String);

impl VerificationToken {
    /// Compare in constant time, by way of MACs of both tokens under a fixed
    /// key.
    pub fn matches(&self, token: &str) -> bool {
        type HmacSha256 = Hmac<Sha256>;

        let mac = |x: &str| {
            HmacSha256::new_from_slice(b"herald-verification-token").map(|mut mac| {
                mac.update(x.as_bytes());
                mac
            })
        };

        match (mac(self.0.as_str()), mac(token)) {
            (Ok(expected), Ok(offered)) => expected
                .verify_slice(&offered.finalize().into_bytes())
                .is_ok(),
            _ => false,
        }
    }
}

pub struct Config {
    pub port: u16,
    pub webhook_url: Url,
    pub relay_token: RelayToken,
    pub verification_token: Option<VerificationToken>,
    pub signing_secret: Option<SigningSecret>,
    pub transport: TransportConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing ${0} environment variable")]
    Missing(&'static str),

    #[error("could not parse ${var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Redirects aren't followed by default, as the relay has no way to know
/// whether the destination is trustworthy.
const DEFAULT_FOLLOW_REDIRECTS: bool = false;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PORT: u16 = 80;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build the config from any key-value source.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&get, "PORT", DEFAULT_PORT)?;

        let webhook_url = get("SLACK_WEBHOOK_URL")
            .ok_or(ConfigError::Missing("SLACK_WEBHOOK_URL"))
            .and_then(|x| parse_url("SLACK_WEBHOOK_URL", &x))?;

        let relay_token = get("HERALD_TOKEN")
            .filter(|x| !x.is_empty())
            .map(RelayToken)
            .ok_or(ConfigError::Missing("HERALD_TOKEN"))?;

        let proxy = get("HTTPS_PROXY_URL")
            .map(|x| parse_url("HTTPS_PROXY_URL", &x))
            .transpose()?;

        let transport = TransportConfig {
            proxy,
            follow_redirects: parse_or(&get, "FOLLOW_REDIRECTS", DEFAULT_FOLLOW_REDIRECTS)?,
            timeout: Some(Duration::from_secs(parse_or(
                &get,
                "TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?)),
        };

        Ok(Config {
            port,
            webhook_url,
            relay_token,
            verification_token: get("SLACK_VERIFICATION_TOKEN").map(VerificationToken),
            signing_secret: get("SLACK_SIGNING_SECRET").map(SigningSecret),
            transport,
        })
    }
}

fn parse_or<F, T>(get: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get(var) {
        None => Ok(default),
        Some(x) => x.parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}

fn parse_url(var: &'static str, x: &str) -> Result<Url, ConfigError> {
    Url::parse(x).map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}
