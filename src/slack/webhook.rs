//! Deliver a [Message] to an incoming webhook.
//!
//! <https://api.slack.com/messaging/webhooks#posting_with_webhooks>

use super::{error::SlackError, message::Message, validate::Strictness};
use once_cell::sync::Lazy;
use reqwest::{
    header::{CONTENT_TYPE, LOCATION},
    redirect, Proxy,
};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// A reusable client that holds a connection pool internally, as per
/// [reqwest::Client], for use by [post_message].
static CLIENT: Lazy<WebhookClient> = Lazy::new(|| WebhookClient {
    client: reqwest::Client::new(),
    follow_redirects: true,
});

/// How requests reach Slack.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Send every request via this proxy.
    pub proxy: Option<Url>,
    /// When disabled, any redirect is treated as a [SlackError::Redirect]
    /// rather than followed, so that a revoked or mistyped webhook URL can't
    /// forward the message somewhere unexpected.
    pub follow_redirects: bool,
    /// Applies to the whole request, from connecting until the response body
    /// has been read.
    pub timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            proxy: None,
            follow_redirects: true,
            timeout: None,
        }
    }
}

impl TransportConfig {
    #[must_use]
    pub fn with_proxy(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    #[must_use]
    pub fn without_redirects(mut self) -> Self {
        self.follow_redirects = false;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Posts messages to webhook URLs. Cheap to clone; clones share a connection
/// pool.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    follow_redirects: bool,
}

impl WebhookClient {
    pub fn new(config: TransportConfig) -> Result<Self, SlackError> {
        let mut builder = reqwest::Client::builder();

        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(Proxy::all(proxy.as_str()).map_err(SlackError::Config)?);
        }

        if !config.follow_redirects {
            builder = builder.redirect(redirect::Policy::none());
        }

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(WebhookClient {
            client: builder.build().map_err(SlackError::Config)?,
            follow_redirects: config.follow_redirects,
        })
    }

    /// Validate, serialise, and post a message in a single request.
    ///
    /// Slack answers a successful post with a bare `ok`, which is ignored. Any
    /// other status yields a [SlackError::Delivery] carrying Slack's reason,
    /// unless the body can't be read in full, which is a
    /// [SlackError::Transport].
    // The webhook URL is a credential, so only its host is recorded.
    #[instrument(skip_all, fields(host = url.host_str().unwrap_or_default()))]
    pub async fn post_message(&self, url: &Url, msg: &Message) -> Result<(), SlackError> {
        msg.validate(Strictness::Lenient)?;
        let body = msg.to_vec()?;

        debug!(bytes = body.len(), "Posting message to webhook");

        let res = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = res.status();

        if status.is_success() {
            return Ok(());
        }

        if status.is_redirection() && !self.follow_redirects {
            let location = res
                .headers()
                .get(LOCATION)
                .and_then(|x| x.to_str().ok())
                .map(str::to_owned);
            warn!(status = status.as_u16(), "Webhook attempted a redirect");

            return Err(SlackError::Redirect {
                status: status.as_u16(),
                location,
            });
        }

        let body = res.text().await?;
        warn!(status = status.as_u16(), body = body.as_str(), "Webhook rejected message");

        Err(SlackError::Delivery {
            status: status.as_u16(),
            body,
        })
    }
}

/// Post a message with a shared client using the default [TransportConfig].
pub async fn post_message(url: &Url, msg: &Message) -> Result<(), SlackError> {
    CLIENT.post_message(url, msg).await
}
