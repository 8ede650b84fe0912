//! A small relay in front of a Slack incoming webhook.
//!
//! Internal services post a [herald::Message] as JSON to `/api/v1/message`
//! and the relay forwards it to the one webhook it's configured with, so
//! the webhook URL itself needn't be shared around. Slack's interactive
//! callbacks can be pointed at `/api/v1/callback`.
//!
//! See [config] for the supported environment variables.

use config::Config;
use dotenvy::dotenv;
use herald::WebhookClient;
use router::Deps;
use std::net::SocketAddr;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{error, info, warn};

mod config;
mod interaction;
mod relay;
mod router;

/// Application entrypoint. Initialises tracing, reads configuration from the
/// environment, binds to 0.0.0.0, and starts the server.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let has_dotenv = dotenv().is_ok();
    if !has_dotenv {
        warn!("No .env found");
    }

    let config = match Config::from_env() {
        Ok(x) => x,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    server_(listener, config).await;
}

/// Initialise a server without graceful shutdown.
async fn server_(listener: TcpListener, config: Config) {
    // Giving a receiver that will never resolve.
    server(listener, config, oneshot::channel::<()>().1).await;
}

/// Initialise a server with graceful shutdown via `rx`.
async fn server(listener: TcpListener, config: Config, rx: oneshot::Receiver<()>) {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on {}", addr);
    }

    if config.signing_secret.is_none() {
        warn!("No $SLACK_SIGNING_SECRET environment variable found");
    }

    let client = WebhookClient::new(config.transport).expect("Failed to build HTTP client");
    let deps = Deps {
        client,
        webhook_url: config.webhook_url,
        verification_token: config.verification_token,
        signing_secret: config.signing_secret,
    };

    axum::serve(listener, router::new(deps, &config.relay_token))
        .with_graceful_shutdown(async {
            rx.await.ok();
        })
        .await
        .expect("Failed to start server");
}
