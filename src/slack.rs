//! Supports posting a structured message to a Slack incoming webhook, and
//! parsing the callbacks Slack sends when users interact with it.
//!
//! See [message::Message] and [webhook::WebhookClient].

pub mod action;
#[cfg(test)]
mod arbitrary;
pub mod attachment;
pub mod auth;
pub mod callback;
pub mod error;
pub mod message;
pub mod validate;
pub mod webhook;
