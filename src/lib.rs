//! Post formatted messages to Slack's incoming webhooks.
//!
//! A [Message] is plain data: build one, optionally [validate] it, and hand it
//! to a [WebhookClient] along with the webhook URL Slack issued. The URL is the
//! only credential involved, so treat it as a secret.
//!
//! Interactive attachments call back into an endpoint of your choosing; see
//! [AttachmentActionCallback] for parsing those requests.
//!
//! [validate]: Message::validate

pub mod slack;

pub use slack::{
    action::*, attachment::*, callback::AttachmentActionCallback, error::*, message::*,
    validate::{Strictness, ValidationError},
    webhook::*,
};
