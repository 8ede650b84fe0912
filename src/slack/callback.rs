//! Parse the request Slack sends when a user clicks a button or picks a menu
//! option in an attachment.
//!
//! Slack posts these as `application/x-www-form-urlencoded` with the JSON
//! document in a single `payload` field. Receiving them is up to the app; see
//! the `/api/v1/callback` route in the relay binary for one way to do it.
//!
//! <https://api.slack.com/legacy/interactive-messages>

use super::{action::AttachmentAction, error::CallbackError};
use serde::Deserialize;
use serde_with::{serde_as, NoneAsEmptyString};
use url::Url;

/// The document Slack sends to an app's request URL after a user interacts
/// with an [AttachmentAction].
///
/// `token` is the app's verification token. Checking it against the expected
/// value is the consumer's responsibility, as is verifying the request
/// signature (see [super::auth]).
///
/// `callback_id`, `token`, and `response_url` are required: without them a
/// callback can't be routed, authenticated, or answered, so a payload missing
/// any of them fails to parse rather than yielding empty values. Everything
/// else is optional, with empty strings read as `None`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttachmentActionCallback {
    /// The action(s) the user triggered, carrying the selected value.
    #[serde(default)]
    pub actions: Vec<AttachmentAction>,
    /// Identifies which attachment was interacted with. Required.
    pub callback_id: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub value: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub action_ts: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub message_ts: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub attachment_id: Option<String>,

    /// Required.
    pub token: String,
    /// Post follow-up messages here, for up to 30 minutes. Required.
    pub response_url: Url,
    /// Open a dialog in response, within 3 seconds.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub trigger_id: Option<String>,

    pub team: Option<CallbackTeam>,
    pub channel: Option<CallbackEntity>,
    pub user: Option<CallbackEntity>,
}

/// The workspace the interaction happened in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallbackTeam {
    pub id: String,
    pub domain: Option<String>,
}

/// A channel or user involved in the interaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallbackEntity {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Deserialize)]
struct CallbackForm {
    payload: Option<String>,
}

impl AttachmentActionCallback {
    /// Parse the raw JSON document.
    pub fn from_json(s: &str) -> Result<Self, CallbackError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a form-encoded request body containing a `payload` field.
    pub fn from_form(body: &[u8]) -> Result<Self, CallbackError> {
        let form: CallbackForm = serde_urlencoded::from_bytes(body)?;

        form.payload
            .ok_or(CallbackError::MissingPayload)
            .and_then(|x| Self::from_json(&x))
    }

    /// The action which triggered the callback. Slack only ever sends one.
    pub fn action(&self) -> Option<&AttachmentAction> {
        self.actions.first()
    }

    /// The value the user chose, from either a button or a menu.
    pub fn selected_value(&self) -> Option<&str> {
        let action = self.action()?;

        action
            .value
            .as_deref()
            .or_else(|| action.selected_options.first().map(|x| x.value.as_str()))
    }
}
