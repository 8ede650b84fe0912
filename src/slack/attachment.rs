//! Legacy secondary attachments: rich cards hanging off a message, optionally
//! with interactive actions.
//!
//! <https://api.slack.com/reference/messaging/attachments>

use super::action::AttachmentAction;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::BTreeSet;
use url::Url;

/// A rich content block. `fallback` and `text` are required by Slack; the
/// former is shown by clients which can't render attachments.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// A hex colour such as `#36a64f`, or one of `good`, `warning`, `danger`.
    pub color: Option<String>,
    pub fallback: String,

    /// Identifies this attachment in interactive callbacks.
    pub callback_id: Option<String>,
    /// Disambiguates attachments within the same message.
    pub id: Option<u32>,

    pub author_id: Option<String>,
    pub author_name: Option<String>,
    pub author_subname: Option<String>,
    pub author_link: Option<Url>,
    pub author_icon: Option<Url>,

    pub title: Option<String>,
    pub title_link: Option<Url>,
    pub pretext: Option<String>,
    pub text: String,

    pub image_url: Option<Url>,
    pub thumb_url: Option<Url>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
    /// At most [MAX_ACTIONS](super::validate::MAX_ACTIONS) per attachment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<AttachmentAction>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub mrkdwn_in: BTreeSet<MarkdownIn>,

    pub footer: Option<String>,
    pub footer_icon: Option<Url>,

    /// Unix epoch seconds, shown alongside the footer.
    pub ts: Option<i64>,
}

/// A title/value pair rendered as a table row. `short` fields may be laid out
/// side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub short: bool,
}

/// The attachment fields Slack will render as mrkdwn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownIn {
    Pretext,
    Text,
    Fields,
}

impl AttachmentField {
    pub fn new<T: Into<String>, V: Into<String>>(title: T, value: V, short: bool) -> Self {
        AttachmentField {
            title: title.into(),
            value: value.into(),
            short,
        }
    }
}

impl Attachment {
    pub fn new<F: Into<String>, T: Into<String>>(fallback: F, text: T) -> Self {
        Attachment {
            fallback: fallback.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_color<T: Into<String>>(mut self, color: T) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_title<T: Into<String>>(mut self, title: T, link: Option<Url>) -> Self {
        self.title = Some(title.into());
        self.title_link = link;
        self
    }

    #[must_use]
    pub fn with_pretext<T: Into<String>>(mut self, pretext: T) -> Self {
        self.pretext = Some(pretext.into());
        self
    }

    #[must_use]
    pub fn with_author<T: Into<String>>(mut self, name: T, link: Option<Url>) -> Self {
        self.author_name = Some(name.into());
        self.author_link = link;
        self
    }

    #[must_use]
    pub fn with_footer<T: Into<String>>(mut self, footer: T, icon: Option<Url>) -> Self {
        self.footer = Some(footer.into());
        self.footer_icon = icon;
        self
    }

    #[must_use]
    pub fn with_ts(mut self, ts: i64) -> Self {
        self.ts = Some(ts);
        self
    }

    #[must_use]
    pub fn with_callback_id<T: Into<String>>(mut self, callback_id: T) -> Self {
        self.callback_id = Some(callback_id.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: AttachmentField) -> Self {
        self.fields.push(field);
        self
    }

    /// Append an action. The limit on actions isn't checked until
    /// [validation](crate::Message::validate).
    #[must_use]
    pub fn with_action(mut self, action: AttachmentAction) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn with_markdown_in(mut self, field: MarkdownIn) -> Self {
        self.mrkdwn_in.insert(field);
        self
    }
}
