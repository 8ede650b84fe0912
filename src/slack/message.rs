//! The top-level payload posted to an incoming webhook.

use super::{attachment::Attachment, error::SlackError};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use url::Url;

/// A message as accepted by Slack's incoming webhooks.
///
/// Every field is optional, however a message without `text` or at least one
/// attachment won't render as anything useful.
///
/// Unset fields are left out of the serialised payload entirely rather than
/// sent as `null`, as Slack treats some present-but-empty fields as rendering
/// instructions.
///
/// <https://api.slack.com/messaging/webhooks>
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Overrides the integration's display name.
    pub username: Option<String>,
    pub icon_url: Option<Url>,
    /// An emoji code such as `:ghost:`. Slack decides which icon wins if both
    /// this and `icon_url` are set.
    pub icon_emoji: Option<String>,
    /// Overrides the webhook's default channel, where permitted.
    pub channel: Option<String>,
    pub text: Option<String>,
    pub parse: Option<Parse>,
    pub link_names: Option<bool>,
    pub unfurl_links: Option<bool>,
    pub unfurl_media: Option<bool>,
    pub mrkdwn: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// How Slack should treat names and links in `text`.
///
/// <https://api.slack.com/reference/surfaces/formatting#automatic-parsing>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parse {
    Full,
    None,
}

impl Message {
    /// A plain text message.
    ///
    /// ```
    /// let msg = herald::Message::text("hello");
    /// assert_eq!(msg.to_json().unwrap(), serde_json::json!({ "text": "hello" }));
    /// ```
    pub fn text<T: Into<String>>(text: T) -> Self {
        Message {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_username<T: Into<String>>(mut self, username: T) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_channel<T: Into<String>>(mut self, channel: T) -> Self {
        self.channel = Some(channel.into());
        self
    }

    #[must_use]
    pub fn with_icon_url(mut self, icon: Url) -> Self {
        self.icon_url = Some(icon);
        self
    }

    #[must_use]
    pub fn with_icon_emoji<T: Into<String>>(mut self, emoji: T) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }

    /// Append an attachment, preserving order.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// The JSON document Slack will receive.
    pub fn to_json(&self) -> Result<serde_json::Value, SlackError> {
        Ok(serde_json::to_value(self)?)
    }

    /// The serialised request body.
    pub fn to_vec(&self) -> Result<Vec<u8>, SlackError> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slack::{
        action::{ActionStyle, AttachmentAction, ConfirmationField},
        attachment::{AttachmentField, MarkdownIn},
    };
    use quickcheck::quickcheck;
    use serde_json::json;

    fn full_message() -> Message {
        Message {
            username: Some("deploybot".into()),
            icon_url: Some(Url::parse("https://example.com/icon.png").unwrap()),
            channel: Some("#releases".into()),
            text: Some("Release *v2* is ready".into()),
            parse: Some(Parse::None),
            link_names: Some(true),
            unfurl_links: Some(false),
            mrkdwn: Some(true),
            attachments: vec![Attachment::new("Approve v2?", "Changes since v1")
                .with_color("#36a64f")
                .with_callback_id("release_v2")
                .with_field(AttachmentField::new("Commits", "12", true))
                .with_field(AttachmentField::new("Author", "ada", true))
                .with_markdown_in(MarkdownIn::Text)
                .with_action(
                    AttachmentAction::button("approve", "Approve")
                        .with_style(ActionStyle::Primary)
                        .with_value("yes")
                        .with_confirm(ConfirmationField::new("Really ship it?")),
                )],
            ..Default::default()
        }
    }

    #[test]
    fn test_text_only() {
        assert_eq!(
            Message::text("hello").to_vec().unwrap(),
            br#"{"text":"hello"}"#.to_vec()
        );
    }

    #[test]
    fn test_empty_message_is_empty_object() {
        assert_eq!(Message::default().to_json().unwrap(), json!({}));
    }

    #[test]
    fn test_round_trip() {
        let msg = full_message();
        let parsed: Message = serde_json::from_slice(&msg.to_vec().unwrap()).unwrap();

        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_unset_fields_are_absent() {
        let json = full_message().to_json().unwrap();
        let obj = json.as_object().unwrap();

        for key in ["icon_emoji", "unfurl_media"] {
            assert!(!obj.contains_key(key), "unexpected key {}", key);
        }
        assert_eq!(obj["unfurl_links"], json!(false));
        assert_eq!(obj["parse"], json!("none"));

        let attachment = obj["attachments"][0].as_object().unwrap();
        for key in ["id", "author_name", "image_url", "footer", "ts"] {
            assert!(!attachment.contains_key(key), "unexpected key {}", key);
        }
        assert_eq!(attachment["mrkdwn_in"], json!(["text"]));

        let action = attachment["actions"][0].as_object().unwrap();
        assert_eq!(action["type"], json!("button"));
        assert_eq!(action["style"], json!("primary"));
        assert_eq!(action["confirm"], json!([{ "text": "Really ship it?" }]));
        for key in ["options", "selected_options", "option_groups", "url"] {
            assert!(!action.contains_key(key), "unexpected key {}", key);
        }
    }

    #[test]
    fn test_builders() {
        let msg = Message::text("hi")
            .with_username("herald")
            .with_channel("#general")
            .with_icon_emoji(":ghost:");

        assert_eq!(
            msg.to_json().unwrap(),
            json!({
                "username": "herald",
                "icon_emoji": ":ghost:",
                "channel": "#general",
                "text": "hi",
            })
        );
    }

    /// Whether any value in the document, at any depth, is `null` or `[]`.
    fn has_null_or_empty(value: &serde_json::Value) -> bool {
        use serde_json::Value;

        match value {
            Value::Null => true,
            Value::Array(xs) => xs.is_empty() || xs.iter().any(has_null_or_empty),
            Value::Object(obj) => obj.values().any(has_null_or_empty),
            _ => false,
        }
    }

    #[test]
    fn test_has_null_or_empty() {
        assert!(has_null_or_empty(&json!({ "a": [{ "b": null }] })));
        assert!(has_null_or_empty(&json!({ "a": { "b": [] } })));
        assert!(!has_null_or_empty(&json!({ "a": [{ "b": "" }], "c": {} })));
    }

    quickcheck! {
        fn prop_text_only_serialises_to_single_key(text: String) -> bool {
            Message::text(text.clone()).to_json().unwrap() == json!({ "text": text })
        }

        fn prop_round_trip(msg: Message) -> bool {
            serde_json::from_slice::<Message>(&msg.to_vec().unwrap()).unwrap() == msg
        }

        fn prop_no_null_or_empty_values(msg: Message) -> bool {
            !has_null_or_empty(&msg.to_json().unwrap())
        }
    }
}
