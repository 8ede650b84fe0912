//! Interactive buttons and menus within an attachment.
//!
//! <https://api.slack.com/legacy/interactive-message-field-guide#action_fields>

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use url::Url;

/// A button or menu. Clicking it sends an
/// [AttachmentActionCallback](super::callback::AttachmentActionCallback) to the
/// app's configured request URL.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentAction {
    pub name: String,
    // Callbacks echo actions back without their text.
    #[serde(default)]
    pub text: String,
    pub style: Option<ActionStyle>,
    #[serde(rename = "type")]
    pub kind: ActionType,
    pub value: Option<String>,
    pub data_source: Option<DataSource>,
    /// Only meaningful for `external` menus. Slack defaults to 1.
    pub min_query_length: Option<u32>,
    /// At most [MAX_OPTIONS](super::validate::MAX_OPTIONS) per menu.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<AttachmentActionOption>,
    /// Only the first element is used as the menu's initial selection.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_options: Vec<AttachmentActionOption>,
    /// Used instead of, not as well as, `options`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_groups: Vec<AttachmentActionOptionGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub confirm: Vec<ConfirmationField>,
    pub url: Option<Url>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Button,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    Default,
    Primary,
    Danger,
}

/// Where a menu's options come from. Anything but `static` is populated by
/// Slack or, for `external`, by the app's options load URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Static,
    Users,
    Channels,
    Conversations,
    External,
}

/// A single menu entry.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentActionOption {
    // Callbacks echo selected options back without their text.
    #[serde(default)]
    pub text: String,
    pub value: String,
    /// Slack truncates anything beyond
    /// [MAX_OPTION_DESCRIPTION_LEN](super::validate::MAX_OPTION_DESCRIPTION_LEN)
    /// characters.
    pub description: Option<String>,
}

/// A labelled group of menu entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentActionOptionGroup {
    pub text: String,
    pub options: Vec<AttachmentActionOption>,
}

/// Ask the user to confirm before the action fires.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationField {
    pub title: Option<String>,
    pub text: String,
    /// Slack shows [DEFAULT_OK_TEXT] when unset.
    pub ok_text: Option<String>,
    /// Slack shows [DEFAULT_DISMISS_TEXT] when unset.
    pub dismiss_text: Option<String>,
}

pub const DEFAULT_OK_TEXT: &str = "Okay";
pub const DEFAULT_DISMISS_TEXT: &str = "Cancel";

impl AttachmentAction {
    fn new<N: Into<String>, T: Into<String>>(kind: ActionType, name: N, text: T) -> Self {
        AttachmentAction {
            name: name.into(),
            text: text.into(),
            style: None,
            kind,
            value: None,
            data_source: None,
            min_query_length: None,
            options: Vec::new(),
            selected_options: Vec::new(),
            option_groups: Vec::new(),
            confirm: Vec::new(),
            url: None,
        }
    }

    pub fn button<N: Into<String>, T: Into<String>>(name: N, text: T) -> Self {
        Self::new(ActionType::Button, name, text)
    }

    pub fn select<N: Into<String>, T: Into<String>>(name: N, text: T) -> Self {
        Self::new(ActionType::Select, name, text)
    }

    /// A button which opens `url` in the user's browser.
    pub fn link<N: Into<String>, T: Into<String>>(name: N, text: T, url: Url) -> Self {
        AttachmentAction {
            url: Some(url),
            ..Self::button(name, text)
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ActionStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_value<T: Into<String>>(mut self, value: T) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_data_source(mut self, source: DataSource) -> Self {
        self.data_source = Some(source);
        self
    }

    #[must_use]
    pub fn with_min_query_length(mut self, len: u32) -> Self {
        self.min_query_length = Some(len);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Vec<AttachmentActionOption>) -> Self {
        self.options = options;
        self
    }

    /// Pre-select `option`, replacing any previous selection.
    #[must_use]
    pub fn with_selected(mut self, option: AttachmentActionOption) -> Self {
        self.selected_options = vec![option];
        self
    }

    #[must_use]
    pub fn with_option_group(mut self, group: AttachmentActionOptionGroup) -> Self {
        self.option_groups.push(group);
        self
    }

    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmationField) -> Self {
        self.confirm.push(confirm);
        self
    }
}

impl AttachmentActionOption {
    pub fn new<T: Into<String>, V: Into<String>>(text: T, value: V) -> Self {
        AttachmentActionOption {
            text: text.into(),
            value: value.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description<T: Into<String>>(mut self, description: T) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl AttachmentActionOptionGroup {
    pub fn new<T: Into<String>>(text: T, options: Vec<AttachmentActionOption>) -> Self {
        AttachmentActionOptionGroup {
            text: text.into(),
            options,
        }
    }
}

impl ConfirmationField {
    pub fn new<T: Into<String>>(text: T) -> Self {
        ConfirmationField {
            title: None,
            text: text.into(),
            ok_text: None,
            dismiss_text: None,
        }
    }

    #[must_use]
    pub fn with_title<T: Into<String>>(mut self, title: T) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_buttons<O: Into<String>, D: Into<String>>(mut self, ok: O, dismiss: D) -> Self {
        self.ok_text = Some(ok.into());
        self.dismiss_text = Some(dismiss.into());
        self
    }

    /// The confirm button label as Slack will display it.
    pub fn ok_label(&self) -> &str {
        self.ok_text.as_deref().unwrap_or(DEFAULT_OK_TEXT)
    }

    /// The dismiss button label as Slack will display it.
    pub fn dismiss_label(&self) -> &str {
        self.dismiss_text.as_deref().unwrap_or(DEFAULT_DISMISS_TEXT)
    }
}
