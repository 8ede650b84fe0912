//! Structural limits Slack enforces on attachments, checked before sending
//! rather than discovered via an `invalid_payload` response.

use super::{action::AttachmentAction, attachment::Attachment, message::Message};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::warn;

/// Maximum actions per attachment.
pub const MAX_ACTIONS: usize = 5;

/// Maximum options per menu, counting those within option groups.
pub const MAX_OPTIONS: usize = 100;

/// Maximum characters in an option's description.
pub const MAX_OPTION_DESCRIPTION_LEN: usize = 30;

// This unwrap is tested below.
static COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#([0-9a-fA-F]{3}){1,2}|good|warning|danger)$").unwrap());

/// Whether soft limits are errors or merely logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Hard limits fail; soft limits such as description length are logged.
    #[default]
    Lenient,
    /// Soft limits fail too.
    Strict,
}

/// A violated limit, locating the offending element by index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("too many actions in attachment {attachment}: {count} (maximum {})", MAX_ACTIONS)]
    TooManyActions { attachment: usize, count: usize },

    #[error(
        "too many options in attachment {attachment}, action {action}: {count} (maximum {})",
        MAX_OPTIONS
    )]
    TooManyOptions {
        attachment: usize,
        action: usize,
        count: usize,
    },

    #[error(
        "description of option `{option}` in attachment {attachment}, action {action} is {length} characters (maximum {})",
        MAX_OPTION_DESCRIPTION_LEN
    )]
    DescriptionTooLong {
        attachment: usize,
        action: usize,
        option: String,
        length: usize,
    },
}

impl Message {
    /// Check the message against Slack's limits on attachments and actions.
    ///
    /// Anything Slack would merely ignore or truncate is logged as a warning
    /// unless `strictness` is [Strictness::Strict].
    pub fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        if self.text.is_none() && self.attachments.is_empty() {
            warn!("Message has neither text nor attachments");
        }

        self.attachments
            .iter()
            .enumerate()
            .try_for_each(|(i, x)| validate_attachment(i, x, strictness))
    }
}

fn validate_attachment(
    index: usize,
    attachment: &Attachment,
    strictness: Strictness,
) -> Result<(), ValidationError> {
    if attachment.actions.len() > MAX_ACTIONS {
        return Err(ValidationError::TooManyActions {
            attachment: index,
            count: attachment.actions.len(),
        });
    }

    if let Some(color) = &attachment.color {
        if !COLOR.is_match(color) {
            warn!(
                attachment = index,
                color = color.as_str(),
                "Unrecognised attachment color"
            );
        }
    }

    attachment
        .actions
        .iter()
        .enumerate()
        .try_for_each(|(j, x)| validate_action(index, j, x, strictness))
}

fn validate_action(
    attachment: usize,
    index: usize,
    action: &AttachmentAction,
    strictness: Strictness,
) -> Result<(), ValidationError> {
    let grouped = action.option_groups.iter().flat_map(|g| g.options.iter());
    let count = action.options.len() + grouped.clone().count();

    if count > MAX_OPTIONS {
        return Err(ValidationError::TooManyOptions {
            attachment,
            action: index,
            count,
        });
    }

    if !action.options.is_empty() && !action.option_groups.is_empty() {
        warn!(
            attachment,
            action = index,
            "Both options and option groups are set; Slack will show only one"
        );
    }

    if action.selected_options.len() > 1 {
        warn!(
            attachment,
            action = index,
            "Only the first selected option is honoured"
        );
    }

    for opt in action.options.iter().chain(grouped) {
        let length = opt
            .description
            .as_ref()
            .map_or(0, |x| x.chars().count());

        if length <= MAX_OPTION_DESCRIPTION_LEN {
            continue;
        }

        match strictness {
            Strictness::Strict => {
                return Err(ValidationError::DescriptionTooLong {
                    attachment,
                    action: index,
                    option: opt.value.clone(),
                    length,
                })
            }
            Strictness::Lenient => warn!(
                attachment,
                action = index,
                option = opt.value.as_str(),
                length,
                "Option description will be truncated"
            ),
        }
    }

    Ok(())
}
