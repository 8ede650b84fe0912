//! Random payloads for property tests. Strings are unconstrained, URLs come
//! from a small fixed pool, and collections are kept short.

use super::{
    action::{
        ActionStyle, ActionType, AttachmentAction, AttachmentActionOption,
        AttachmentActionOptionGroup, ConfirmationField, DataSource,
    },
    attachment::{Attachment, AttachmentField, MarkdownIn},
    message::{Message, Parse},
};
use quickcheck::{Arbitrary, Gen};
use url::Url;

const URLS: [&str; 4] = [
    "https://example.com/",
    "https://example.com/icon.png",
    "http://127.0.0.1:8080/a?b=c",
    "https://hooks.slack.com/actions/T0/1/abc",
];

fn url(g: &mut Gen) -> Url {
    let x = g.choose(&URLS).copied().unwrap_or(URLS[0]);
    Url::parse(x).unwrap()
}

fn maybe<T, F: FnOnce(&mut Gen) -> T>(g: &mut Gen, f: F) -> Option<T> {
    if bool::arbitrary(g) {
        Some(f(g))
    } else {
        None
    }
}

/// Between `min` and `max` elements, inclusive.
fn small_vec<T, F: FnMut(&mut Gen) -> T>(g: &mut Gen, min: usize, max: usize, mut f: F) -> Vec<T> {
    let len = min + usize::arbitrary(g) % (max - min + 1);
    (0..len).map(|_| f(g)).collect()
}

fn choose<T: Copy>(g: &mut Gen, xs: &[T]) -> T {
    *g.choose(xs).unwrap()
}

impl Arbitrary for Parse {
    fn arbitrary(g: &mut Gen) -> Self {
        choose(g, &[Parse::Full, Parse::None])
    }
}

impl Arbitrary for MarkdownIn {
    fn arbitrary(g: &mut Gen) -> Self {
        choose(g, &[MarkdownIn::Pretext, MarkdownIn::Text, MarkdownIn::Fields])
    }
}

impl Arbitrary for ActionType {
    fn arbitrary(g: &mut Gen) -> Self {
        choose(g, &[ActionType::Button, ActionType::Select])
    }
}

impl Arbitrary for ActionStyle {
    fn arbitrary(g: &mut Gen) -> Self {
        choose(
            g,
            &[ActionStyle::Default, ActionStyle::Primary, ActionStyle::Danger],
        )
    }
}

impl Arbitrary for DataSource {
    fn arbitrary(g: &mut Gen) -> Self {
        choose(
            g,
            &[
                DataSource::Static,
                DataSource::Users,
                DataSource::Channels,
                DataSource::Conversations,
                DataSource::External,
            ],
        )
    }
}

impl Arbitrary for ConfirmationField {
    fn arbitrary(g: &mut Gen) -> Self {
        ConfirmationField {
            title: Option::arbitrary(g),
            text: String::arbitrary(g),
            ok_text: Option::arbitrary(g),
            dismiss_text: Option::arbitrary(g),
        }
    }
}

impl Arbitrary for AttachmentActionOption {
    fn arbitrary(g: &mut Gen) -> Self {
        AttachmentActionOption {
            text: String::arbitrary(g),
            value: String::arbitrary(g),
            description: Option::arbitrary(g),
        }
    }
}

// Groups always carry their options, so an empty one would serialise as `[]`.
impl Arbitrary for AttachmentActionOptionGroup {
    fn arbitrary(g: &mut Gen) -> Self {
        AttachmentActionOptionGroup {
            text: String::arbitrary(g),
            options: small_vec(g, 1, 3, AttachmentActionOption::arbitrary),
        }
    }
}

impl Arbitrary for AttachmentAction {
    fn arbitrary(g: &mut Gen) -> Self {
        AttachmentAction {
            name: String::arbitrary(g),
            text: String::arbitrary(g),
            style: Option::arbitrary(g),
            kind: ActionType::arbitrary(g),
            value: Option::arbitrary(g),
            data_source: Option::arbitrary(g),
            min_query_length: Option::arbitrary(g),
            options: small_vec(g, 0, 3, AttachmentActionOption::arbitrary),
            selected_options: small_vec(g, 0, 1, AttachmentActionOption::arbitrary),
            option_groups: small_vec(g, 0, 2, AttachmentActionOptionGroup::arbitrary),
            confirm: small_vec(g, 0, 1, ConfirmationField::arbitrary),
            url: maybe(g, url),
        }
    }
}

impl Arbitrary for AttachmentField {
    fn arbitrary(g: &mut Gen) -> Self {
        AttachmentField {
            title: String::arbitrary(g),
            value: String::arbitrary(g),
            short: bool::arbitrary(g),
        }
    }
}

impl Arbitrary for Attachment {
    fn arbitrary(g: &mut Gen) -> Self {
        Attachment {
            color: Option::arbitrary(g),
            fallback: String::arbitrary(g),
            callback_id: Option::arbitrary(g),
            id: Option::arbitrary(g),
            author_id: Option::arbitrary(g),
            author_name: Option::arbitrary(g),
            author_subname: Option::arbitrary(g),
            author_link: maybe(g, url),
            author_icon: maybe(g, url),
            title: Option::arbitrary(g),
            title_link: maybe(g, url),
            pretext: Option::arbitrary(g),
            text: String::arbitrary(g),
            image_url: maybe(g, url),
            thumb_url: maybe(g, url),
            fields: small_vec(g, 0, 3, AttachmentField::arbitrary),
            actions: small_vec(g, 0, 3, AttachmentAction::arbitrary),
            mrkdwn_in: small_vec(g, 0, 3, MarkdownIn::arbitrary)
                .into_iter()
                .collect(),
            footer: Option::arbitrary(g),
            footer_icon: maybe(g, url),
            ts: Option::arbitrary(g),
        }
    }
}

impl Arbitrary for Message {
    fn arbitrary(g: &mut Gen) -> Self {
        Message {
            username: Option::arbitrary(g),
            icon_url: maybe(g, url),
            icon_emoji: Option::arbitrary(g),
            channel: Option::arbitrary(g),
            text: Option::arbitrary(g),
            parse: Option::arbitrary(g),
            link_names: Option::arbitrary(g),
            unfurl_links: Option::arbitrary(g),
            unfurl_media: Option::arbitrary(g),
            mrkdwn: Option::arbitrary(g),
            attachments: small_vec(g, 0, 2, Attachment::arbitrary),
        }
    }
}
