//! Link-preview tags for shared pages.
//!
//! Messaging apps render a card from the page's Open Graph and Twitter
//! meta tags. The page itself is reached only through [`PageContext`], so
//! the codec never depends on a browser.

use crate::decode::decode_url;
use crate::reveal::rakhi_image_path;
use crate::types::ShareState;

const PREVIEW_TITLE: &str = "🎀 Digital Rakhi from Sister";
const PREVIEW_DESCRIPTION: &str =
    "Happy Raksha Bandhan! I've sent you a beautiful digital rakhi with love.";

/// A `<meta>` tag, keyed by `property` (Open Graph) or `name` (Twitter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Property(&'static str),
    Name(&'static str),
}

/// The host page, as seen by the link layer.
pub trait PageContext {
    /// Full URL the page was opened with.
    fn location(&self) -> String;

    /// Create or overwrite a meta tag.
    fn set_meta(&mut self, key: MetaKey, content: &str);
}

/// Preview tags describing a share state.
pub fn preview_tags(state: &ShareState) -> Vec<(MetaKey, String)> {
    let description = if state.message().is_empty() {
        PREVIEW_DESCRIPTION
    } else {
        state.message()
    };
    let image = rakhi_image_path(state.item_id());

    vec![
        (MetaKey::Property("og:title"), PREVIEW_TITLE.to_string()),
        (MetaKey::Property("og:description"), description.to_string()),
        (MetaKey::Property("og:image"), image.clone()),
        (MetaKey::Property("og:image:width"), "800".to_string()),
        (MetaKey::Property("og:image:height"), "600".to_string()),
        (MetaKey::Property("og:type"), "website".to_string()),
        (MetaKey::Name("twitter:card"), "summary_large_image".to_string()),
        (MetaKey::Name("twitter:title"), PREVIEW_TITLE.to_string()),
        (MetaKey::Name("twitter:description"), description.to_string()),
        (MetaKey::Name("twitter:image"), image),
    ]
}

/// Write the preview tags for `state` into the page, plus `og:url`.
pub fn apply_preview(ctx: &mut impl PageContext, state: &ShareState) {
    for (key, content) in preview_tags(state) {
        ctx.set_meta(key, &content);
    }
    let location = ctx.location();
    ctx.set_meta(MetaKey::Property("og:url"), &location);
}

/// Decode the share state the page was opened with.
pub fn current_state(ctx: &impl PageContext) -> ShareState {
    decode_url(&ctx.location())
}
