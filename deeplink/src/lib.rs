//! Digital Bandhan share links
//!
//! This library carries a greeting card's content through a shareable URL
//! and builds the two external deep-links the page hands to the device: a
//! messaging link with prefilled text and a payment (`upi://`) link.
//!
//! Everything here is a pure function of its inputs. Encoding, decoding
//! and link building never fail: malformed input degrades to defaults.
//!

pub mod compose;
pub mod decode;
pub mod encode;
pub mod error;
pub mod escape;
pub mod messaging;
pub mod payee;
pub mod payment;
pub mod policy;
pub mod preview;
pub mod reveal;
pub mod types;

pub use compose::{Composer, Outbound, RakhiRequest, WishRequest};
pub use error::{LinkError, Result};
pub use policy::LinkPolicy;
pub use preview::{MetaKey, PageContext};
pub use reveal::Reveal;
pub use types::{Amount, ShareState, ShareStateBuilder, View};

/// Encode a share state into a link rooted at `base_url`.
pub fn encode(state: &ShareState, base_url: &str) -> String {
    encode::encode(state, base_url)
}

/// Decode a query string (with or without `?`) into a share state.
pub fn decode(query: &str) -> ShareState {
    decode::decode(query)
}

/// Build a messaging deep-link using the default policy.
pub fn build_messaging_link(raw_phone: &str, text: &str) -> String {
    LinkPolicy::shared().messaging_link(raw_phone, text)
}

/// Build a payment deep-link using the default policy.
pub fn build_payment_link(
    payee_id: &str,
    payee_name: Option<&str>,
    amount: impl Into<Amount>,
    note: &str,
) -> String {
    LinkPolicy::shared().payment_link(payee_id, payee_name, amount, note)
}

/// Validate a payee id against the default policy's handle list.
pub fn is_valid_payee_id<'a>(id: impl Into<Option<&'a str>>) -> bool {
    LinkPolicy::shared().is_valid_payee_id(id)
}
