//! What a recipient sees, derived from the decoded share state.

use crate::compose::RAKHI_PAYMENT_NOTE;
use crate::decode::decode;
use crate::escape::encode_component;
use crate::policy::LinkPolicy;
use crate::types::{ShareState, View};

pub const DEFAULT_MESSAGE: &str = "Happy Raksha Bandhan!";
pub const DEFAULT_WISH_NAME: &str = "Sister";

const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/?size=240x240&data=";

/// Image asset of a decorative rakhi.
pub fn rakhi_image_path(item_id: u32) -> String {
    format!("/rakhi{}.png", item_id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RakhiReveal {
    pub image_path: String,
    pub message: String,
    /// Sender's name, shown as "From: ..." when present.
    pub from: Option<String>,
    pub payee_id: Option<String>,
    pub amount: Option<u64>,
    pub payment_link: Option<String>,
    pub qr_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishReveal {
    pub message: String,
    pub name: String,
    pub gift_url: Option<String>,
}

/// The presentation selected by a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reveal {
    /// No reveal; the sender composes a new card.
    Compose,
    Rakhi(RakhiReveal),
    Wish(WishReveal),
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl Reveal {
    pub fn from_state(state: &ShareState, policy: &LinkPolicy) -> Self {
        match state.view() {
            View::None => Reveal::Compose,
            View::RecipientReveal => Reveal::Rakhi(rakhi_reveal(state, policy)),
            View::WishReveal => Reveal::Wish(WishReveal {
                message: or_default(state.message(), DEFAULT_MESSAGE),
                name: or_default(state.recipient_name(), DEFAULT_WISH_NAME),
                gift_url: non_empty(state.gift_url()),
            }),
        }
    }

    pub fn from_query(query: &str, policy: &LinkPolicy) -> Self {
        Self::from_state(&decode(query), policy)
    }
}

fn rakhi_reveal(state: &ShareState, policy: &LinkPolicy) -> RakhiReveal {
    let amount = (state.amount() > 0).then_some(state.amount());
    // a hand-edited link may carry anything in `upi`
    let payee_id = Some(state.payee_id()).filter(|id| policy.is_valid_payee_id(*id));

    let payment_link =
        payee_id.map(|id| policy.payment_link(id, None, amount, RAKHI_PAYMENT_NOTE));
    let qr_image_url = payment_link
        .as_deref()
        .map(|link| format!("{}{}", QR_SERVICE, encode_component(link)));

    RakhiReveal {
        image_path: rakhi_image_path(state.item_id()),
        message: or_default(state.message(), DEFAULT_MESSAGE),
        from: non_empty(state.sender_name()),
        payee_id: payee_id.map(str::to_string),
        amount,
        payment_link,
        qr_image_url,
    }
}
