//! The "send" step of the two sender flows.
//!
//! A sister sends a rakhi to her brother (optionally asking for a gift
//! payment); a brother sends wishes back (optionally with a gift card
//! link). Both end in a share link wrapped into a messaging deep-link.

use crate::encode::encode;
use crate::policy::LinkPolicy;
use crate::types::{Amount, ShareState, View};

/// Transaction note of the payment requested with a rakhi.
pub const RAKHI_PAYMENT_NOTE: &str = "Rakhi Gift";

/// What the sender's browser needs after pressing "send".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    /// Link the recipient opens to see the reveal.
    pub share_url: String,
    /// Payment deep-link included in the message, if one was requested.
    pub payment_link: Option<String>,
    /// Message text prefilled in the messaging app.
    pub text: String,
    /// Messaging deep-link to open.
    pub messaging_link: String,
}

/// Input of the rakhi flow.
#[derive(Debug, Clone, Default)]
pub struct RakhiRequest {
    pub phone: String,
    pub item_id: u32,
    pub message: String,
    /// Shown to the brother as the sender of the rakhi.
    pub sender_name: String,
    pub payee_id: String,
    pub amount: Amount,
}

/// Input of the wishes-back flow.
#[derive(Debug, Clone, Default)]
pub struct WishRequest {
    pub phone: String,
    pub recipient_name: String,
    pub message: String,
    pub gift_url: String,
}

/// Builds outbound messages for a page served at `base_url`.
#[derive(Debug, Clone)]
pub struct Composer<'a> {
    policy: &'a LinkPolicy,
    base_url: String,
}

impl<'a> Composer<'a> {
    pub fn new(policy: &'a LinkPolicy, base_url: impl Into<String>) -> Self {
        Composer {
            policy,
            base_url: base_url.into(),
        }
    }

    /// Compose the rakhi invitation.
    ///
    /// The payment request is carried only when the payee id is valid and
    /// the amount is non-zero; otherwise both are left out of the link and
    /// the text.
    pub fn send_rakhi(&self, request: &RakhiRequest) -> Outbound {
        let payee_id = request.payee_id.trim();
        let amount = request.amount.whole_units();
        let wants_payment = amount > 0 && self.policy.is_valid_payee_id(payee_id);
        if !payee_id.is_empty() && !wants_payment {
            log::debug!("Dropping payment request for payee {:?}", payee_id);
        }

        let mut builder = ShareState::builder()
            .view(View::RecipientReveal)
            .item_id(request.item_id)
            .message(request.message.as_str())
            .sender_name(request.sender_name.trim());
        if wants_payment {
            builder = builder.payee_id(payee_id).amount(amount);
        }
        let share_url = encode(&builder.build(), &self.base_url);

        let payment_link = wants_payment
            .then(|| self.policy.payment_link(payee_id, None, amount, RAKHI_PAYMENT_NOTE));

        let mut text = format!(
            "Hey Bhai! I'm sending you this digital Rakhi. Open it here: {}",
            share_url
        );
        let message = request.message.trim();
        if !message.is_empty() {
            text.push_str(&format!("\n\n💌 {}", message));
        }
        if let Some(link) = &payment_link {
            text.push_str(&format!(
                "\n\n🎁 If you'd like to send your blessings (₹{}): {}",
                amount, link
            ));
        }
        text.push_str("\n\nHappy Raksha Bandhan! 🎀");

        let messaging_link = self.policy.messaging_link(&request.phone, &text);
        Outbound {
            share_url,
            payment_link,
            text,
            messaging_link,
        }
    }

    /// Compose the wishes sent back to the sister.
    pub fn send_wish(&self, request: &WishRequest) -> Outbound {
        let name = request.recipient_name.trim();
        let gift_url = request.gift_url.trim();

        let state = ShareState::builder()
            .view(View::WishReveal)
            .message(request.message.as_str())
            .recipient_name(name)
            .gift_url(gift_url)
            .build();
        let share_url = encode(&state, &self.base_url);

        let mut text = format!(
            "Hey {}! Sending you my Raksha Bandhan wishes 💖 Read here: {}",
            if name.is_empty() { "Didi" } else { name },
            share_url
        );
        if !gift_url.is_empty() {
            text.push_str(&format!("\nAnd a small gift for you: {}", gift_url));
        }

        let messaging_link = self.policy.messaging_link(&request.phone, &text);
        Outbound {
            share_url,
            payment_link: None,
            text,
            messaging_link,
        }
    }
}
