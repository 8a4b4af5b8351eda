use crate::types::{Param, ShareState, View};
use std::collections::HashSet;
use std::str::FromStr;
use url::form_urlencoded;

/// Parse a numeric field, falling back to 0 for anything that is not a
/// plain non-negative integer.
fn decode_number<T: FromStr + Default>(param: Param, value: &str) -> T {
    match value.trim().parse() {
        Ok(number) => number,
        Err(_) => {
            log::debug!(
                "Ignoring non-numeric value for '{}': {:?}",
                param.name(),
                value
            );
            T::default()
        }
    }
}

fn decode_view(value: &str) -> View {
    value.parse().unwrap_or_else(|e| {
        log::debug!("{}, falling back to composition mode", e);
        View::None
    })
}

/// Decode a query string into a share state.
///
/// Accepts the query with or without its leading `?`. Unknown parameters
/// are skipped, and when a parameter repeats only its first value counts.
/// Malformed values decode to the field default; this never fails.
pub fn decode(query: &str) -> ShareState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut builder = ShareState::builder();
    let mut seen = HashSet::new();

    for (name, value) in form_urlencoded::parse(query.as_bytes()) {
        let param = match Param::from_name(&name) {
            Some(p) => p,
            None => {
                log::debug!("Skipping unrecognized query parameter '{}'", name);
                continue;
            }
        };
        if !seen.insert(param) {
            continue;
        }

        builder = match param {
            Param::View => builder.view(decode_view(&value)),
            Param::Item => builder.item_id(decode_number(param, &value)),
            Param::Message => builder.message(value),
            Param::Payee => builder.payee_id(value),
            Param::Amount => builder.amount(decode_number(param, &value)),
            Param::RecipientName => builder.recipient_name(value),
            Param::GiftUrl => builder.gift_url(value),
            Param::SenderName => builder.sender_name(value),
        };
    }

    builder.build()
}

/// Decode the query component of a full URL.
///
/// Anything after a `#` is ignored; a URL without a query decodes to the
/// default state.
pub fn decode_url(url: &str) -> ShareState {
    let without_fragment = url.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((_, query)) => decode(query),
        None => ShareState::default(),
    }
}
