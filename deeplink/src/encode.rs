use crate::types::{Param, ShareState};
use url::form_urlencoded;

/// Wire value of one field, or `None` when the field holds its default.
fn field_value(state: &ShareState, param: Param) -> Option<String> {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    match param {
        Param::View => state.view().as_param().map(str::to_string),
        Param::Item => (state.item_id() != 0).then(|| state.item_id().to_string()),
        Param::Message => non_empty(state.message()),
        Param::Payee => non_empty(state.payee_id()),
        Param::Amount => (state.amount() != 0).then(|| state.amount().to_string()),
        Param::RecipientName => non_empty(state.recipient_name()),
        Param::GiftUrl => non_empty(state.gift_url()),
        Param::SenderName => non_empty(state.sender_name()),
    }
}

/// Encode a share state into a query string (no leading `?`).
///
/// Fields at their default are left out; an all-default state encodes to
/// an empty string. The parameter order is fixed, so equal states always
/// produce identical queries.
pub fn encode_query(state: &ShareState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for param in Param::ALL {
        if let Some(value) = field_value(state, param) {
            serializer.append_pair(param.name(), &value);
        }
    }
    serializer.finish()
}

/// Encode a share state into a link rooted at `base_url`.
///
/// `base_url` is expected to be the page origin plus path. A fragment on
/// it is dropped, and when it already carries a query the encoded fields
/// are appended to it with `&`. Returns `base_url` unchanged when there is
/// nothing to encode.
pub fn encode(state: &ShareState, base_url: &str) -> String {
    let query = encode_query(state);
    if query.is_empty() {
        return base_url.to_string();
    }

    let base = match base_url.split_once('#') {
        Some((base, _)) => {
            log::debug!("Dropping fragment from share base url");
            base
        }
        None => base_url,
    };
    match base.split_once('?') {
        Some((_, "")) => format!("{}{}", base, query),
        Some(_) if base.ends_with('&') => format!("{}{}", base, query),
        Some(_) => format!("{}&{}", base, query),
        None => format!("{}?{}", base, query),
    }
}
