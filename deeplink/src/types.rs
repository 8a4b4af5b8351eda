use crate::error::{LinkError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Query parameter names of the share-link wire contract.
///
/// Names must never be reused for another field: old links keep decoding
/// as long as every name here keeps its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    View,
    Item,
    Message,
    Payee,
    Amount,
    RecipientName,
    GiftUrl,
    SenderName,
}

impl Param {
    /// All parameters in encoding order.
    pub const ALL: [Param; 8] = [
        Param::View,
        Param::Item,
        Param::Message,
        Param::Payee,
        Param::Amount,
        Param::RecipientName,
        Param::GiftUrl,
        Param::SenderName,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Param::View => "view",
            Param::Item => "rakhi",
            Param::Message => "m",
            Param::Payee => "upi",
            Param::Amount => "am",
            Param::RecipientName => "n",
            Param::GiftUrl => "g",
            Param::SenderName => "sn",
        }
    }

    /// Resolve a parameter name, including aliases written by older links.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "view" => Some(Param::View),
            "rakhi" | "r" => Some(Param::Item),
            "m" => Some(Param::Message),
            "upi" => Some(Param::Payee),
            "am" => Some(Param::Amount),
            "n" => Some(Param::RecipientName),
            "g" => Some(Param::GiftUrl),
            "sn" => Some(Param::SenderName),
            _ => None,
        }
    }
}

/// Which presentation a share link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// No reveal: the page opens in sender-composition mode.
    #[default]
    None,
    /// The rakhi reveal shown to the brother.
    RecipientReveal,
    /// The wishes-back reveal shown to the sister.
    WishReveal,
}

impl View {
    /// Wire value for this view, `None` for the composition mode.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            View::None => None,
            View::RecipientReveal => Some("brother"),
            View::WishReveal => Some("sister"),
        }
    }
}

impl FromStr for View {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "brother" | "rakhi" => Ok(View::RecipientReveal),
            "sister" => Ok(View::WishReveal),
            _ => Err(LinkError::UnknownView(s.to_string())),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_param().unwrap_or("none"))
    }
}

/// The flat record carried through a share link.
///
/// Instances are immutable: build one with [`ShareState::builder`] or
/// obtain one from [`decode`](crate::decode::decode). Empty strings and
/// zero numbers are the defaults and are never written to a link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShareState {
    view: View,
    item_id: u32,
    message: String,
    payee_id: String,
    amount: u64,
    recipient_name: String,
    gift_url: String,
    sender_name: String,
}

impl ShareState {
    pub fn builder() -> ShareStateBuilder {
        ShareStateBuilder::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn item_id(&self) -> u32 {
        self.item_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payee_id(&self) -> &str {
        &self.payee_id
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    pub fn gift_url(&self) -> &str {
        &self.gift_url
    }

    /// Name of the sister who sent the rakhi.
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// True when every field holds its default.
    pub fn is_default(&self) -> bool {
        *self == ShareState::default()
    }
}

/// Builder for a [`ShareState`]. Unset fields keep their defaults.
#[derive(Debug, Default)]
pub struct ShareStateBuilder {
    state: ShareState,
}

impl ShareStateBuilder {
    pub fn view(mut self, view: View) -> Self {
        self.state.view = view;
        self
    }

    pub fn item_id(mut self, item_id: u32) -> Self {
        self.state.item_id = item_id;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.state.message = message.into();
        self
    }

    pub fn payee_id(mut self, payee_id: impl Into<String>) -> Self {
        self.state.payee_id = payee_id.into();
        self
    }

    pub fn amount(mut self, amount: u64) -> Self {
        self.state.amount = amount;
        self
    }

    pub fn recipient_name(mut self, recipient_name: impl Into<String>) -> Self {
        self.state.recipient_name = recipient_name.into();
        self
    }

    pub fn gift_url(mut self, gift_url: impl Into<String>) -> Self {
        self.state.gift_url = gift_url.into();
        self
    }

    pub fn sender_name(mut self, sender_name: impl Into<String>) -> Self {
        self.state.sender_name = sender_name.into();
        self
    }

    pub fn build(self) -> ShareState {
        self.state
    }
}

/// A payment amount as the sender typed or picked it.
///
/// Renders to a bare decimal string, or to nothing when the amount is zero,
/// negative, not finite or not a number at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Amount {
    #[default]
    None,
    Whole(u64),
    Decimal(f64),
    Text(String),
}

impl Amount {
    /// The `am` parameter value, if the amount should be sent at all.
    pub fn to_param(&self) -> Option<String> {
        match self {
            Amount::None | Amount::Whole(0) => None,
            Amount::Whole(value) => Some(value.to_string()),
            Amount::Decimal(value) => render_decimal(*value),
            Amount::Text(text) => render_text(text),
        }
    }

    /// Whole units of the amount, 0 when it does not render.
    pub fn whole_units(&self) -> u64 {
        match self {
            Amount::None => 0,
            Amount::Whole(value) => *value,
            Amount::Decimal(value) => truncate(*value),
            Amount::Text(text) => match render_text(text) {
                Some(digits) => digits
                    .parse::<u64>()
                    .ok()
                    .or_else(|| digits.parse::<f64>().ok().map(truncate))
                    .unwrap_or(u64::MAX),
                None => 0,
            },
        }
    }
}

fn truncate(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        // `as` saturates at u64::MAX
        value.trunc() as u64
    } else {
        0
    }
}

fn render_decimal(value: f64) -> Option<String> {
    if value.is_finite() && value > 0.0 {
        Some(value.to_string())
    } else {
        None
    }
}

/// Currency markers accepted in front of a typed amount, matched
/// case-insensitively. Longer spellings come first.
const CURRENCY_PREFIXES: &[&str] = &["₹", "inr", "rs.", "rs"];

/// A plain decimal: digits, optionally followed by a fractional part.
static PLAIN_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("decimal pattern is valid"));

fn strip_currency_prefix(text: &str) -> &str {
    for prefix in CURRENCY_PREFIXES {
        let matched = text
            .get(..prefix.len())
            .map_or(false, |head| head.eq_ignore_ascii_case(prefix));
        if matched {
            return text[prefix.len()..].trim_start();
        }
    }
    text
}

/// Strip a currency marker and digit separators, then render what is left.
///
/// Anything that is not a plain decimal afterwards (signs, exponents,
/// stray letters) renders to nothing.
fn render_text(text: &str) -> Option<String> {
    let text = strip_currency_prefix(text.trim());
    let text = text.strip_suffix("/-").unwrap_or(text);
    let cleaned: String = text
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if !PLAIN_DECIMAL.is_match(&cleaned) {
        return None;
    }
    if !cleaned.contains('.') {
        let digits = cleaned.trim_start_matches('0');
        return (!digits.is_empty()).then(|| digits.to_string());
    }
    cleaned.parse::<f64>().ok().and_then(render_decimal)
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount::Whole(value)
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Amount::Whole(u64::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        u64::try_from(value).map_or(Amount::None, Amount::Whole)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount::from(i64::from(value))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Decimal(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::Text(value)
    }
}

impl<T: Into<Amount>> From<Option<T>> for Amount {
    fn from(value: Option<T>) -> Self {
        value.map_or(Amount::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_names() {
        for param in Param::ALL {
            assert_eq!(Param::from_name(param.name()), Some(param));
        }
        assert_eq!(Param::from_name("r"), Some(Param::Item));
        assert_eq!(Param::from_name("sn"), Some(Param::SenderName));
        assert_eq!(Param::from_name("utm_source"), None);
    }

    #[test]
    fn test_view_from_str() {
        assert_eq!("brother".parse::<View>().unwrap(), View::RecipientReveal);
        assert_eq!("rakhi".parse::<View>().unwrap(), View::RecipientReveal);
        assert_eq!("sister".parse::<View>().unwrap(), View::WishReveal);
        assert!("cousin".parse::<View>().is_err());
    }

    #[test]
    fn test_view_display() {
        assert_eq!(View::None.to_string(), "none");
        assert_eq!(View::RecipientReveal.to_string(), "brother");
        assert_eq!(View::WishReveal.to_string(), "sister");
    }

    #[test]
    fn test_builder_defaults() {
        let state = ShareState::builder().build();
        assert!(state.is_default());
        assert_eq!(state.view(), View::None);
        assert_eq!(state.item_id(), 0);
        assert_eq!(state.message(), "");
    }

    #[test]
    fn test_builder_sets_fields() {
        let state = ShareState::builder()
            .view(View::RecipientReveal)
            .item_id(12)
            .message("Happy Rakhi")
            .payee_id("rahul@paytm")
            .amount(501)
            .sender_name("Asha")
            .build();

        assert!(!state.is_default());
        assert_eq!(state.sender_name(), "Asha");
        assert_eq!(state.item_id(), 12);
        assert_eq!(state.payee_id(), "rahul@paytm");
        assert_eq!(state.amount(), 501);
        assert_eq!(state.recipient_name(), "");
    }

    #[test]
    fn test_amount_to_param() {
        assert_eq!(Amount::from(501u64).to_param().as_deref(), Some("501"));
        assert_eq!(Amount::from(0u64).to_param(), None);
        assert_eq!(Amount::from(-5i64).to_param(), None);
        assert_eq!(Amount::from(12.5).to_param().as_deref(), Some("12.5"));
        assert_eq!(Amount::from(101.0).to_param().as_deref(), Some("101"));
        assert_eq!(Amount::from(f64::NAN).to_param(), None);
        assert_eq!(Amount::from(f64::INFINITY).to_param(), None);
        assert_eq!(Amount::from(None::<u64>).to_param(), None);
    }

    #[test]
    fn test_amount_text() {
        assert_eq!(Amount::from("₹1,001").to_param().as_deref(), Some("1001"));
        assert_eq!(Amount::from(" 0251 ").to_param().as_deref(), Some("251"));
        assert_eq!(Amount::from("12.50").to_param().as_deref(), Some("12.5"));
        assert_eq!(Amount::from("000").to_param(), None);
        assert_eq!(Amount::from("abc").to_param(), None);
        assert_eq!(Amount::from("").to_param(), None);
        assert_eq!(Amount::from("-20").to_param(), None);
        assert_eq!(Amount::from("1.2.3").to_param(), None);
        assert_eq!(Amount::from("500/-").to_param().as_deref(), Some("500"));
    }

    #[test]
    fn test_amount_text_currency_prefixes() {
        assert_eq!(Amount::from("Rs. 500").to_param().as_deref(), Some("500"));
        assert_eq!(Amount::from("Rs.1,001").to_param().as_deref(), Some("1001"));
        assert_eq!(Amount::from("rs 21").to_param().as_deref(), Some("21"));
        assert_eq!(Amount::from("INR 251").to_param().as_deref(), Some("251"));
        assert_eq!(Amount::from("inr 12.75").to_param().as_deref(), Some("12.75"));
        assert_eq!(Amount::from("₹ 1,00,001").to_param().as_deref(), Some("100001"));
        assert_eq!(Amount::from("Rs. 500").whole_units(), 500);
        assert_eq!(Amount::from("Rs.1,001").whole_units(), 1001);
    }

    #[test]
    fn test_amount_text_rejects_non_decimal() {
        assert_eq!(Amount::from("1e3").to_param(), None);
        assert_eq!(Amount::from("1e3").whole_units(), 0);
        assert_eq!(Amount::from("USD 5").to_param(), None);
        assert_eq!(Amount::from("₹-5").to_param(), None);
        assert_eq!(Amount::from(".5").to_param(), None);
        assert_eq!(Amount::from("5.").to_param(), None);
        assert_eq!(Amount::from("Rs.").to_param(), None);
        assert_eq!(Amount::from("١٢").to_param(), None);
        assert_eq!(Amount::from("١٢").whole_units(), 0);
    }

    #[test]
    fn test_amount_whole_units() {
        assert_eq!(Amount::from(151u32).whole_units(), 151);
        assert_eq!(Amount::from(99.9).whole_units(), 99);
        assert_eq!(Amount::from("₹ 2,501").whole_units(), 2501);
        assert_eq!(Amount::from("abc").whole_units(), 0);
        assert_eq!(Amount::None.whole_units(), 0);
    }
}
