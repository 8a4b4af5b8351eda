use crate::escape::encode_component;
use crate::policy::LinkPolicy;

impl LinkPolicy {
    /// Reduce a phone number to the digits the messaging service expects.
    ///
    /// Non-digits are dropped and a local number (exactly
    /// `local_number_len` digits) gets the default calling code prefixed.
    /// Returns `None` when no digits are left.
    pub fn normalize_phone(&self, raw_phone: &str) -> Option<String> {
        let digits: String = raw_phone.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        if digits.len() == self.local_number_len {
            return Some(format!("{}{}", self.default_country_code, digits));
        }
        Some(digits)
    }

    /// Build a messaging deep-link with prefilled `text`.
    ///
    /// Without a usable phone number the link opens the share sheet of the
    /// messaging app so the sender picks the recipient there.
    pub fn messaging_link(&self, raw_phone: &str, text: &str) -> String {
        let text = encode_component(text);
        match self.normalize_phone(raw_phone) {
            Some(phone) => format!("{}?phone={}&text={}", self.messaging_base, phone, text),
            None => {
                log::debug!("No destination digits in phone input, building share-only link");
                format!("{}?text={}", self.messaging_base, text)
            }
        }
    }
}
