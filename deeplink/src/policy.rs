use crate::error::{LinkError, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;

/// Payment handle fragments recognized by the common payment apps.
pub const DEFAULT_PAYEE_HANDLES: &[&str] = &[
    "paytm",
    "phonepe",
    "ybl",
    "okaxis",
    "okicici",
    "okhdfcbank",
    "oksbi",
    "okbizaxis",
    "ibl",
    "axl",
    "upi",
    "gpay",
    "amazonpay",
];

static DEFAULT_POLICY: Lazy<LinkPolicy> = Lazy::new(LinkPolicy::default);

/// Deployment-specific values consulted by the link builders.
///
/// Every field has a default, so a policy file only needs to name the
/// values it overrides:
///
/// ```toml
/// default_country_code = "44"
/// local_number_len = 10
/// payee_handles = ["paytm", "okaxis", "mybank"]
/// currency = "INR"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkPolicy {
    /// Messaging endpoint the outbound link points at.
    pub messaging_base: String,
    /// Calling code prefixed to local numbers.
    pub default_country_code: String,
    /// Digit count of a number written without its calling code.
    pub local_number_len: usize,
    /// Scheme of the payment deep-link, without `://`.
    pub payment_scheme: String,
    /// Fragments one of which a payee handle must contain.
    pub payee_handles: Vec<String>,
    /// Transaction note used when the caller gives none.
    pub fallback_note: String,
    /// Currency code written as `cu`, omitted when unset.
    pub currency: Option<String>,
}

impl Default for LinkPolicy {
    fn default() -> Self {
        LinkPolicy {
            messaging_base: "https://api.whatsapp.com/send".to_string(),
            default_country_code: "91".to_string(),
            local_number_len: 10,
            payment_scheme: "upi".to_string(),
            payee_handles: DEFAULT_PAYEE_HANDLES
                .iter()
                .map(|h| h.to_string())
                .collect(),
            fallback_note: "Gift".to_string(),
            currency: None,
        }
    }
}

impl LinkPolicy {
    /// The process-wide default policy.
    pub fn shared() -> &'static LinkPolicy {
        &DEFAULT_POLICY
    }

    /// Parse a policy from TOML text and validate it.
    pub fn from_toml(text: &str) -> Result<Self> {
        let policy: LinkPolicy = toml::from_str(text)?;
        policy.validate()?;
        log::debug!(
            "Loaded link policy: country code {}, {} payee handles",
            policy.default_country_code,
            policy.payee_handles.len()
        );
        Ok(policy)
    }

    /// Read and parse a policy file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Add handle fragments to the payee allow-list, skipping duplicates.
    pub fn with_payee_handles<I, S>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for handle in handles {
            let handle = handle.into();
            if !handle.is_empty() && !self.payee_handles.contains(&handle) {
                self.payee_handles.push(handle);
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.messaging_base.trim().is_empty() {
            return Err(LinkError::InvalidPolicy(
                "messaging_base must not be empty".to_string(),
            ));
        }
        if self.messaging_base.contains(&['?', '#'][..]) {
            return Err(LinkError::InvalidPolicy(format!(
                "messaging_base must not carry a query or fragment, got '{}'",
                self.messaging_base
            )));
        }
        if !self.default_country_code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LinkError::InvalidPolicy(format!(
                "default_country_code must contain digits only, got '{}'",
                self.default_country_code
            )));
        }
        let scheme_ok = !self.payment_scheme.is_empty()
            && self
                .payment_scheme
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'));
        if !scheme_ok {
            return Err(LinkError::InvalidPolicy(format!(
                "payment_scheme is not a valid URI scheme: '{}'",
                self.payment_scheme
            )));
        }
        if self.payee_handles.iter().all(|h| h.is_empty()) {
            return Err(LinkError::InvalidPolicy(
                "payee_handles must name at least one handle".to_string(),
            ));
        }
        Ok(())
    }
}
