use crate::policy::LinkPolicy;
use once_cell::sync::Lazy;
use regex::Regex;

/// `localpart@handle`, a single `@` and no spaces.
static PAYEE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9.-]+$").expect("payee id pattern is valid")
});

impl LinkPolicy {
    /// Check whether `id` looks like a payee id a payment app will accept.
    ///
    /// The id must have the `localpart@handle` shape and the handle must
    /// contain one of `payee_handles` (case-sensitive). The shape alone
    /// would accept plain e-mail addresses.
    pub fn is_valid_payee_id<'a>(&self, id: impl Into<Option<&'a str>>) -> bool {
        let id = match id.into() {
            Some(id) => id,
            None => return false,
        };
        if !PAYEE_SHAPE.is_match(id) {
            log::debug!("Payee id {:?} is not of the form name@handle", id);
            return false;
        }
        let handle = match id.split_once('@') {
            Some((_, handle)) => handle,
            None => return false,
        };
        let known = self
            .payee_handles
            .iter()
            .any(|fragment| !fragment.is_empty() && handle.contains(fragment.as_str()));
        if !known {
            log::debug!("Payee handle '{}' is not a known payment handle", handle);
        }
        known
    }
}
