use crate::escape::encode_payment_value;
use crate::policy::LinkPolicy;
use crate::types::Amount;

impl LinkPolicy {
    /// Build a payment deep-link (`upi://pay?pa=..&pn=..&am=..&tn=..`).
    ///
    /// `payee_id` is written as given; validate it with
    /// [`is_valid_payee_id`](LinkPolicy::is_valid_payee_id) first. The
    /// payee name and amount are left out when empty, and an empty note is
    /// replaced by `fallback_note`.
    pub fn payment_link(
        &self,
        payee_id: &str,
        payee_name: Option<&str>,
        amount: impl Into<Amount>,
        note: &str,
    ) -> String {
        let mut params: Vec<(&str, String)> = vec![("pa", payee_id.to_string())];

        if let Some(name) = payee_name.filter(|n| !n.is_empty()) {
            params.push(("pn", name.to_string()));
        }
        if let Some(am) = amount.into().to_param() {
            params.push(("am", am));
        }
        if let Some(currency) = self.currency.as_deref().filter(|c| !c.is_empty()) {
            params.push(("cu", currency.to_string()));
        }
        let note = if note.trim().is_empty() {
            self.fallback_note.as_str()
        } else {
            note
        };
        params.push(("tn", note.to_string()));

        let query = params
            .iter()
            .map(|(name, value)| format!("{}={}", name, encode_payment_value(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}://pay?{}", self.payment_scheme, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_link_minimal() {
        let link = LinkPolicy::default().payment_link("rahul@paytm", None, Amount::None, "");
        assert_eq!(link, "upi://pay?pa=rahul@paytm&tn=Gift");
    }

    #[test]
    fn test_payment_link_omits_empty_name() {
        let link = LinkPolicy::default().payment_link("rahul@paytm", Some(""), 501u64, "");
        assert_eq!(link, "upi://pay?pa=rahul@paytm&am=501&tn=Gift");
        assert!(!link.contains("pn="));
    }

    #[test]
    fn test_payment_link_full() {
        let link = LinkPolicy::default().payment_link(
            "asha@okaxis",
            Some("Asha K"),
            "₹1,001",
            "Rakhi Gift",
        );
        assert_eq!(
            link,
            "upi://pay?pa=asha@okaxis&pn=Asha%20K&am=1001&tn=Rakhi%20Gift"
        );
    }

    #[test]
    fn test_payment_link_zero_and_garbage_amounts() {
        let policy = LinkPolicy::default();
        for amount in [Amount::Whole(0), Amount::from("abc"), Amount::from(-3.0)] {
            let link = policy.payment_link("rahul@paytm", None, amount, "note");
            assert!(!link.contains("am="), "{}", link);
        }
    }

    #[test]
    fn test_payment_link_currency_prefixed_text() {
        let policy = LinkPolicy::default();
        assert_eq!(
            policy.payment_link("rahul@paytm", None, "Rs. 500", ""),
            "upi://pay?pa=rahul@paytm&am=500&tn=Gift"
        );
        assert_eq!(
            policy.payment_link("rahul@paytm", None, "INR 251", ""),
            "upi://pay?pa=rahul@paytm&am=251&tn=Gift"
        );
        assert_eq!(
            policy.payment_link("rahul@paytm", None, "1e3", ""),
            "upi://pay?pa=rahul@paytm&tn=Gift"
        );
    }

    #[test]
    fn test_payment_link_currency_and_scheme() {
        let policy = LinkPolicy {
            payment_scheme: "testpay".to_string(),
            currency: Some("INR".to_string()),
            ..LinkPolicy::default()
        };
        let link = policy.payment_link("rahul@paytm", None, 12.5, "  ");
        assert_eq!(link, "testpay://pay?pa=rahul@paytm&am=12.5&cu=INR&tn=Gift");
    }

    #[test]
    fn test_payment_link_escapes_reserved() {
        let link = LinkPolicy::default().payment_link("x&y@paytm", None, Amount::None, "a=b");
        assert_eq!(link, "upi://pay?pa=x%26y@paytm&tn=a%3Db");
    }
}
