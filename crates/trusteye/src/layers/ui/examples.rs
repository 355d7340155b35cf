pub(crate) struct Example {
    pub(crate) key: &'static str,
    pub(crate) label: &'static str,
    pub(crate) text: &'static str,
    pub(crate) url: &'static str,
}

/// Demo inputs, bound to F1..F3 in the scanner view.
pub(crate) const EXAMPLES: [Example; 3] = [
    Example {
        key: "phishing",
        label: "Phishing email",
        text: "URGENT SECURITY ALERT! Your account will be suspended in 24 hours due to suspicious activity. Click here immediately to verify your identity and avoid account closure.",
        url: "http://secure-bank-verify.fake-domain.com/urgent-login",
    },
    Example {
        key: "suspicious-url",
        label: "Suspicious URL",
        text: "",
        url: "http://192.168.1.100/urgent-verify/login.php",
    },
    Example {
        key: "safe",
        label: "Safe message",
        text: "Thank you for your recent purchase from Amazon. Your order has been shipped and will arrive within 2-3 business days. Track your package in your account.",
        url: "https://amazon.com/your-orders",
    },
];

pub(crate) fn find_example(key: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|example| example.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_keys() {
        assert!(find_example("phishing").is_some());
        assert_eq!(find_example("suspicious-url").map(|e| e.text), Some(""));
        assert!(find_example("unknown").is_none());
    }
}
