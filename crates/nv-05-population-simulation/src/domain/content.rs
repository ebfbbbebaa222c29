//! # Adversarial Content
//!
//! The three spam templates adversarial actors post. Each embeds a generated
//! URI.

/// Spam/phishing template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpamTemplate {
    /// Stock pump.
    StockPump,
    /// Phishing link.
    FreeBitcoin,
    /// Urgency / account suspension.
    AccountSuspension,
}

impl SpamTemplate {
    /// All templates, in draw order.
    pub const ALL: [SpamTemplate; 3] = [
        SpamTemplate::StockPump,
        SpamTemplate::FreeBitcoin,
        SpamTemplate::AccountSuspension,
    ];

    /// Fill the template with `uri`.
    pub fn render(self, uri: &str) -> String {
        match self {
            SpamTemplate::StockPump => format!("BUY CHEAP STOCKS! {uri}"),
            SpamTemplate::FreeBitcoin => format!("CLICK HERE FOR FREE BITCOIN: {uri}"),
            SpamTemplate::AccountSuspension => {
                format!("URGENT: Your account will be suspended! {uri}")
            }
        }
    }
}
