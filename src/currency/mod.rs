use std::fmt;

/// Currency label shown next to amounts. Purely cosmetic; no conversion happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyLabel(String);

impl CurrencyLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CurrencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders an amount the way it was entered: shortest round-trip form, no padding.
pub fn format_amount(amount: f64) -> String {
    amount.to_string()
}

/// Prefixes an amount with its currency label, e.g. `USD 20`.
pub fn format_labeled(label: &str, amount: f64) -> String {
    format!("{} {}", label, format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_render_without_fraction() {
        assert_eq!(format_amount(20.0), "20");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn labels_are_trimmed_but_otherwise_verbatim() {
        let label = CurrencyLabel::new("  ₹ ");
        assert_eq!(label.as_str(), "₹");
        assert_eq!(format_labeled(label.as_str(), 5.0), "₹ 5");
    }
}
