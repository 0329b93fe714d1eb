//! Flanking text checks
//!
//! A number glued to letters or digits is more likely an ID or phone number
//! than a card, unless the adjacent word is itself a card keyword
//! (`CARD4111...`, `...1111exp`).

/// Words that may directly precede a card number
pub const PREFIX_KEYWORDS: &[&str] = &["cc", "card", "visa", "amex"];

/// Words that may directly follow a card number ("exp", "expiry", ...)
pub const POSTFIX_KEYWORDS: &[&str] = &["ex"];

fn ends_with_keyword(text: &str) -> bool {
    let bytes = text.as_bytes();
    PREFIX_KEYWORDS.iter().any(|kw| {
        bytes.len() >= kw.len() && bytes[bytes.len() - kw.len()..].eq_ignore_ascii_case(kw.as_bytes())
    })
}

fn starts_with_keyword(text: &str) -> bool {
    let bytes = text.as_bytes();
    POSTFIX_KEYWORDS
        .iter()
        .any(|kw| bytes.len() >= kw.len() && bytes[..kw.len()].eq_ignore_ascii_case(kw.as_bytes()))
}

fn valid_prefix(prefix: &str) -> bool {
    match prefix.chars().next_back() {
        None => true,
        Some(last) => !last.is_alphanumeric() || ends_with_keyword(prefix),
    }
}

fn valid_postfix(postfix: &str) -> bool {
    match postfix.chars().next() {
        None => true,
        Some(first) => !first.is_alphanumeric() || starts_with_keyword(postfix),
    }
}

/// True if both sides of a candidate are acceptable neighbors
pub fn valid_context(prefix: &str, postfix: &str) -> bool {
    valid_prefix(prefix) && valid_postfix(postfix)
}
