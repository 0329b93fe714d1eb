//! Card number truncation

use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// One substitution made by the sanitizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Matched text before redaction
    pub original: String,

    /// Text that replaced it
    pub redacted: String,
}

impl From<Change> for (String, String) {
    fn from(change: Change) -> Self {
        (change.original, change.redacted)
    }
}

/// Hides the middle digits of a matched number
///
/// Only ASCII digits are counted and replaced; separators and spacing pass
/// through untouched so the redacted text keeps the original layout.
#[derive(Debug, Clone, Copy)]
pub struct Redactor<'s> {
    replacement_token: &'s str,
    expose_first: usize,
    expose_last: usize,
}

impl<'s> Redactor<'s> {
    pub fn new(replacement_token: &'s str, expose_first: usize, expose_last: usize) -> Self {
        Self {
            replacement_token,
            expose_first,
            expose_last,
        }
    }

    pub fn from_settings(settings: &'s Settings) -> Self {
        Self::new(
            &settings.replacement_token,
            settings.expose_first,
            settings.expose_last,
        )
    }

    /// Redact `raw`, replacing digit `i` iff `expose_first <= i < total - expose_last`
    pub fn redact(&self, raw: &str) -> String {
        let total = raw.bytes().filter(u8::is_ascii_digit).count();
        let hidden = self.expose_first..total.saturating_sub(self.expose_last);

        let mut result = String::with_capacity(raw.len() + hidden.len() * self.replacement_token.len());
        let mut index = 0;
        for ch in raw.chars() {
            if ch.is_ascii_digit() {
                if hidden.contains(&index) {
                    result.push_str(self.replacement_token);
                } else {
                    result.push(ch);
                }
                index += 1;
            } else {
                result.push(ch);
            }
        }

        result
    }

    /// Redact `raw` and record the substitution
    pub fn change(&self, raw: &str) -> Change {
        Change {
            original: raw.to_string(),
            redacted: self.redact(raw),
        }
    }
}
