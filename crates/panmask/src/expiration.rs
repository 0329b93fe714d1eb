//! Expiration date masking
//!
//! Card numbers are often followed by their expiration date
//! (`4111 1111 1111 1111 03/2015`). Spaces are line noise, so without help
//! the year would be absorbed into the digit run. Before scanning, every
//! date-like token is fenced with a boundary marker made of letters, which
//! no digit run can cross; afterwards the markers are stripped again.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use std::borrow::Cow;

/// A date preceded by whitespace. The character after the date is checked
/// separately so that it stays available to the next match.
static EXPIRATION_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s(?P<date>(?:0?[1-9]|1[0-2])[/-](?:[0-9]{4}|[0-9]{2}))").unwrap()
});

const BOUNDARY_LEN: usize = 16;

/// Per-call boundary marker around expiration dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpirationMask {
    boundary: String,
}

impl ExpirationMask {
    /// Pick a random boundary that does not already occur in `text`
    pub fn for_text(text: &str) -> Self {
        let mut rng = rand::rng();
        loop {
            let boundary: String = (0..BOUNDARY_LEN)
                .map(|_| char::from(rng.random_range(b'a'..=b'z')))
                .collect();
            if !text.contains(&boundary) {
                return Self { boundary };
            }
        }
    }

    /// The boundary marker
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Fence every expiration date in `text`
    pub fn mask<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut masked = String::new();
        let mut last = 0;

        for date in EXPIRATION_DATE_REGEX
            .captures_iter(text)
            .filter_map(|caps| caps.name("date"))
            .filter(|date| !text[date.end()..].starts_with(|c: char| c.is_ascii_digit()))
        {
            masked.push_str(&text[last..date.start()]);
            masked.push_str(&self.boundary);
            masked.push_str(date.as_str());
            masked.push_str(&self.boundary);
            last = date.end();
        }

        if last == 0 {
            return Cow::Borrowed(text);
        }
        masked.push_str(&text[last..]);
        Cow::Owned(masked)
    }

    /// Remove every boundary marker
    pub fn unmask(&self, text: &str) -> String {
        text.replace(&self.boundary, "")
    }
}
