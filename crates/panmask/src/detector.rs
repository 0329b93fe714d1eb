//! Candidate validation
//!
//! A [`Candidate`] is one digit run found by the scanner, together with the
//! text around it. It borrows from the text being sanitized and lives only
//! for the duration of a single match, so nothing about an in-flight match
//! is ever stored on the sanitizer.

mod flanking;
mod grouping;

pub use flanking::{POSTFIX_KEYWORDS, PREFIX_KEYWORDS, valid_context};
pub use grouping::{group_lengths, valid_grouping};

use std::sync::Arc;
use tracing::trace;

use crate::company::{self, CardCompany};
use crate::config::Settings;
use crate::luhn;
use crate::tracking::{self, TrackingNumberValidator};

/// A single line-noise character: anything tolerated between two digits
pub(crate) const LINE_NOISE_CHAR: &str = r"[^A-Za-z0-9_\n,()/:;<>&.]";

/// Longest run of line noise tolerated between two digits
pub(crate) const MAX_LINE_NOISE: usize = 5;

/// Unvalidated digit run plus its surroundings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Matched text, digits and line noise
    pub raw: &'a str,

    /// ASCII digits of `raw`, in order
    pub digits: String,

    /// Text before the match
    pub prefix: &'a str,

    /// Text after the match
    pub postfix: &'a str,
}

impl<'a> Candidate<'a> {
    pub fn new(raw: &'a str, prefix: &'a str, postfix: &'a str) -> Self {
        let digits = raw.chars().filter(char::is_ascii_digit).collect();
        Self {
            raw,
            digits,
            prefix,
            postfix,
        }
    }

    /// Build a candidate from the byte range `start..end` of `text`
    pub fn from_range(text: &'a str, start: usize, end: usize) -> Self {
        Self::new(&text[start..end], &text[..start], &text[end..])
    }
}

/// Why a candidate was left unredacted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Failed the Luhn checksum
    Checksum,

    /// Glued to letters or digits without a card keyword
    Context,

    /// No issuer pattern matches the digits
    Prefix,

    /// Digit clusters don't follow the issuer's printed layout
    Grouping,

    /// Validates as a shipping tracking number
    TrackingNumber(&'static str),
}

/// Runs every enabled check against a candidate
pub struct CandidateValidator<'s> {
    settings: &'s Settings,
    tracking: &'s [Arc<dyn TrackingNumberValidator>],
}

impl<'s> CandidateValidator<'s> {
    pub fn new(settings: &'s Settings, tracking: &'s [Arc<dyn TrackingNumberValidator>]) -> Self {
        Self { settings, tracking }
    }

    /// Accept or reject a candidate
    ///
    /// Checks run cheapest first: checksum, context, then the numeric checks
    /// (issuer prefix, grouping, tracking numbers last).
    pub fn validate(&self, candidate: &Candidate<'_>) -> Result<(), Rejection> {
        if !luhn::is_valid(&candidate.digits) {
            return Err(Rejection::Checksum);
        }

        if self.settings.parse_flanking && !valid_context(candidate.prefix, candidate.postfix) {
            return Err(Rejection::Context);
        }

        self.validate_numbers(candidate)
    }

    fn validate_numbers(&self, candidate: &Candidate<'_>) -> Result<(), Rejection> {
        if !company::valid_prefix(&candidate.digits) {
            return Err(Rejection::Prefix);
        }

        if self.settings.use_groupings {
            let company = CardCompany::detect(&candidate.digits);
            if !valid_grouping(candidate.raw, company) {
                return Err(Rejection::Grouping);
            }
        }

        if self.settings.exclude_tracking_numbers {
            if let Some(validator) = tracking::find_carrier(self.tracking, &candidate.digits) {
                trace!(carrier = validator.carrier(), "Candidate matches a tracking number");
                return Err(Rejection::TrackingNumber(validator.carrier()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
