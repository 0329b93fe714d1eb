//! Card number scanner and sanitizer
//!
//! One regex pass finds digit runs that tolerate short bursts of "line
//! noise" (spaces, dashes, stars, ...) between digits. Each run is turned
//! into a call-local [`Candidate`], validated, and either truncated or left
//! as is. Repetitions in the pattern are fixed-width, and the `regex` crate
//! matches in linear time, so spacing-heavy input cannot blow up the scan.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::config::{Settings, SettingsOverride};
use crate::detector::{Candidate, CandidateValidator, LINE_NOISE_CHAR, MAX_LINE_NOISE};
use crate::expiration::ExpirationMask;
use crate::redactor::{Change, Redactor};
use crate::tracking::{self, TrackingNumberValidator};

/// Minimum and maximum number of noise-separated digits after the first one
const MIN_SEPARATED_DIGITS: usize = 10;
const MAX_SEPARATED_DIGITS: usize = 30;

/// Digit runs, optionally preceded by something that marks them as part of a
/// URL, path or phone number. Only non-capturing groups are repeated.
static CANDIDATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?P<scheme>&#43;|\+|/|[A-Za-z][A-Za-z0-9+.\-]{{0,9}}://[^\s>]*)?[0-9](?:{noise}{{0,{max_noise}}}[0-9]){{{min},{max}}}",
        noise = LINE_NOISE_CHAR,
        max_noise = MAX_LINE_NOISE,
        min = MIN_SEPARATED_DIGITS,
        max = MAX_SEPARATED_DIGITS,
    );
    Regex::new(&pattern).unwrap()
});

/// Result of a sanitize call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// At least one number was truncated; the buffer holds the redacted text
    Redacted,

    /// Same as `Redacted`, with every substitution listed in order
    Changes(Vec<Change>),

    /// Nothing to redact; the buffer is untouched
    Clean,

    /// Input longer than `max_input_len`; not scanned, buffer untouched
    Oversized { len: usize, limit: usize },
}

impl Outcome {
    /// True if the text was modified
    pub fn is_redacted(&self) -> bool {
        matches!(self, Outcome::Redacted | Outcome::Changes(_))
    }

    /// Substitutions, when `return_changes` was set and something changed
    pub fn changes(&self) -> Option<&[Change]> {
        match self {
            Outcome::Changes(changes) => Some(changes),
            _ => None,
        }
    }
}

/// Finds and truncates card numbers in free-form text
///
/// Holds only immutable settings and carrier validators, so one instance can
/// be shared across threads.
#[derive(Clone)]
pub struct Sanitizer {
    settings: Settings,
    tracking: Vec<Arc<dyn TrackingNumberValidator>>,
}

impl std::fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sanitizer")
            .field("settings", &self.settings)
            .field(
                "tracking",
                &self.tracking.iter().map(|v| v.carrier()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Sanitizer {
    /// Create a sanitizer with the built-in carrier validators
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            tracking: tracking::default_validators(),
        }
    }

    /// Replace the tracking number validators
    pub fn with_tracking_validators(
        mut self,
        validators: Vec<Arc<dyn TrackingNumberValidator>>,
    ) -> Self {
        self.tracking = validators;
        self
    }

    /// Instance settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Sanitize `text` in place with the instance settings
    pub fn sanitize(&self, text: &mut String) -> Outcome {
        self.sanitize_with(text, &SettingsOverride::default())
    }

    /// Sanitize `text` in place, overriding some settings for this call only
    ///
    /// `text` is only written to when something was redacted.
    pub fn sanitize_with(&self, text: &mut String, overrides: &SettingsOverride) -> Outcome {
        let settings = self.settings.merged(overrides);

        let (redacted, changes) = match self.scan(text, &settings) {
            Ok(Some(found)) => found,
            Ok(None) => return Outcome::Clean,
            Err(oversized) => return oversized,
        };

        *text = redacted;
        if settings.return_changes {
            Outcome::Changes(changes)
        } else {
            Outcome::Redacted
        }
    }

    /// Sanitize a borrowed string
    ///
    /// Returns the redacted copy, or `None` when there was nothing to redact
    /// (including oversized input).
    pub fn sanitize_str(&self, text: &str) -> Option<String> {
        match self.scan(text, &self.settings) {
            Ok(Some((redacted, _))) => Some(redacted),
            _ => None,
        }
    }

    /// Sanitize raw bytes, repairing invalid UTF-8 first
    ///
    /// Invalid sequences become U+FFFD. Returns `None` when there was
    /// nothing to redact, in which case the caller's bytes are still the
    /// authoritative value.
    pub fn sanitize_bytes(&self, bytes: &[u8]) -> Option<String> {
        let text = String::from_utf8_lossy(bytes);
        if let Cow::Owned(_) = text {
            debug!("Replaced invalid UTF-8 sequences before scanning");
        }
        self.sanitize_str(&text)
    }

    /// Scan `text`, returning the redacted text and changes if anything was
    /// redacted. `Err` carries the oversize outcome.
    fn scan(
        &self,
        text: &str,
        settings: &Settings,
    ) -> Result<Option<(String, Vec<Change>)>, Outcome> {
        if let Some(len) = oversized_len(text, settings.max_input_len) {
            warn!(
                len,
                limit = settings.max_input_len,
                "Input too long to scan for card numbers, leaving it unredacted"
            );
            return Err(Outcome::Oversized {
                len,
                limit: settings.max_input_len,
            });
        }

        let mask = ExpirationMask::for_text(text);
        let masked = mask.mask(text);

        let validator = CandidateValidator::new(settings, &self.tracking);
        let redactor = Redactor::from_settings(settings);
        let mut changes = Vec::new();

        let scanned = CANDIDATE_REGEX.replace_all(&masked, |caps: &Captures<'_>| {
            let Some(m) = caps.get(0) else {
                return String::new();
            };

            if caps.name("scheme").is_some() {
                trace!("Skipping digit run inside a URL, path or phone number");
                return m.as_str().to_string();
            }

            let candidate = Candidate::from_range(&masked, m.start(), m.end());
            match validator.validate(&candidate) {
                Ok(()) => {
                    let change = redactor.change(candidate.raw);
                    let redacted = change.redacted.clone();
                    changes.push(change);
                    redacted
                }
                Err(rejection) => {
                    trace!(?rejection, "Candidate left unredacted");
                    m.as_str().to_string()
                }
            }
        });

        if changes.is_empty() {
            return Ok(None);
        }

        debug!(count = changes.len(), "Redacted card numbers");
        Ok(Some((mask.unmask(&scanned), changes)))
    }
}

/// Character count of `text` if it exceeds `limit`
fn oversized_len(text: &str, limit: usize) -> Option<usize> {
    // A string can't hold more characters than bytes
    if text.len() <= limit {
        return None;
    }
    let len = text.chars().count();
    (len > limit).then_some(len)
}
