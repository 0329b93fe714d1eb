//! panmask: payment card number truncation
//!
//! This crate finds card-like digit runs in free-form text and truncates
//! them (first 6 / last 4 digits visible by default) for PCI-DSS friendly
//! logging and storage:
//! - Line-noise tolerant scanning with URL/phone exclusion
//! - Luhn checksum and issuer prefix/length validation
//! - Optional grouping, flanking-text and tracking-number heuristics
//! - Expiration dates kept intact next to redacted numbers
//!
//! # Example
//! ```
//! use panmask::{Outcome, Sanitizer};
//!
//! let sanitizer = Sanitizer::default();
//! let mut text = String::from("card 4111 1111 1111 1111 exp 03/2015");
//! assert_eq!(sanitizer.sanitize(&mut text), Outcome::Redacted);
//! assert_eq!(text, "card 4111 11▇▇ ▇▇▇▇ 1111 exp 03/2015");
//! ```

pub mod company;
pub mod config;
pub mod detector;
pub mod error;
pub mod expiration;
pub mod luhn;
pub mod redactor;
pub mod sanitizer;
pub mod tracking;

pub use company::{CardCompany, valid_prefix};
pub use config::{Settings, SettingsOverride};
pub use detector::{Candidate, CandidateValidator, Rejection};
pub use error::{Error, Result};
pub use redactor::{Change, Redactor};
pub use sanitizer::{Outcome, Sanitizer};
pub use tracking::TrackingNumberValidator;
