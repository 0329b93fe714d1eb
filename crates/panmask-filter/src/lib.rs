//! Parameter filter adapter for panmask
//!
//! Host logging frameworks usually accept a `(key, value)` filter that runs
//! over request parameters before they are written out. This crate exposes
//! the card sanitizer in that shape, over `serde_json::Value`.
//!
//! # Example
//! ```
//! use serde_json::json;
//!
//! let filter = panmask_filter::parameter_filter();
//! assert_eq!(
//!     filter("card", json!("4111111111111111")),
//!     json!("411111▇▇▇▇▇▇1111")
//! );
//! assert_eq!(filter("amount", json!(42)), json!(42));
//! ```

mod filter;

pub use filter::{parameter_filter, parameter_filter_with, redact_json};
