//! Shipping tracking number exclusion
//!
//! Some carriers issue all-digit tracking numbers whose length and check
//! digit can collide with card numbers. When `exclude_tracking_numbers` is
//! set, a candidate that validates against any carrier here is left alone.

use std::sync::Arc;

/// Trait for recognizing a carrier's tracking numbers
pub trait TrackingNumberValidator: Send + Sync {
    /// Carrier name, used in logs
    fn carrier(&self) -> &'static str;

    /// True if `digits` is a well-formed tracking number for this carrier
    fn matches(&self, digits: &str) -> bool;
}

fn digit_values(digits: &str) -> Option<Vec<u32>> {
    digits
        .chars()
        .map(|c| c.to_digit(10))
        .collect()
}

/// Mod-10 check with weights 3,1 alternating from the right of the payload
fn mod10_weighted_3_1(values: &[u32]) -> bool {
    let Some((&check, payload)) = values.split_last() else {
        return false;
    };

    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d * 3 } else { d })
        .sum();

    (10 - sum % 10) % 10 == check
}

/// FedEx Express, 12 digits
#[derive(Debug, Clone, Copy, Default)]
pub struct FedExExpress;

impl TrackingNumberValidator for FedExExpress {
    fn carrier(&self) -> &'static str {
        "fedex_express"
    }

    fn matches(&self, digits: &str) -> bool {
        const WEIGHTS: [u32; 3] = [1, 3, 7];

        if digits.len() != 12 {
            return false;
        }
        let Some(values) = digit_values(digits) else {
            return false;
        };
        let Some((&check, payload)) = values.split_last() else {
            return false;
        };

        let sum: u32 = payload
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &d)| d * WEIGHTS[i % 3])
            .sum();

        sum % 11 % 10 == check
    }
}

/// FedEx Ground, 15 digits
#[derive(Debug, Clone, Copy, Default)]
pub struct FedExGround;

impl TrackingNumberValidator for FedExGround {
    fn carrier(&self) -> &'static str {
        "fedex_ground"
    }

    fn matches(&self, digits: &str) -> bool {
        digits.len() == 15 && digit_values(digits).is_some_and(|v| mod10_weighted_3_1(&v))
    }
}

/// USPS and FedEx SmartPost, 20 or 22 digits
#[derive(Debug, Clone, Copy, Default)]
pub struct Usps;

impl TrackingNumberValidator for Usps {
    fn carrier(&self) -> &'static str {
        "usps"
    }

    fn matches(&self, digits: &str) -> bool {
        matches!(digits.len(), 20 | 22)
            && digit_values(digits).is_some_and(|v| mod10_weighted_3_1(&v))
    }
}

/// DHL Express, 10 or 11 digits
#[derive(Debug, Clone, Copy, Default)]
pub struct DhlExpress;

impl TrackingNumberValidator for DhlExpress {
    fn carrier(&self) -> &'static str {
        "dhl_express"
    }

    fn matches(&self, digits: &str) -> bool {
        if !matches!(digits.len(), 10 | 11) || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        let (payload, check) = digits.split_at(digits.len() - 1);
        match (payload.parse::<u64>(), check.parse::<u64>()) {
            (Ok(payload), Ok(check)) => payload % 7 == check,
            _ => false,
        }
    }
}

/// Built-in carrier set
pub fn default_validators() -> Vec<Arc<dyn TrackingNumberValidator>> {
    vec![
        Arc::new(FedExExpress),
        Arc::new(FedExGround),
        Arc::new(Usps),
        Arc::new(DhlExpress),
    ]
}

/// First validator that recognizes `digits`
pub fn find_carrier<'a>(
    validators: &'a [Arc<dyn TrackingNumberValidator>],
    digits: &str,
) -> Option<&'a dyn TrackingNumberValidator> {
    validators
        .iter()
        .map(|v| v.as_ref())
        .find(|v| v.matches(digits))
}
