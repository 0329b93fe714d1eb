//! Tests for candidate validation

use super::*;
use crate::tracking::default_validators;

fn validate(settings: &Settings, text: &str) -> Result<(), Rejection> {
    let tracking = default_validators();
    let validator = CandidateValidator::new(settings, &tracking);
    let start = text.find(|c: char| c.is_ascii_digit()).unwrap();
    let end = text.rfind(|c: char| c.is_ascii_digit()).unwrap() + 1;
    validator.validate(&Candidate::from_range(text, start, end))
}

#[test]
fn test_candidate_from_range() {
    let text = "card: 4111-1111-1111-1111 exp";
    let candidate = Candidate::from_range(text, 6, 25);

    assert_eq!(candidate.raw, "4111-1111-1111-1111");
    assert_eq!(candidate.digits, "4111111111111111");
    assert_eq!(candidate.prefix, "card: ");
    assert_eq!(candidate.postfix, " exp");
}

#[test]
fn test_valid_card_with_defaults() {
    assert_eq!(validate(&Settings::default(), "4111111111111111"), Ok(()));
}

#[test]
fn test_checksum_failure() {
    assert_eq!(
        validate(&Settings::default(), "4111111111111112"),
        Err(Rejection::Checksum)
    );
}

#[test]
fn test_unknown_prefix() {
    // Luhn-valid, but no issuer starts with 1
    assert_eq!(
        validate(&Settings::default(), "1234567812345670"),
        Err(Rejection::Prefix)
    );
}

#[test]
fn test_context_only_checked_when_enabled() {
    let text = "a4111111111111111b";
    assert_eq!(validate(&Settings::default(), text), Ok(()));

    let settings = Settings {
        parse_flanking: true,
        ..Settings::default()
    };
    assert_eq!(validate(&settings, text), Err(Rejection::Context));
}

#[test]
fn test_grouping_only_checked_when_enabled() {
    let text = "41 11 11 11 11 11 11 11";
    assert_eq!(validate(&Settings::default(), text), Ok(()));

    let settings = Settings {
        use_groupings: true,
        ..Settings::default()
    };
    assert_eq!(validate(&settings, text), Err(Rejection::Grouping));
    assert_eq!(validate(&settings, "4111 1111 1111 1111"), Ok(()));
}

/// A 12-digit Maestro number that is also a FedEx Express tracking number
fn maestro_fedex_number() -> String {
    let tracking = tracking::FedExExpress;
    (0..10_000_000u32)
        .map(|n| format!("5018{n:07}"))
        .flat_map(|payload| (0..10).map(move |check| format!("{payload}{check}")))
        .find(|number| {
            luhn::is_valid(number) && tracking.matches(number) && company::valid_prefix(number)
        })
        .unwrap()
}

#[test]
fn test_tracking_numbers_only_excluded_when_enabled() {
    let number = maestro_fedex_number();
    assert_eq!(validate(&Settings::default(), &number), Ok(()));

    let settings = Settings {
        exclude_tracking_numbers: true,
        ..Settings::default()
    };
    assert_eq!(
        validate(&settings, &number),
        Err(Rejection::TrackingNumber("fedex_express"))
    );
}
