//! Luhn (mod 10) checksum

/// Weighted sum over ASCII digits, doubling every second digit from the right
/// when `double_first` is false. `None` if a non-digit is present.
fn weighted_sum(digits: &str, double_first: bool) -> Option<u32> {
    digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            if !b.is_ascii_digit() {
                return None;
            }
            let d = u32::from(b - b'0');
            if (i % 2 == 1) != double_first {
                let doubled = d * 2;
                Some(if doubled > 9 { doubled - 9 } else { doubled })
            } else {
                Some(d)
            }
        })
        .sum()
}

/// Validate a digit string with the Luhn algorithm
///
/// Empty strings and strings containing anything other than ASCII digits
/// are invalid.
pub fn is_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    weighted_sum(digits, false).is_some_and(|sum| sum.is_multiple_of(10))
}

/// Compute the check digit that makes `payload` followed by it Luhn-valid
pub fn check_digit(payload: &str) -> Option<u8> {
    // The check digit takes the rightmost slot, so the payload's own
    // rightmost digit is the first one doubled.
    let sum = weighted_sum(payload, true)?;
    Some(((10 - sum % 10) % 10) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_test_cards() {
        for card in [
            "4111111111111111",
            "4012888888881881",
            "5555555555554444",
            "378282246310005",
            "6011111111111117",
            "30569309025904",
            "3530111333300000",
            "4532015112830366",
        ] {
            assert!(is_valid(card), "{card} should pass");
        }
    }

    #[test]
    fn test_invalid_checksum() {
        assert!(!is_valid("4111111111111112"));
        assert!(!is_valid("4532015112830367"));
    }

    #[test]
    fn test_rejects_empty_and_non_digits() {
        assert!(!is_valid(""));
        assert!(!is_valid("4111-1111-1111-1111"));
        assert!(!is_valid("41111111111111a1"));
    }

    #[test]
    fn test_check_digit_completes_payload() {
        assert_eq!(check_digit("411111111111111"), Some(1));
        assert_eq!(check_digit("37828224631000"), Some(5));
        assert_eq!(check_digit("12a"), None);
    }

    #[test]
    fn test_any_payload_with_check_digit_is_valid() {
        for payload in ["0", "7992739871", "520000000000000", "123456789012345678"] {
            let check = check_digit(payload).unwrap();
            let number = format!("{payload}{check}");
            assert!(is_valid(&number), "{number} should pass");

            // Changing any other digit must break the checksum
            for pos in 0..payload.len() {
                let mut altered = number.clone().into_bytes();
                altered[pos] = if altered[pos] == b'9' { b'0' } else { altered[pos] + 1 };
                let altered = String::from_utf8(altered).unwrap();
                assert!(!is_valid(&altered), "{altered} should fail");
            }
        }
    }
}
