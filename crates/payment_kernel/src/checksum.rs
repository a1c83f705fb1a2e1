//! Pure checksum engines over digit sequences
//!
//! These functions operate on raw digit slices (values 0-9), independent
//! of the value types that wrap them, so they can be property-tested
//! directly against large random digit sets.

/// Runs the Luhn checksum over a digit sequence
///
/// Starting from the second-from-right digit, every second digit is
/// doubled; doubled values above 9 have 9 subtracted. The sequence is
/// valid when the total is divisible by 10.
pub fn luhn_valid(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }
    luhn_sum(digits) % 10 == 0
}

/// Computes the check digit that makes `payload` Luhn-valid when appended
pub fn luhn_check_digit(payload: &[u8]) -> u8 {
    // Appending a digit shifts every payload position one step left, so
    // sum the payload as if a zero check digit were already present.
    let mut with_zero = Vec::with_capacity(payload.len() + 1);
    with_zero.extend_from_slice(payload);
    with_zero.push(0);
    let rem = luhn_sum(&with_zero) % 10;
    ((10 - rem) % 10) as u8
}

fn luhn_sum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum()
}

/// Computes a modulo-11 check digit from a weighted digit window
///
/// `digits` and `weights` must have equal length. The check digit is 0
/// when the weighted sum modulo 11 is below 2, otherwise 11 minus the
/// remainder.
pub fn mod11_check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    debug_assert_eq!(digits.len(), weights.len());
    let sum: u32 = digits
        .iter()
        .zip(weights.iter())
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        (11 - rem) as u8
    }
}

/// Returns true when every digit in the sequence is identical
pub fn all_same(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}
