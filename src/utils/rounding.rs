/// Digits printed past the rounding position when reading the exact decimal
/// expansion of a double
const GUARD_DIGITS: usize = 30;

/// Round to 2 decimal places, halves away from zero
///
/// Applied once at the end of each section and again at aggregation.
/// Component gases are never pre-rounded.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round the stored binary value to `decimals` places, halves away from zero
///
/// The decision is made on the exact decimal expansion of `value`, so
/// 0.015 (stored as 0.01499…) rounds to 0.01 while an exact tie such as
/// 0.125 rounds to 0.13.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = decimals.max(0) as usize;
    let scale = 10f64.powi(places as i32);

    let exact = format!("{:.*}", places + GUARD_DIGITS, value.abs());
    let (kept, dropped) = exact.split_at(exact.len() - GUARD_DIGITS);
    let digits: String = kept.chars().filter(|c| *c != '.').collect();

    let Ok(mut units) = digits.parse::<u128>() else {
        // Too large for the integer path; nothing below the decimal point matters here
        return (value * scale).round() / scale;
    };
    if dropped.as_bytes().first().is_some_and(|d| *d >= b'5') {
        units += 1;
    }
    if units == 0 {
        return 0.0;
    }

    (units as f64 / scale).copysign(value)
}
