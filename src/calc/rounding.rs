//! Reproducible decimal rounding of stored values.

use crate::config::{RoundingMethod, NOISE_DECIMALS};

/// Round `value` to `precision` decimal places.
///
/// The scaled magnitude is first normalised to eight decimals so that binary
/// representation noise (`1019.9999999999999`) cannot push a value across a
/// rounding boundary. Non-finite input rounds to zero.
pub fn flt(value: f64, precision: u32, method: RoundingMethod) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let factor = 10f64.powi(precision as i32);
    let scaled = normalise(value.abs() * factor);

    let floor = scaled.floor();
    let is_half = scaled - floor == 0.5;
    let rounded = match method {
        RoundingMethod::Legacy if precision == 0 && is_half => round_to_even(floor),
        RoundingMethod::Legacy => scaled.round(),
        RoundingMethod::HalfEven if is_half => round_to_even(floor),
        RoundingMethod::HalfEven => scaled.round(),
    };

    let result = rounded / factor;
    if result == 0.0 {
        0.0
    } else if value < 0.0 {
        -result
    } else {
        result
    }
}

fn normalise(scaled: f64) -> f64 {
    let noise = 10f64.powi(NOISE_DECIMALS);
    (scaled * noise).round() / noise
}

fn round_to_even(floor: f64) -> f64 {
    if floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY: RoundingMethod = RoundingMethod::Legacy;
    const HALF_EVEN: RoundingMethod = RoundingMethod::HalfEven;

    #[test]
    fn test_flt_basic() {
        assert_eq!(flt(1.23456, 3, LEGACY), 1.235);
        assert_eq!(flt(1.2344, 3, LEGACY), 1.234);
        assert_eq!(flt(62.5, 3, LEGACY), 62.5);
        assert_eq!(flt(7.0, 0, LEGACY), 7.0);
    }

    #[test]
    fn test_flt_absorbs_binary_noise() {
        let value = 10.0 * 2.5908 / 0.0254;
        assert_eq!(flt(value, 3, LEGACY), 1020.0);
        assert_eq!(flt(1.005, 2, LEGACY), 1.01);
    }

    #[test]
    fn test_flt_half_handling_legacy() {
        assert_eq!(flt(2.5, 0, LEGACY), 2.0);
        assert_eq!(flt(3.5, 0, LEGACY), 4.0);
        assert_eq!(flt(0.125, 2, LEGACY), 0.13);
    }

    #[test]
    fn test_flt_half_even() {
        assert_eq!(flt(0.125, 2, HALF_EVEN), 0.12);
        assert_eq!(flt(0.135, 2, HALF_EVEN), 0.14);
        assert_eq!(flt(2.5, 0, HALF_EVEN), 2.0);
    }

    #[test]
    fn test_flt_negative_symmetric() {
        assert_eq!(flt(-1.23456, 3, LEGACY), -1.235);
        assert_eq!(flt(-0.0001, 3, LEGACY).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_flt_non_finite() {
        assert_eq!(flt(f64::NAN, 3, LEGACY), 0.0);
        assert_eq!(flt(f64::INFINITY, 3, LEGACY), 0.0);
    }

    #[test]
    fn test_flt_idempotent() {
        let once = flt(25.90799999, 3, LEGACY);
        assert_eq!(flt(once, 3, LEGACY).to_bits(), once.to_bits());
    }
}
