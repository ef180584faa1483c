//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Clamp a value into the inclusive range `[min, max]`.
///
/// Works for any partially ordered type, so integer tick counts and floating
/// point values can share the same helper. If `min > max` the result is
/// `max`.
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd
{
    let mut ret = value;

    if ret < min {
        ret = min
    }
    if ret > max {
        ret = max
    }

    ret
}

/// Return the sign of a value as -1, 0 or +1.
///
/// Unlike `f64::signum` both zeros map to zero. NaN also maps to zero.
pub fn sign<T>(value: T) -> T
where
    T: Float
{
    if value > T::zero() {
        T::one()
    }
    else if value < T::zero() {
        -T::one()
    }
    else {
        T::zero()
    }
}

/// Round to the nearest integer, with halves rounded towards positive
/// infinity (so `2.5 -> 3` and `-2.5 -> -2`).
pub fn round_half_up<T>(value: T) -> T
where
    T: Float
{
    // Compare the fractional part rather than adding 0.5, which rounds
    // 0.49999999999999994 up to 1
    let floor = value.floor();
    if value - floor >= T::from(0.5).unwrap() {
        value.ceil()
    }
    else {
        floor
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(450, -300, 300), 300);
        assert_eq!(clamp(-301, -300, 300), -300);
        assert_eq!(clamp(12, -300, 300), 12);
        assert_eq!(clamp(0.5f64, 0.0, 1.0), 0.5);
        assert_eq!(clamp(7, 5, 5), 5);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(-0.3f64), -1.0);
        assert_eq!(sign(42.0f64), 1.0);
        assert_eq!(sign(0.0f64), 0.0);
        assert_eq!(sign(-0.0f64), 0.0);
        assert_eq!(sign(std::f64::NAN), 0.0);
        assert_eq!(sign(std::f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5f64), 3.0);
        assert_eq!(round_half_up(-2.5f64), -2.0);
        assert_eq!(round_half_up(-2.51f64), -3.0);
        assert_eq!(round_half_up(0.49f64), 0.0);
        assert_eq!(round_half_up(449.999f64), 450.0);
        assert_eq!(round_half_up(0.49999999999999994f64), 0.0);
        assert_eq!(round_half_up(-0.49999999999999994f64), 0.0);
        assert_eq!(round_half_up(-0.5f64), 0.0);
        assert_eq!(round_half_up(4503599627370497.0f64), 4503599627370497.0);
        assert!(round_half_up(std::f64::NAN).is_nan());
    }
}
