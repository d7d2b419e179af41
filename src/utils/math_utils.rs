//! Numeric conversion helpers with the clippy casts silenced in one place.
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

/// Converts a (floored or ceiled) `f64` into an `i64`.
///
/// Values outside the `i64` range saturate, `NaN` becomes zero.
#[must_use]
pub const fn f64_to_i64(value: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let newval = value as i64;
    newval
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn conversions() {
        assert_eq!(usize_to_f64(3), 3.0);
        assert_eq!(i64_to_f64(-3), -3.0);
        assert_eq!(f64_to_i64(-2.0_f64.floor()), -2);
        assert_eq!(f64_to_i64(f64::NAN), 0);
        assert_eq!(f64_to_i64(f64::INFINITY), i64::MAX);
    }
}
