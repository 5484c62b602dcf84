// Copyright 2026 the Tvgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float-to-index conversions that do not need `std` or `libm`.

/// Rounds a non-negative value down to a `usize`.
///
/// Negative values and NaN map to `0`; values beyond `usize::MAX` saturate.
#[must_use]
pub fn floor_to_usize(value: f64) -> usize {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    // `as` truncates toward zero (saturating), which is `floor` for positive values.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Saturating truncation is the intended floor for positive values"
    )]
    let truncated = value as usize;
    truncated
}

/// Rounds a non-negative value up to a `usize`.
///
/// Negative values and NaN map to `0`; values beyond `usize::MAX` saturate.
#[must_use]
pub fn ceil_to_usize(value: f64) -> usize {
    let floor = floor_to_usize(value);
    if (floor as f64) < value {
        floor.saturating_add(1)
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::{ceil_to_usize, floor_to_usize};

    #[test]
    fn floor_and_ceil_on_positive_values() {
        assert_eq!(floor_to_usize(0.0), 0);
        assert_eq!(floor_to_usize(3.99), 3);
        assert_eq!(floor_to_usize(4.0), 4);
        assert_eq!(ceil_to_usize(4.0), 4);
        assert_eq!(ceil_to_usize(4.01), 5);
        assert_eq!(ceil_to_usize(0.2), 1);
    }

    #[test]
    fn negative_and_nan_collapse_to_zero() {
        assert_eq!(floor_to_usize(-3.5), 0);
        assert_eq!(ceil_to_usize(-0.5), 0);
        assert_eq!(floor_to_usize(f64::NAN), 0);
        assert_eq!(ceil_to_usize(f64::NAN), 0);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(floor_to_usize(f64::INFINITY), usize::MAX);
        assert_eq!(ceil_to_usize(f64::INFINITY), usize::MAX);
    }
}
