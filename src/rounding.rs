//! Fixed-decimal rounding shared by every formula

/// Largest number of decimal places any formula will round to
pub const MAX_PRECISION: u32 = 16;

/// Round `value` to `places` decimal places (half away from zero).
///
/// Places above [`MAX_PRECISION`] are capped. Values whose scaled form no
/// longer fits the f64 mantissa are already as precise as f64 allows and are
/// returned untouched, as are NaN and infinities.
pub fn round_to(value: f64, places: u32) -> f64 {
    let places = places.min(MAX_PRECISION);
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;

    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }

    scaled.round() / factor
}
