//! Log-Scale Transform
//!
//! Bidirectional mapping between a linear domain value and a 0-100 slider
//! position. Equal slider motion represents equal proportional change in the
//! underlying value, which suits benchmark metrics where small absolute gains
//! near the top of the scale are disproportionately significant.
//!
//! Presentation support only: this module never touches the risk parameters
//! or results.

/// Linear value to 0-100 log position.
///
/// `min` must be > 0; values below `min` clamp to `min` before the
/// logarithm.
pub fn to_display(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).log10() / max.log10() * 100.0
}

/// 0-100 log position back to a linear value.
///
/// The raw value is rounded to the decimal precision implied by `step`,
/// snapped to the nearest multiple of `step`, then clamped into
/// `[min, max]` to guard against overshoot from floating-point error.
pub fn to_linear(position: f64, min: f64, max: f64, step: f64) -> f64 {
    let places = step_decimals(step);
    let linear = 10f64.powf(position / 100.0 * max.log10());
    let rounded = round_to_places(linear, places);
    let snapped = round_to_places((rounded / step).round() * step, places);
    snapped.clamp(min, max)
}

/// Decimal places implied by a step size (0.01 -> 2, 1.0 -> 0).
fn step_decimals(step: f64) -> i32 {
    if step >= 1.0 {
        return 0;
    }
    step.to_string()
        .split('.')
        .nth(1)
        .map(|digits| digits.len() as i32)
        .unwrap_or(0)
}

fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

// ============================================================================
// TESTS
// ============================================================================
