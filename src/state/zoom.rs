// Scale bounds and zoom math shared by the gesture hook and the viewer controls.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SCALE: f64 = 0.5;
pub const DEFAULT_MAX_SCALE: f64 = 3.0;
pub const DEFAULT_SENSITIVITY: f64 = 1.0;
pub const DEFAULT_DEBOUNCE_MS: u32 = 150;

/// Wheel delta to scale-delta conversion, before sensitivity.
pub const WHEEL_ZOOM_FACTOR: f64 = 0.01;

/// Step factors for the zoom buttons / keyboard shortcuts.
pub const STEP_ZOOM_IN: f64 = 1.25;
pub const STEP_ZOOM_OUT: f64 = 0.8;

/// Allowed committed-scale range. `min <= max`, both positive; the host is
/// expected to construct sane bounds, they are not re-validated here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE,
        }
    }
}

impl ScaleBounds {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Scales are rounded to 2 decimals at computation time so repeated reads of a
/// pending value are stable.
pub fn round_scale(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// New scale for a pinch whose finger distance changed by `ratio` relative to
/// the gesture start.
pub fn pinch_scale(initial_scale: f64, ratio: f64, sensitivity: f64, bounds: ScaleBounds) -> f64 {
    let scale_delta = (ratio - 1.0) * sensitivity;
    round_scale(bounds.clamp(initial_scale * (1.0 + scale_delta)))
}

/// New scale for one ctrl+wheel tick. Negative `delta_y` (wheel up / fingers
/// spreading) zooms in.
pub fn wheel_scale(base_scale: f64, delta_y: f64, sensitivity: f64, bounds: ScaleBounds) -> f64 {
    let delta = -delta_y * WHEEL_ZOOM_FACTOR * sensitivity;
    round_scale(bounds.clamp(base_scale * (1.0 + delta)))
}

/// Button / keyboard zoom by a fixed factor.
pub fn step_scale(current: f64, factor: f64, bounds: ScaleBounds) -> f64 {
    round_scale(bounds.clamp(current * factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_bounds() {
        let b = ScaleBounds { min: 0.5, max: 3.0 };
        assert_eq!(b.clamp(0.1), 0.5);
        assert_eq!(b.clamp(1.7), 1.7);
        assert_eq!(b.clamp(9.0), 3.0);
    }

    #[test]
    fn round_scale_two_decimals() {
        assert_eq!(round_scale(1.2345), 1.23);
        assert_eq!(round_scale(0.125), 0.13);
        assert_eq!(round_scale(2.0), 2.0);
    }

    #[test]
    fn pinch_scale_doubling_distance_clamps_at_max() {
        // Committed 2.0, fingers double their distance: 2 * (1 + 1) = 4, clamped to 3.
        let b = ScaleBounds { min: 0.5, max: 3.0 };
        assert_eq!(pinch_scale(2.0, 2.0, 1.0, b), 3.0);
    }

    #[test]
    fn pinch_scale_applies_sensitivity() {
        let b = ScaleBounds { min: 0.5, max: 3.0 };
        // ratio 1.5 at half sensitivity: 1 * (1 + 0.5 * 0.5) = 1.25
        assert_eq!(pinch_scale(1.0, 1.5, 0.5, b), 1.25);
    }

    #[test]
    fn pinch_inward_clamps_at_min() {
        let b = ScaleBounds { min: 0.5, max: 3.0 };
        assert_eq!(pinch_scale(0.5, 0.2, 1.0, b), 0.5);
    }

    #[test]
    fn wheel_scale_zooms_in_on_negative_delta() {
        let b = ScaleBounds::default();
        // -100 * 0.01 = +1.0 relative delta: 1 * 2 = 2
        assert_eq!(wheel_scale(1.0, -100.0, 1.0, b), 2.0);
        assert_eq!(wheel_scale(1.0, 50.0, 1.0, b), 0.5);
    }

    #[test]
    fn step_scale_uses_button_factors() {
        let b = ScaleBounds::default();
        assert_eq!(step_scale(1.0, STEP_ZOOM_IN, b), 1.25);
        assert_eq!(step_scale(1.0, STEP_ZOOM_OUT, b), 0.8);
        assert_eq!(step_scale(2.9, STEP_ZOOM_IN, b), 3.0);
    }
}
