// Gesture-internal state driving the pinch-zoom hook: which pinch is active,
// what scale is pending commit, and what transform ratio to paint meanwhile.
// Kept free of web-sys so the numeric behavior is testable off-wasm.

use crate::state::touch::PinchState;
use crate::state::zoom::{pinch_scale, wheel_scale, ScaleBounds};

#[derive(Debug)]
pub struct GestureCore {
    /// Last committed scale reported by the host. Visual ratios are always
    /// expressed against this value, never against a previous frame.
    committed: f64,
    pinch: Option<PinchState>,
    /// Most recent computed target scale not yet delivered to the host.
    pending: Option<f64>,
}

impl GestureCore {
    pub fn new(committed: f64) -> Self {
        Self {
            committed,
            pinch: None,
            pending: None,
        }
    }

    /// Mirror the host-owned scale. Called on mount and whenever the host
    /// re-renders with a new value.
    pub fn sync_committed(&mut self, scale: f64) {
        self.committed = scale;
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Scale a new gesture starts from: a still-settling pending value wins
    /// over the committed one, so lift-and-repinch keeps accumulating.
    fn base_scale(&self) -> f64 {
        self.pending.unwrap_or(self.committed)
    }

    pub fn begin_pinch(&mut self, distance: f64) {
        self.pinch = Some(PinchState::new(distance, self.base_scale()));
    }

    /// Recompute the pending scale for the current finger distance. Returns
    /// the new visual ratio, or `None` when no pinch is active.
    pub fn update_pinch(
        &mut self,
        distance: f64,
        bounds: ScaleBounds,
        sensitivity: f64,
    ) -> Option<f64> {
        let pinch = self.pinch?;
        let target = pinch_scale(
            pinch.initial_scale,
            pinch.ratio(distance),
            sensitivity,
            bounds,
        );
        self.pending = Some(target);
        Some(self.visual_ratio())
    }

    /// Drop the pinch snapshot. Returns whether one was active, so the caller
    /// knows if a settle needs scheduling.
    pub fn end_pinch(&mut self) -> bool {
        self.pinch.take().is_some()
    }

    /// One ctrl+wheel tick. Each tick compounds on the pending value, so a
    /// burst walks the scale continuously between commits.
    pub fn apply_wheel(&mut self, delta_y: f64, bounds: ScaleBounds, sensitivity: f64) -> f64 {
        let target = wheel_scale(self.base_scale(), delta_y, sensitivity, bounds);
        self.pending = Some(target);
        self.visual_ratio()
    }

    /// Take the value to commit. Clears pending, so a settled burst commits
    /// exactly once.
    pub fn take_pending(&mut self) -> Option<f64> {
        self.pending.take()
    }

    /// Transform ratio for uncommitted feedback, relative to the committed
    /// scale. 1.0 when nothing is pending.
    pub fn visual_ratio(&self) -> f64 {
        match self.pending {
            Some(p) if self.committed > 0.0 => p / self.committed,
            _ => 1.0,
        }
    }

    /// Forget everything in-flight (teardown, disable mid-gesture).
    pub fn reset(&mut self) {
        self.pinch = None;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: ScaleBounds = ScaleBounds { min: 0.5, max: 3.0 };

    #[test]
    fn idle_core_has_identity_visual_and_nothing_pending() {
        let mut core = GestureCore::new(1.0);
        assert_eq!(core.visual_ratio(), 1.0);
        assert_eq!(core.take_pending(), None);
    }

    #[test]
    fn pinch_doubling_from_two_clamps_and_reports_relative_ratio() {
        // The worked example: committed 2.0, distance doubles, sensitivity 1.
        let mut core = GestureCore::new(2.0);
        core.begin_pinch(100.0);
        let visual = core.update_pinch(200.0, BOUNDS, 1.0).unwrap();
        assert_eq!(core.take_pending(), Some(3.0));
        assert_eq!(visual, 1.5);
    }

    #[test]
    fn pinch_outward_at_max_never_exceeds_max() {
        let mut core = GestureCore::new(3.0);
        core.begin_pinch(80.0);
        let visual = core.update_pinch(400.0, BOUNDS, 1.0).unwrap();
        assert_eq!(visual, 1.0);
        assert_eq!(core.take_pending(), Some(3.0));
    }

    #[test]
    fn update_without_begin_is_ignored() {
        let mut core = GestureCore::new(1.0);
        assert_eq!(core.update_pinch(200.0, BOUNDS, 1.0), None);
        assert!(!core.has_pending());
    }

    #[test]
    fn commit_fires_once_with_last_computed_value() {
        let mut core = GestureCore::new(1.0);
        core.begin_pinch(100.0);
        core.update_pinch(110.0, BOUNDS, 1.0);
        core.update_pinch(150.0, BOUNDS, 1.0);
        core.update_pinch(130.0, BOUNDS, 1.0);
        assert_eq!(core.take_pending(), Some(1.3));
        assert_eq!(core.take_pending(), None);
    }

    #[test]
    fn wheel_burst_compounds_and_commits_last_value() {
        let mut core = GestureCore::new(1.0);
        core.apply_wheel(-50.0, BOUNDS, 1.0); // 1.0 * 1.5 = 1.5
        core.apply_wheel(-50.0, BOUNDS, 1.0); // 1.5 * 1.5 = 2.25
        assert_eq!(core.take_pending(), Some(2.25));
    }

    #[test]
    fn wheel_values_stay_within_bounds() {
        let mut core = GestureCore::new(1.0);
        for _ in 0..50 {
            let v = core.apply_wheel(-120.0, BOUNDS, 1.0);
            assert!(v <= 3.0);
        }
        assert_eq!(core.take_pending(), Some(3.0));
        for _ in 0..50 {
            core.apply_wheel(120.0, BOUNDS, 1.0);
        }
        assert_eq!(core.take_pending(), Some(0.5));
    }

    #[test]
    fn non_gesture_wheel_is_never_seen_here() {
        // The hook filters non-ctrl wheel events before they reach the core;
        // an untouched core must therefore report identity state.
        let core = GestureCore::new(1.4);
        assert_eq!(core.visual_ratio(), 1.0);
        assert!(!core.has_pending());
        assert!(!core.is_pinching());
    }

    #[test]
    fn repinch_during_settle_starts_from_pending() {
        let mut core = GestureCore::new(1.0);
        core.begin_pinch(100.0);
        core.update_pinch(150.0, BOUNDS, 1.0); // pending 1.5
        assert!(core.end_pinch());
        // Second pinch before the debounce fired: base is 1.5, not 1.0.
        core.begin_pinch(100.0);
        core.update_pinch(120.0, BOUNDS, 1.0); // 1.5 * 1.2 = 1.8
        assert_eq!(core.take_pending(), Some(1.8));
    }

    #[test]
    fn end_pinch_reports_whether_one_was_active() {
        let mut core = GestureCore::new(1.0);
        assert!(!core.end_pinch());
        core.begin_pinch(100.0);
        assert!(core.end_pinch());
        assert!(!core.end_pinch());
    }

    #[test]
    fn visual_ratio_tracks_committed_not_previous_frames() {
        let mut core = GestureCore::new(2.0);
        core.begin_pinch(100.0);
        core.update_pinch(110.0, BOUNDS, 1.0); // pending 2.2
        assert_eq!(core.visual_ratio(), 2.2 / 2.0);
        core.update_pinch(120.0, BOUNDS, 1.0); // pending 2.4
        assert_eq!(core.visual_ratio(), 2.4 / 2.0);
    }

    #[test]
    fn reset_clears_everything_in_flight() {
        let mut core = GestureCore::new(1.0);
        core.begin_pinch(100.0);
        core.update_pinch(200.0, BOUNDS, 1.0);
        core.reset();
        assert!(!core.is_pinching());
        assert_eq!(core.take_pending(), None);
        assert_eq!(core.visual_ratio(), 1.0);
    }
}
