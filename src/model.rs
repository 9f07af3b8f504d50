//! Viewer application state: the committed zoom scale the gesture hook
//! reports into, plus the persisted viewer settings.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::state::zoom::{
    round_scale, step_scale, ScaleBounds, DEFAULT_SENSITIVITY, STEP_ZOOM_IN, STEP_ZOOM_OUT,
};

pub const MIN_SENSITIVITY: f64 = 0.1;
pub const MAX_SENSITIVITY: f64 = 5.0;

/// User-tunable knobs, persisted to localStorage across sessions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerSettings {
    pub sensitivity: f64,
    pub enabled: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            enabled: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    /// Authoritative zoom level. The gesture hook only ever changes this
    /// through `SetScale`.
    pub scale: f64,
    pub bounds: ScaleBounds,
    pub settings: ViewerSettings,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            bounds: ScaleBounds::default(),
            settings: ViewerSettings::default(),
        }
    }
}

pub enum ViewerAction {
    /// Debounced commit from the gesture hook.
    SetScale(f64),
    /// Button / keyboard zoom steps.
    StepIn,
    StepOut,
    ResetScale,
    SetSensitivity(f64),
    ToggleEnabled,
    /// Settings restored from localStorage on mount.
    LoadSettings(ViewerSettings),
}

impl Reducible for ViewerState {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewerAction::SetScale(s) => {
                next.scale = round_scale(next.bounds.clamp(s));
            }
            ViewerAction::StepIn => {
                next.scale = step_scale(next.scale, STEP_ZOOM_IN, next.bounds);
            }
            ViewerAction::StepOut => {
                next.scale = step_scale(next.scale, STEP_ZOOM_OUT, next.bounds);
            }
            ViewerAction::ResetScale => {
                next.scale = 1.0;
            }
            ViewerAction::SetSensitivity(v) => {
                next.settings.sensitivity = v.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
            }
            ViewerAction::ToggleEnabled => {
                next.settings.enabled = !next.settings.enabled;
            }
            ViewerAction::LoadSettings(s) => {
                next.settings = ViewerSettings {
                    sensitivity: s.sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY),
                    enabled: s.enabled,
                };
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: ViewerState, action: ViewerAction) -> ViewerState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn set_scale_clamps_to_bounds() {
        let s = dispatch(ViewerState::new(), ViewerAction::SetScale(10.0));
        assert_eq!(s.scale, 3.0);
        let s = dispatch(s, ViewerAction::SetScale(0.01));
        assert_eq!(s.scale, 0.5);
    }

    #[test]
    fn step_zoom_uses_fixed_factors() {
        let s = dispatch(ViewerState::new(), ViewerAction::StepIn);
        assert_eq!(s.scale, 1.25);
        let s = dispatch(s, ViewerAction::StepOut);
        assert_eq!(s.scale, 1.0);
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut s = ViewerState::new();
        s.scale = 2.4;
        let s = dispatch(s, ViewerAction::ResetScale);
        assert_eq!(s.scale, 1.0);
    }

    #[test]
    fn sensitivity_is_clamped() {
        let s = dispatch(ViewerState::new(), ViewerAction::SetSensitivity(100.0));
        assert_eq!(s.settings.sensitivity, MAX_SENSITIVITY);
        let s = dispatch(s, ViewerAction::SetSensitivity(0.0));
        assert_eq!(s.settings.sensitivity, MIN_SENSITIVITY);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = ViewerSettings {
            sensitivity: 2.5,
            enabled: false,
        };
        let raw = serde_json::to_string(&settings).unwrap();
        let back: ViewerSettings = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn loaded_settings_are_sanitized() {
        let s = dispatch(
            ViewerState::new(),
            ViewerAction::LoadSettings(ViewerSettings {
                sensitivity: 99.0,
                enabled: false,
            }),
        );
        assert_eq!(s.settings.sensitivity, MAX_SENSITIVITY);
        assert!(!s.settings.enabled);
    }
}
