use yew::prelude::*;

use super::{
    scale_indicator::ScaleIndicator, settings_modal::SettingsModal, zoom_controls::ZoomControls,
};
use crate::hooks::{use_pinch_zoom, PinchZoomConfig};
use crate::model::{ViewerAction, ViewerState};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct FigureViewerProps {
    pub viewer_state: UseReducerHandle<ViewerState>,
}

#[function_component(FigureViewer)]
pub fn figure_viewer(props: &FigureViewerProps) -> Html {
    let open_settings = use_state(|| false);
    let vs = (*props.viewer_state).clone();

    let on_scale_change = {
        let viewer_state = props.viewer_state.clone();
        Callback::from(move |s: f64| {
            clog(&format!("zoom committed: {s}"));
            viewer_state.dispatch(ViewerAction::SetScale(s));
        })
    };

    let zoom = use_pinch_zoom(&PinchZoomConfig {
        scale: vs.scale,
        on_scale_change,
        min_scale: vs.bounds.min,
        max_scale: vs.bounds.max,
        sensitivity: vs.settings.sensitivity,
        enabled: vs.settings.enabled,
        ..Default::default()
    });

    let zoom_in = {
        let viewer_state = props.viewer_state.clone();
        Callback::from(move |_| viewer_state.dispatch(ViewerAction::StepIn))
    };
    let zoom_out = {
        let viewer_state = props.viewer_state.clone();
        Callback::from(move |_| viewer_state.dispatch(ViewerAction::StepOut))
    };
    let reset = {
        let viewer_state = props.viewer_state.clone();
        Callback::from(move |_| viewer_state.dispatch(ViewerAction::ResetScale))
    };
    let toggle_enabled = {
        let viewer_state = props.viewer_state.clone();
        Callback::from(move |_| viewer_state.dispatch(ViewerAction::ToggleEnabled))
    };
    let set_sensitivity = {
        let viewer_state = props.viewer_state.clone();
        Callback::from(move |v: f64| viewer_state.dispatch(ViewerAction::SetSensitivity(v)))
    };
    let open_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(true))
    };
    let close_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(false))
    };

    // The committed scale renders always; the transient gesture ratio stacks
    // on top only while a gesture is in flight.
    let effective = if zoom.is_gesturing {
        vs.scale * zoom.gesture_scale
    } else {
        vs.scale
    };
    let transition = if zoom.is_gesturing {
        "none"
    } else {
        "transform 0.15s ease-out"
    };
    let figure_style = format!(
        "transform: scale({effective}); transform-origin: center center; transition: {transition}; margin:0; display:flex; flex-direction:column; align-items:center; gap:10px;"
    );

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116;">
            <div
                ref={zoom.node_ref.clone()}
                style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; touch-action:none; overscroll-behavior:contain;"
            >
                <figure style={figure_style}>
                    <svg width="480" height="300" viewBox="0 0 480 300" style="background:#161b22; border:1px solid #30363d; border-radius:8px;">
                        // Axes
                        <line x1="48" y1="20" x2="48" y2="260" stroke="#3a4455" stroke-width="1" />
                        <line x1="48" y1="260" x2="450" y2="260" stroke="#3a4455" stroke-width="1" />
                        // Series
                        <polyline
                            points="48,230 115,205 182,215 249,160 316,120 383,95 450,60"
                            fill="none"
                            stroke="#58a6ff"
                            stroke-width="2"
                        />
                        <polyline
                            points="48,245 115,238 182,224 249,220 316,190 383,178 450,150"
                            fill="none"
                            stroke="#2ea043"
                            stroke-width="2"
                        />
                        { for [(48, 230), (115, 205), (182, 215), (249, 160), (316, 120), (383, 95), (450, 60)].iter().map(|(x, y)| html! {
                            <circle cx={x.to_string()} cy={y.to_string()} r="3" fill="#58a6ff" />
                        }) }
                        { for [(48, 245), (115, 238), (182, 224), (249, 220), (316, 190), (383, 178), (450, 150)].iter().map(|(x, y)| html! {
                            <circle cx={x.to_string()} cy={y.to_string()} r="3" fill="#2ea043" />
                        }) }
                        <text x="240" y="290" fill="#8b949e" font-size="11" text-anchor="middle">{"Weeks since intervention"}</text>
                    </svg>
                    <figcaption style="font-size:12px; color:#8b949e; max-width:440px; text-align:center;">
                        {"Figure 2. Response rates for treatment (blue) and control (green) cohorts over the observation window."}
                    </figcaption>
                </figure>
            </div>
            <ScaleIndicator
                scale={vs.scale}
                gesture_scale={zoom.gesture_scale}
                is_gesturing={zoom.is_gesturing}
            />
            <ZoomControls
                on_zoom_in={zoom_in}
                on_zoom_out={zoom_out}
                on_reset={reset}
                on_open_settings={open_settings_cb}
            />
            <SettingsModal
                show={*open_settings}
                on_close={close_settings_cb}
                enabled={vs.settings.enabled}
                on_toggle_enabled={toggle_enabled}
                sensitivity={vs.settings.sensitivity}
                on_set_sensitivity={set_sensitivity}
            />
        </div>
    }
}
