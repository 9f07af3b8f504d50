use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::{MAX_SENSITIVITY, MIN_SENSITIVITY};

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub enabled: bool,
    pub on_toggle_enabled: Callback<()>,
    pub sensitivity: f64,
    pub on_set_sensitivity: Callback<f64>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_enabled_cb = {
        let cb = props.on_toggle_enabled.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let sensitivity_cb = {
        let cb = props.on_set_sensitivity.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                if let Ok(v) = input.value().parse::<f64>() {
                    cb.emit(v);
                }
            }
        })
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Zoom Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.enabled} onclick={toggle_enabled_cb} />
                    <span>{"Pinch / trackpad zoom"}</span>
                </label>
                <label style="display:flex; flex-direction:column; gap:4px;">
                    <span>{ format!("Sensitivity: {:.1}x", props.sensitivity) }</span>
                    <input
                        type="range"
                        min={MIN_SENSITIVITY.to_string()}
                        max={MAX_SENSITIVITY.to_string()}
                        step="0.1"
                        value={props.sensitivity.to_string()}
                        oninput={sensitivity_cb}
                    />
                </label>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Two-finger pinch on touch screens, or hold Ctrl and scroll on a trackpad. Keyboard: + / - / 0."}</div>
        </div>
    </div>}
}
