use crate::util::format_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScaleIndicatorProps {
    /// Committed scale; multiplied by the transient gesture ratio while a
    /// gesture is in flight so the readout tracks the fingers live.
    pub scale: f64,
    pub gesture_scale: f64,
    pub is_gesturing: bool,
}

#[function_component(ScaleIndicator)]
pub fn scale_indicator(props: &ScaleIndicatorProps) -> Html {
    let effective = if props.is_gesturing {
        props.scale * props.gesture_scale
    } else {
        props.scale
    };
    let opacity = if props.is_gesturing { "1.0" } else { "0.8" };
    html! {<div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); display:flex; flex-direction:column; align-items:center; gap:6px;">
        <div style={format!("font-size:20px; font-weight:600; opacity:{};", opacity)}>{ format_percent(effective) }</div>
    </div>}
}
