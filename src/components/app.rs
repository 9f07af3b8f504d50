use super::figure_viewer::FigureViewer;
use crate::model::{ViewerAction, ViewerSettings, ViewerState};
use crate::util::clog;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

const SETTINGS_KEY: &str = "fv_viewer_settings";

#[function_component(App)]
pub fn app() -> Html {
    let viewer_state = use_reducer(ViewerState::new);

    // Load persisted settings once on mount
    {
        let viewer_state = viewer_state.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                        if let Ok(s) = serde_json::from_str::<ViewerSettings>(&raw) {
                            clog("restored viewer settings");
                            viewer_state.dispatch(ViewerAction::LoadSettings(s));
                        }
                    }
                }
            }
            || ()
        });
    }
    // Persist settings changes
    {
        let settings = viewer_state.settings;
        use_effect_with(settings, move |settings| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(settings) {
                        let _ = store.set_item(SETTINGS_KEY, &s);
                    }
                }
            }
            || ()
        });
    }
    // Keyboard zoom shortcuts
    {
        let viewer_state = viewer_state.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().unwrap();
            let key_cb = {
                let viewer_state = viewer_state.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    match e.key().as_str() {
                        "+" | "=" => {
                            e.prevent_default();
                            viewer_state.dispatch(ViewerAction::StepIn);
                        }
                        "-" | "_" => {
                            e.prevent_default();
                            viewer_state.dispatch(ViewerAction::StepOut);
                        }
                        "0" => {
                            e.prevent_default();
                            viewer_state.dispatch(ViewerAction::ResetScale);
                        }
                        _ => {}
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                .unwrap();
            move || {
                let _ = window
                    .remove_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
                drop(key_cb);
            }
        });
    }

    html! {
        <div id="root">
            <FigureViewer viewer_state={viewer_state.clone()} />
        </div>
    }
}
