// Pinch / ctrl+wheel zoom hook. Binds non-passive touch and wheel listeners
// to one element and turns them into (a) a frame-coalesced visual scale ratio
// for an uncommitted CSS transform and (b) one debounced committed value per
// settled gesture, delivered through `on_scale_change`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement, TouchEvent, WheelEvent, Window};
use yew::prelude::*;

use crate::state::zoom::{
    ScaleBounds, DEFAULT_DEBOUNCE_MS, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SENSITIVITY,
};
use crate::state::{touch_distance, GestureCore};

/// Delay between delivering the committed scale and clearing the transient
/// transform, so the host re-render lands before the transform is removed.
const SETTLE_GRACE_MS: i32 = 50;

#[derive(Clone, PartialEq)]
pub struct PinchZoomConfig {
    /// Committed scale owned by the host. Read at gesture start and whenever
    /// no gesture is active.
    pub scale: f64,
    /// Receives the settled scale, exactly once per gesture or wheel burst.
    pub on_scale_change: Callback<f64>,
    /// Must satisfy `min_scale < max_scale`; not re-validated here.
    pub min_scale: f64,
    pub max_scale: f64,
    /// Multiplier applied to pinch-ratio and wheel deltas. Must be > 0.
    pub sensitivity: f64,
    /// When false, no listeners are attached at all.
    pub enabled: bool,
    /// Quiet period after the last input event before the commit fires.
    pub debounce_ms: u32,
}

impl Default for PinchZoomConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            on_scale_change: Callback::noop(),
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            sensitivity: DEFAULT_SENSITIVITY,
            enabled: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl PinchZoomConfig {
    fn bounds(&self) -> ScaleBounds {
        ScaleBounds {
            min: self.min_scale,
            max: self.max_scale,
        }
    }
}

pub struct PinchZoomHandle {
    /// Attach to exactly one element.
    pub node_ref: NodeRef,
    /// Multiplicative ratio relative to the committed scale, for an
    /// uncommitted `transform: scale(..)`. 1.0 outside a gesture.
    pub gesture_scale: f64,
    pub is_gesturing: bool,
}

fn two_touch_distance(e: &TouchEvent) -> Option<f64> {
    let touches = e.touches();
    let t0 = touches.item(0)?;
    let t1 = touches.item(1)?;
    Some(touch_distance(
        t0.client_x() as f64,
        t0.client_y() as f64,
        t1.client_x() as f64,
        t1.client_y() as f64,
    ))
}

fn clear_timer(window: &Window, slot: &RefCell<Option<i32>>) {
    if let Some(id) = slot.borrow_mut().take() {
        window.clear_timeout_with_handle(id);
    }
}

fn cancel_frame(window: &Window, slot: &RefCell<Option<i32>>) {
    if let Some(id) = slot.borrow_mut().take() {
        let _ = window.cancel_animation_frame(id);
    }
}

#[hook]
pub fn use_pinch_zoom(config: &PinchZoomConfig) -> PinchZoomHandle {
    let node_ref = use_node_ref();
    let gesture_scale = use_state_eq(|| 1.0_f64);
    let is_gesturing = use_state_eq(|| false);

    let core = use_mut_ref(|| GestureCore::new(config.scale));
    // Listeners attach once per enable; they read the latest props through
    // this cell instead of capturing them.
    let config_ref = use_mut_ref(|| config.clone());
    *config_ref.borrow_mut() = config.clone();
    core.borrow_mut().sync_committed(config.scale);

    {
        let node_ref = node_ref.clone();
        let core = core.clone();
        let config_ref = config_ref.clone();
        let gesture_scale = gesture_scale.clone();
        let is_gesturing = is_gesturing.clone();
        use_effect_with(config.enabled, move |enabled| {
            if !*enabled {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            }
            let Some(window) = web_sys::window() else {
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };
            let Some(element) = node_ref.cast::<HtmlElement>() else {
                // Ref not attached: nothing to bind to, nothing to do.
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };

            let raf_id = Rc::new(RefCell::new(None::<i32>));
            let debounce_id = Rc::new(RefCell::new(None::<i32>));
            let grace_id = Rc::new(RefCell::new(None::<i32>));
            let visual_target = Rc::new(Cell::new(1.0_f64));

            // Applies the latest visual target, at most once per frame.
            let raf_cb = {
                let raf_id = raf_id.clone();
                let visual_target = visual_target.clone();
                let gesture_scale = gesture_scale.clone();
                Rc::new(Closure::wrap(Box::new(move || {
                    raf_id.borrow_mut().take();
                    gesture_scale.set(visual_target.get());
                }) as Box<dyn FnMut()>))
            };

            // Clears the transient transform once the host re-render landed.
            let grace_cb = {
                let grace_id = grace_id.clone();
                let gesture_scale = gesture_scale.clone();
                let is_gesturing = is_gesturing.clone();
                Rc::new(Closure::wrap(Box::new(move || {
                    grace_id.borrow_mut().take();
                    gesture_scale.set(1.0);
                    is_gesturing.set(false);
                }) as Box<dyn FnMut()>))
            };

            // Debounce target: deliver the pending scale, then reset the
            // visual state after the grace delay.
            let commit_cb = {
                let window = window.clone();
                let core = core.clone();
                let config_ref = config_ref.clone();
                let debounce_id = debounce_id.clone();
                let grace_id = grace_id.clone();
                let grace_cb = grace_cb.clone();
                let gesture_scale = gesture_scale.clone();
                let is_gesturing = is_gesturing.clone();
                Rc::new(Closure::wrap(Box::new(move || {
                    debounce_id.borrow_mut().take();
                    let pending = core.borrow_mut().take_pending();
                    if let Some(value) = pending {
                        let on_scale_change = config_ref.borrow().on_scale_change.clone();
                        on_scale_change.emit(value);
                        if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                            grace_cb.as_ref().as_ref().unchecked_ref(),
                            SETTLE_GRACE_MS,
                        ) {
                            *grace_id.borrow_mut() = Some(id);
                        }
                    } else {
                        gesture_scale.set(1.0);
                        is_gesturing.set(false);
                    }
                }) as Box<dyn FnMut()>))
            };

            let schedule_visual = {
                let window = window.clone();
                let raf_id = raf_id.clone();
                let visual_target = visual_target.clone();
                let raf_cb = raf_cb.clone();
                move |ratio: f64| {
                    // Last write wins; one frame request covers the burst.
                    visual_target.set(ratio);
                    if raf_id.borrow().is_none() {
                        if let Ok(id) = window
                            .request_animation_frame(raf_cb.as_ref().as_ref().unchecked_ref())
                        {
                            *raf_id.borrow_mut() = Some(id);
                        }
                    }
                }
            };

            let schedule_commit = {
                let window = window.clone();
                let debounce_id = debounce_id.clone();
                let config_ref = config_ref.clone();
                let commit_cb = commit_cb.clone();
                move || {
                    clear_timer(&window, &debounce_id);
                    let delay = config_ref.borrow().debounce_ms as i32;
                    if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        commit_cb.as_ref().as_ref().unchecked_ref(),
                        delay,
                    ) {
                        *debounce_id.borrow_mut() = Some(id);
                    }
                }
            };

            let touchstart_cb = {
                let window = window.clone();
                let core = core.clone();
                let raf_id = raf_id.clone();
                let debounce_id = debounce_id.clone();
                let grace_id = grace_id.clone();
                let is_gesturing = is_gesturing.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if e.touches().length() != 2 {
                        return;
                    }
                    e.prevent_default();
                    clear_timer(&window, &debounce_id);
                    clear_timer(&window, &grace_id);
                    cancel_frame(&window, &raf_id);
                    if let Some(dist) = two_touch_distance(&e) {
                        core.borrow_mut().begin_pinch(dist);
                        is_gesturing.set(true);
                    }
                }) as Box<dyn FnMut(_)>)
            };

            let touchmove_cb = {
                let core = core.clone();
                let config_ref = config_ref.clone();
                let schedule_visual = schedule_visual.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if e.touches().length() != 2 || !core.borrow().is_pinching() {
                        return;
                    }
                    e.prevent_default();
                    if let Some(dist) = two_touch_distance(&e) {
                        let (bounds, sensitivity) = {
                            let cfg = config_ref.borrow();
                            (cfg.bounds(), cfg.sensitivity)
                        };
                        if let Some(ratio) = core.borrow_mut().update_pinch(dist, bounds, sensitivity)
                        {
                            schedule_visual(ratio);
                        }
                    }
                }) as Box<dyn FnMut(_)>)
            };

            let touchend_cb = {
                let window = window.clone();
                let core = core.clone();
                let raf_id = raf_id.clone();
                let gesture_scale = gesture_scale.clone();
                let is_gesturing = is_gesturing.clone();
                let schedule_commit = schedule_commit.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if e.touches().length() >= 2 {
                        return;
                    }
                    if !core.borrow_mut().end_pinch() {
                        return;
                    }
                    cancel_frame(&window, &raf_id);
                    if core.borrow().has_pending() {
                        schedule_commit();
                    } else {
                        gesture_scale.set(1.0);
                        is_gesturing.set(false);
                    }
                }) as Box<dyn FnMut(_)>)
            };

            let wheel_cb = {
                let window = window.clone();
                let core = core.clone();
                let config_ref = config_ref.clone();
                let grace_id = grace_id.clone();
                let is_gesturing = is_gesturing.clone();
                let schedule_visual = schedule_visual.clone();
                let schedule_commit = schedule_commit.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    // Plain scrolling passes through untouched; ctrl+wheel is
                    // how user agents report a trackpad pinch.
                    if !e.ctrl_key() {
                        return;
                    }
                    e.prevent_default();
                    clear_timer(&window, &grace_id);
                    let (bounds, sensitivity) = {
                        let cfg = config_ref.borrow();
                        (cfg.bounds(), cfg.sensitivity)
                    };
                    let ratio = core.borrow_mut().apply_wheel(e.delta_y(), bounds, sensitivity);
                    is_gesturing.set(true);
                    schedule_visual(ratio);
                    schedule_commit();
                }) as Box<dyn FnMut(_)>)
            };

            // passive:false is required for preventDefault to stick on touch
            // and wheel listeners.
            let opts = AddEventListenerOptions::new();
            opts.set_passive(false);
            let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                touchstart_cb.as_ref().unchecked_ref(),
                &opts,
            );
            let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                touchmove_cb.as_ref().unchecked_ref(),
                &opts,
            );
            let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
                "touchend",
                touchend_cb.as_ref().unchecked_ref(),
                &opts,
            );
            let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
                "touchcancel",
                touchend_cb.as_ref().unchecked_ref(),
                &opts,
            );
            let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                wheel_cb.as_ref().unchecked_ref(),
                &opts,
            );

            Box::new(move || {
                let _ = element.remove_event_listener_with_callback(
                    "touchstart",
                    touchstart_cb.as_ref().unchecked_ref(),
                );
                let _ = element.remove_event_listener_with_callback(
                    "touchmove",
                    touchmove_cb.as_ref().unchecked_ref(),
                );
                let _ = element.remove_event_listener_with_callback(
                    "touchend",
                    touchend_cb.as_ref().unchecked_ref(),
                );
                let _ = element.remove_event_listener_with_callback(
                    "touchcancel",
                    touchend_cb.as_ref().unchecked_ref(),
                );
                let _ = element.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                clear_timer(&window, &debounce_id);
                clear_timer(&window, &grace_id);
                cancel_frame(&window, &raf_id);
                core.borrow_mut().reset();
                gesture_scale.set(1.0);
                is_gesturing.set(false);
                // Frame/timer closures stay alive until the listeners are gone.
                drop(raf_cb);
                drop(grace_cb);
                drop(commit_cb);
            }) as Box<dyn FnOnce()>
        });
    }

    PinchZoomHandle {
        node_ref,
        gesture_scale: *gesture_scale,
        is_gesturing: *is_gesturing,
    }
}
