//! Yew hooks binding the pure motion primitives to the browser.
//!
//! Every scroll listener and interval registered here is released in its
//! owning effect's cleanup, so a section torn down mid-scroll leaves no
//! dangling callbacks behind.

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::prelude::*;

use super::carousel::{CarouselAction, CarouselState};
use super::progress::{self, SectionMetrics};
use super::reveal::RevealLatch;

/// How a section's scroll progress is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// 0.0 as the section top enters at the viewport bottom, 1.0 as its
    /// bottom leaves at the viewport top.
    EntryToExit,
    /// Progress through the extended scroll distance of a pinned section.
    Pinned,
}

fn viewport_height(window: &web_sys::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

fn measure(section: &NodeRef, mode: ProgressMode, window: &web_sys::Window) -> f64 {
    let viewport = viewport_height(window);
    section
        .cast::<Element>()
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            let metrics = SectionMetrics::new(rect.top(), rect.height());
            match mode {
                ProgressMode::EntryToExit => progress::entry_to_exit(metrics, viewport),
                ProgressMode::Pinned => progress::pinned(metrics, viewport),
            }
        })
        .unwrap_or(0.0)
}

/// Continuous scroll progress of the section behind `section`, recomputed
/// from its bounding box on every scroll and resize tick. An unmounted or
/// unmeasured section reads as 0.0.
#[hook]
pub fn use_section_progress(section: NodeRef, mode: ProgressMode) -> f64 {
    let value = use_state_eq(|| 0.0f64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |mode| {
                let mode = *mode;
                let window = web_sys::window().unwrap();
                let measured_window = window.clone();
                let on_tick = Closure::wrap(Box::new(move || {
                    value.set(measure(&section, mode, &measured_window));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", on_tick.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback("resize", on_tick.as_ref().unchecked_ref())
                    .unwrap();

                // Measure once before the first scroll arrives.
                on_tick
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback("scroll", on_tick.as_ref().unchecked_ref())
                        .unwrap();
                    window
                        .remove_event_listener_with_callback("resize", on_tick.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            mode,
        );
    }

    *value
}

/// One-shot visibility flag for `node`: flips to true the first time the
/// element crosses into view and stays true until unmount.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);
    let latch = use_mut_ref(RevealLatch::default);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let measured_window = window.clone();
                let on_tick = Closure::wrap(Box::new(move || {
                    if latch.borrow().is_visible() {
                        return;
                    }
                    let viewport = viewport_height(&measured_window);
                    if let Some(element) = node.cast::<Element>() {
                        let top = element.get_bounding_client_rect().top();
                        if latch.borrow_mut().observe(top, viewport, threshold) {
                            visible.set(true);
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", on_tick.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback("resize", on_tick.as_ref().unchecked_ref())
                    .unwrap();

                on_tick
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback("scroll", on_tick.as_ref().unchecked_ref())
                        .unwrap();
                    window
                        .remove_event_listener_with_callback("resize", on_tick.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            (),
        );
    }

    *visible
}

/// Rotating index advanced on a fixed cadence for as long as the component
/// stays mounted. Exactly one interval lives per instance; dropping it in
/// the effect cleanup cancels the timer on every exit path.
#[hook]
pub fn use_autoplay(len: usize, period_ms: u32) -> UseReducerHandle<CarouselState> {
    let carousel = use_reducer(move || CarouselState::new(len));

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let ticker = Interval::new(period_ms, move || {
                    carousel.dispatch(CarouselAction::Advance);
                });
                move || drop(ticker)
            },
            (),
        );
    }

    carousel
}

/// True once the window has scrolled past `threshold` pixels. Drives the
/// compact/solid navbar treatment.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let measured_window = window.clone();
                let on_scroll = Closure::wrap(Box::new(move || {
                    let y = measured_window.scroll_y().unwrap_or(0.0);
                    scrolled.set(y > threshold);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                    .unwrap();

                on_scroll
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            (),
        );
    }

    *scrolled
}
