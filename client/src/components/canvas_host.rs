//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns the animation loop. This host hands it a fresh
//! `SceneConfig` whenever the edited scene changes, forwards pointer and wheel
//! input, and turns `view_reset_seq` bumps into camera resets.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::camera::Point;
#[cfg(feature = "csr")]
use canvas::engine::Engine;
#[cfg(feature = "csr")]
use canvas::input::{Button, DragEnd, WheelDelta};
use canvas::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};

use crate::state::params::ParamsState;
use crate::state::ui::UiState;

#[cfg(feature = "csr")]
fn client_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(feature = "csr")]
fn end_drag(engine: &Rc<RefCell<Option<Engine>>>, ev: &web_sys::PointerEvent, reason: DragEnd) {
    if let Some(engine) = engine.borrow_mut().as_mut() {
        engine.on_pointer_end(ev.pointer_id(), reason);
    }
}

/// Canvas host component.
///
/// Mounts the engine on first render, restarts its animation on every scene
/// change, and stops it when the component unmounts.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let params = expect_context::<RwSignal<ParamsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(not(feature = "csr"))]
    let _ = (params, ui);

    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        // Only scene edits restart the animation; tab or sync changes don't.
        let scene = Memo::new(move |_| params.with(ParamsState::scene));
        Effect::new(move || {
            let config = scene.get();
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let mut slot = engine.borrow_mut();
            if slot.is_none() {
                match Engine::new(canvas) {
                    Ok(instance) => *slot = Some(instance),
                    Err(err) => {
                        log::error!("canvas unavailable: {err}");
                        return;
                    }
                }
            }
            if let Some(instance) = slot.as_mut() {
                if let Err(err) = instance.apply_config(config) {
                    log::warn!("animation did not start: {err}");
                }
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let _ = ui.with(|u| u.view_reset_seq);
            if let Some(instance) = engine.borrow_mut().as_mut() {
                instance.reset_view();
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let stored = StoredValue::new_local(Rc::clone(&engine));
        on_cleanup(move || {
            stored.try_with_value(|engine| {
                if let Some(mut instance) = engine.borrow_mut().take() {
                    instance.stop();
                }
            });
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    ev.prevent_default();
                    engine.on_pointer_down(client_point(&ev), Button::from_dom(ev.button()), ev.pointer_id());
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.on_pointer_move(client_point(&ev), ev.pointer_id());
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| end_drag(&engine, &ev, DragEnd::Up)
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_cancel = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| end_drag(&engine, &ev, DragEnd::Cancel)
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| end_drag(&engine, &ev, DragEnd::Leave)
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_lost_capture = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| end_drag(&engine, &ev, DragEnd::LostCapture)
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.on_wheel(client_point(&ev), WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() });
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    view! {
        <div class="stage">
            <canvas
                class="stage__canvas touch-none"
                node_ref=canvas_ref
                width=DEFAULT_CANVAS_WIDTH.to_string()
                height=DEFAULT_CANVAS_HEIGHT.to_string()
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
                on:pointerleave=on_pointer_leave
                on:lostpointercapture=on_lost_capture
                on:wheel=on_wheel
            ></canvas>
        </div>
    }
}
