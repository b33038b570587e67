use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::follower::{FollowerState, TIP_OFFSET};
use crate::theme::use_theme;

// A synthetic cursor is meaningless on touch-only devices, so the component
// stays inert unless a hover-capable pointer is present.
fn pointer_capable() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(pointer: fine)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

// Arrow marker trailing the real pointer, rotated along the direction of
// travel. The math lives in FollowerState; this only wires it to mousemove
// events and the frame scheduler.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let theme = use_theme();
    let active = use_state(pointer_capable);
    let marker_ref = use_node_ref();

    {
        let marker_ref = marker_ref.clone();
        use_effect_with_deps(
            move |active: &bool| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;

                if *active {
                    if let Some(window) = web_sys::window() {
                        let state = Rc::new(RefCell::new(FollowerState::new()));

                        // Pointer samples feed the targets.
                        let move_closure = {
                            let state = state.clone();
                            Closure::wrap(Box::new(move |event: MouseEvent| {
                                state
                                    .borrow_mut()
                                    .observe(event.client_x() as f64, event.client_y() as f64);
                            }) as Box<dyn FnMut(MouseEvent)>)
                        };
                        let _ = window.add_event_listener_with_callback(
                            "mousemove",
                            move_closure.as_ref().unchecked_ref(),
                        );

                        // Self-rescheduling frame loop. The closure slot is
                        // emptied on teardown, which stops the rescheduling;
                        // the handle lets teardown cancel the pending frame.
                        let frame_handle = Rc::new(Cell::new(None::<i32>));
                        let frame_closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                            Rc::new(RefCell::new(None));
                        {
                            let state = state.clone();
                            let marker_ref = marker_ref.clone();
                            let frame_handle = frame_handle.clone();
                            let frame_slot = frame_closure.clone();
                            *frame_closure.borrow_mut() =
                                Some(Closure::wrap(Box::new(move || {
                                    {
                                        let mut state = state.borrow_mut();
                                        state.step();
                                        if let Some(marker) = marker_ref.cast::<HtmlElement>() {
                                            let _ = marker
                                                .style()
                                                .set_property("transform", &state.transform());
                                        }
                                    }
                                    if let (Some(window), Some(frame)) =
                                        (web_sys::window(), frame_slot.borrow().as_ref())
                                    {
                                        if let Ok(handle) = window.request_animation_frame(
                                            frame.as_ref().unchecked_ref(),
                                        ) {
                                            frame_handle.set(Some(handle));
                                        }
                                    }
                                })
                                    as Box<dyn FnMut()>));
                        }
                        if let Some(frame) = frame_closure.borrow().as_ref() {
                            if let Ok(handle) =
                                window.request_animation_frame(frame.as_ref().unchecked_ref())
                            {
                                frame_handle.set(Some(handle));
                            }
                        }

                        cleanup = Some(Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "mousemove",
                                move_closure.as_ref().unchecked_ref(),
                            );
                            if let Some(handle) = frame_handle.take() {
                                let _ = window.cancel_animation_frame(handle);
                            }
                            // Dropping the closures guarantees no further
                            // state mutation after unmount.
                            frame_closure.borrow_mut().take();
                            drop(move_closure);
                        }));
                    }
                }

                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            *active,
        );
    }

    if !*active {
        return html! {};
    }

    let colors = theme.colors();
    html! {
        <>
            <style>
                {"* { cursor: none !important; }"}
            </style>
            <div
                ref={marker_ref}
                style="position: fixed; top: 0; left: 0; width: 32px; height: 32px; \
                       pointer-events: none; z-index: 9999; will-change: transform; \
                       transform-origin: 16px 2px;"
            >
                <svg
                    width="32"
                    height="32"
                    viewBox="0 0 32 32"
                    style={format!("display: block; filter: drop-shadow(0 0 8px {});", colors.glow)}
                >
                    <path
                        d="M16 2 C16 2, 18 3, 19.5 5 L28 22 C28.5 23, 28 24, 27 24.5 L17 20.5 \
                           C16.5 20.3, 15.5 20.3, 15 20.5 L5 24.5 C4 24, 3.5 23, 4 22 L12.5 5 \
                           C14 3, 16 2, 16 2 Z"
                        fill="rgba(0,0,0,0.9)"
                        stroke={colors.primary}
                        stroke-width="2"
                        stroke-linejoin="round"
                        stroke-linecap="round"
                    />
                </svg>
            </div>
        </>
    }
}

// TIP_OFFSET is encoded both in the transform math and in the inline
// transform-origin above; keep them in sync.
const _: () = {
    assert!(TIP_OFFSET.0 == 16.0 && TIP_OFFSET.1 == 2.0);
};
