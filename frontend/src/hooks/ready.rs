use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;

use super::listener::WindowListener;
use crate::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageReady(pub bool);

#[hook]
pub fn use_page_ready() -> bool {
    use_context::<PageReady>().map(|ready| ready.0).unwrap_or(true)
}

fn document_complete() -> bool {
    error::document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false)
}

#[hook]
pub fn use_load_then_delay(delay_ms: u32) -> bool {
    let ready = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let ready = ready.clone();
        use_effect_with_deps(
            move |_| {
                let start_timer = {
                    let pending = pending.clone();
                    move || {
                        let ready = ready.clone();
                        debug!("Page loaded, clearing preloader in {}ms", delay_ms);
                        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || ready.set(true)));
                    }
                };

                let mut listener = None;
                if document_complete() {
                    start_timer();
                } else {
                    let mut start_timer = Some(start_timer);
                    match WindowListener::new("load", move || {
                        if let Some(start) = start_timer.take() {
                            start();
                        }
                    }) {
                        Ok(bound) => listener = Some(bound),
                        Err(e) => warn!("Could not wait for page load: {}", e),
                    }
                }

                move || {
                    drop(listener);
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    *ready
}
