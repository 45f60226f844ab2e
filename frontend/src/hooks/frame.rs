use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

struct LoopState {
    pending: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

/// Drives a per-frame callback through `requestAnimationFrame`.
///
/// The callback receives the frame timestamp and returns whether it wants
/// another frame. Idle loops cost nothing; `ensure_running` wakes them.
pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let state = Rc::new(RefCell::new(LoopState { pending: None, callback: None }));
        let weak = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.borrow_mut().pending = None;
            if on_frame(timestamp) {
                request_frame(&state);
            }
        }) as Box<dyn FnMut(f64)>);
        state.borrow_mut().callback = Some(callback);
        FrameLoop { state }
    }

    pub fn ensure_running(&self) {
        if self.state.borrow().pending.is_none() {
            request_frame(&self.state);
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.state.borrow_mut().pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(state: &Rc<RefCell<LoopState>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let requested = match state.borrow().callback.as_ref() {
        Some(callback) => window.request_animation_frame(callback.as_ref().unchecked_ref()),
        None => return,
    };
    match requested {
        Ok(id) => state.borrow_mut().pending = Some(id),
        Err(e) => warn!("requestAnimationFrame failed: {:?}", e),
    }
}
