use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use super::frame::FrameLoop;
use super::listener::WindowListener;
use super::player::paint;
use super::ready::use_page_ready;
use crate::error;
use crate::motion::trigger::{ScrollTrigger, ScrubTrigger, TriggerConfig, TriggerEvent};
use crate::motion::tween::{Channels, VisualState};

fn listen_to_viewport(on_change: Rc<dyn Fn()>) -> Vec<WindowListener> {
    ["scroll", "resize"]
        .into_iter()
        .filter_map(|event| {
            let on_change = on_change.clone();
            match WindowListener::new(event, move || on_change()) {
                Ok(listener) => Some(listener),
                Err(e) => {
                    warn!("Could not listen to {}: {}", event, e);
                    None
                }
            }
        })
        .collect()
}

fn bind_trigger(node: NodeRef, config: TriggerConfig, on_event: Callback<TriggerEvent>) -> Vec<WindowListener> {
    let trigger = RefCell::new(ScrollTrigger::new(config));
    let check: Rc<dyn Fn()> = Rc::new(move || {
        if trigger.borrow().is_spent() {
            return;
        }
        let Some(element) = node.cast::<Element>() else {
            return;
        };
        let viewport = match error::viewport_height() {
            Ok(height) => height,
            Err(e) => {
                debug!("Skipping scroll check: {}", e);
                return;
            }
        };
        let rect = element.get_bounding_client_rect();
        let events = trigger.borrow_mut().update(rect.top(), rect.bottom(), viewport);
        for event in events {
            on_event.emit(event);
        }
    });
    check();
    listen_to_viewport(check)
}

/// Reports `node` crossing the trigger lines while the component is
/// mounted. Binding waits for [`PageReady`](super::ready::PageReady) and
/// evaluates once straight away, so elements already in view fire too.
#[hook]
pub fn use_scroll_trigger(node: NodeRef, config: TriggerConfig, on_event: Callback<TriggerEvent>) {
    let ready = use_page_ready();
    use_effect_with_deps(
        move |ready| {
            let listeners = if *ready { bind_trigger(node, config, on_event) } else { Vec::new() };
            move || drop(listeners)
        },
        ready,
    );
}

struct ParallaxBinding {
    _listeners: Vec<WindowListener>,
    _frames: Rc<FrameLoop>,
}

fn bind_parallax(container: NodeRef, target: NodeRef, distance: f64) -> ParallaxBinding {
    let scrub = Rc::new(RefCell::new(ScrubTrigger::new(1.0)));
    let last_frame = Rc::new(Cell::new(None::<f64>));

    let frames = {
        let scrub = scrub.clone();
        Rc::new(FrameLoop::new(move |now| {
            let dt = last_frame.replace(Some(now)).map(|last| (now - last) / 1000.0).unwrap_or(0.016);
            let mut scrub = scrub.borrow_mut();
            let progress = scrub.advance(dt);
            paint(&target, VisualState::offset(0.0, distance * progress), Channels::TransformOnly);
            if scrub.is_settled() {
                last_frame.set(None);
                false
            } else {
                true
            }
        }))
    };

    let observe: Rc<dyn Fn()> = {
        let frames = frames.clone();
        Rc::new(move || {
            if let Some(element) = container.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                scrub.borrow_mut().observe(rect.top(), rect.height());
                frames.ensure_running();
            }
        })
    };
    observe();

    ParallaxBinding { _listeners: listen_to_viewport(observe), _frames: frames }
}

#[hook]
pub fn use_parallax(container: NodeRef, target: NodeRef, distance: f64) {
    let ready = use_page_ready();
    use_effect_with_deps(
        move |ready| {
            let binding = ready.then(|| bind_parallax(container, target, distance));
            move || drop(binding)
        },
        ready,
    );
}
