use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use super::frame::FrameLoop;
use crate::error;
use crate::motion::tween::{Channels, Player, TweenSpec, VisualState};

pub fn paint(node: &NodeRef, state: VisualState, channels: Channels) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let style = element.style();
        for (property, value) in channels.properties(&state) {
            let _ = style.set_property(property, &value);
        }
    }
}

#[derive(Clone)]
pub struct PlayerHandle {
    node: NodeRef,
    player: Rc<RefCell<Player>>,
    frames: Rc<FrameLoop>,
    channels: Channels,
}

impl PlayerHandle {
    fn new(node: NodeRef, initial: VisualState, channels: Channels) -> Self {
        let player = Rc::new(RefCell::new(Player::new(initial)));
        let frames = {
            let player = player.clone();
            let node = node.clone();
            FrameLoop::new(move |now| {
                let mut player = player.borrow_mut();
                let state = player.tick(now);
                paint(&node, state, channels);
                player.is_animating()
            })
        };
        PlayerHandle { node, player, frames: Rc::new(frames), channels }
    }

    pub fn set(&self, state: VisualState) {
        self.player.borrow_mut().set(state);
        paint(&self.node, state, self.channels);
    }

    pub fn to(&self, target: VisualState, spec: TweenSpec) {
        self.play(|player, now| player.to(target, spec, now));
    }

    pub fn repeat(&self, target: VisualState, spec: TweenSpec, yoyo: bool) {
        self.play(|player, now| player.repeat(target, spec, yoyo, now));
    }

    pub fn play(&self, start: impl FnOnce(&mut Player, f64)) {
        start(&mut self.player.borrow_mut(), error::now());
        self.frames.ensure_running();
    }
}

#[hook]
pub fn use_player(node: NodeRef, initial: VisualState) -> PlayerHandle {
    let handle = use_state(move || PlayerHandle::new(node, initial, Channels::All));
    (*handle).clone()
}

#[hook]
pub fn use_offset_player(node: NodeRef) -> PlayerHandle {
    let handle = use_state(move || PlayerHandle::new(node, VisualState::VISIBLE, Channels::TransformOnly));
    (*handle).clone()
}
