use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::hooks::listener::WindowListener;
use crate::hooks::player::{use_offset_player, PlayerHandle};
use crate::hooks::ready::use_page_ready;
use crate::motion::marquee::{duplicate, loop_spec, loop_target};
use crate::motion::tween::VisualState;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: Vec<AttrValue>,
}

fn start_loop(track: &NodeRef, player: &PlayerHandle) {
    let Some(element) = track.cast::<Element>() else {
        return;
    };
    let width = element.scroll_width() as f64;
    if width <= 0.0 {
        debug!("Marquee track has no width yet, not starting");
        return;
    }
    debug!("Marquee looping over {}px", width / 2.0);
    player.set(VisualState::VISIBLE);
    player.repeat(loop_target(width), loop_spec(config::site().marquee_seconds), false);
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let track = use_node_ref();
    let player = use_offset_player(track.clone());
    let ready = use_page_ready();

    {
        let track = track.clone();
        // Width is only meaningful once layout has settled after load.
        use_effect_with_deps(
            move |ready| {
                let mut listener = None;
                if *ready {
                    start_loop(&track, &player);
                    listener = WindowListener::new("resize", move || start_loop(&track, &player)).ok();
                }
                move || drop(listener)
            },
            ready,
        );
    }

    html! {
        <div class="marquee">
            <div class="marquee-track" ref={track}>
                { for duplicate(&props.items).into_iter().map(|item| html! {
                    <span class="marquee-item">{item}</span>
                }) }
            </div>
        </div>
    }
}
