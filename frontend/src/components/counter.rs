use log::debug;
use yew::prelude::*;

use crate::error;
use crate::hooks::frame::FrameLoop;
use crate::hooks::scroll::use_scroll_trigger;
use crate::motion::counter::{parse_target, Counter};
use crate::motion::trigger::{TriggerConfig, TriggerEvent};

#[derive(Properties, PartialEq)]
pub struct StatNumberProps {
    #[prop_or_default]
    pub count: Option<AttrValue>,
    #[prop_or_default]
    pub fallback: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(StatNumber)]
pub fn stat_number(props: &StatNumberProps) -> Html {
    let node = use_node_ref();
    let value_ref = use_node_ref();
    let target = parse_target(props.count.as_deref());
    let counter = use_mut_ref(move || target.map(|target| Counter::new(0, target)));

    let frames = {
        let counter = counter.clone();
        let value_ref = value_ref.clone();
        use_state(move || {
            FrameLoop::new(move |now| {
                let counter = counter.borrow();
                let Some(counter) = counter.as_ref() else {
                    return false;
                };
                // Rewrite the rendered text node in place so the vdom keeps owning it.
                if let Some(text) = value_ref.get().and_then(|value| value.first_child()) {
                    text.set_node_value(Some(&counter.value_at(now).to_string()));
                }
                !counter.is_finished(now)
            })
        })
    };

    let on_event = {
        let counter = counter.clone();
        Callback::from(move |event: TriggerEvent| {
            if event != TriggerEvent::Enter {
                return;
            }
            let mut counter = counter.borrow_mut();
            let Some(counter) = counter.as_mut() else {
                return;
            };
            if counter.begin(error::now()) {
                debug!("Counting up to {}", counter.target());
                frames.ensure_running();
            }
        })
    };
    use_scroll_trigger(node.clone(), TriggerConfig::once_at(0.85), on_event);

    html! {
        <div class="stat-number" ref={node} data-count={props.count.clone()}>
            if target.is_some() {
                <span ref={value_ref}>{"0"}</span>
            } else {
                <span>{props.fallback.clone()}</span>
            }
            <span class="stat-suffix">{props.suffix.clone()}</span>
        </div>
    }
}
