use yew::prelude::*;

use crate::hooks::player::use_player;
use crate::hooks::scroll::use_scroll_trigger;
use crate::motion::stagger::StaggerPreset;
use crate::motion::trigger::TriggerEvent;
use crate::motion::tween::VisualState;

#[derive(Properties, PartialEq)]
pub struct StaggerItemProps {
    pub preset: StaggerPreset,
    pub index: usize,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(StaggerItem)]
pub fn stagger_item(props: &StaggerItemProps) -> Html {
    let node = use_node_ref();
    let preset = props.preset;
    let index = props.index;
    let player = use_player(node.clone(), preset.from_state());

    let on_event = Callback::from(move |event: TriggerEvent| {
        if event == TriggerEvent::Enter {
            player.to(VisualState::VISIBLE, preset.spec(index));
        }
    });
    use_scroll_trigger(node.clone(), preset.trigger(), on_event);

    html! {
        <@{props.tag.to_string()} ref={node} class={props.class.clone()} style={preset.from_state().style_attr()}>
            { for props.children.iter() }
        </@>
    }
}
