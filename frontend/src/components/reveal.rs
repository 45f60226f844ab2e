use yew::prelude::*;

use crate::hooks::player::use_player;
use crate::hooks::scroll::use_scroll_trigger;
use crate::motion::reveal::RevealVariant;
use crate::motion::trigger::{TriggerConfig, TriggerEvent};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(RevealVariant::FadeUp)]
    pub variant: RevealVariant,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let variant = props.variant;
    let player = use_player(node.clone(), variant.hidden());

    let on_event = Callback::from(move |event: TriggerEvent| {
        player.play(|player, now| variant.play(player, event, now));
    });
    use_scroll_trigger(node.clone(), TriggerConfig::REVEAL, on_event);

    html! {
        <@{props.tag.to_string()}
            ref={node}
            class={classes!(variant.class_name(), props.class.clone())}
            style={variant.hidden().style_attr()}
        >
            { for props.children.iter() }
        </@>
    }
}
