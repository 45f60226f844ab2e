use yew::prelude::*;

use crate::hooks::player::use_player;
use crate::motion::timeline::Cue;
use crate::motion::tween::VisualState;

#[derive(Properties, PartialEq)]
pub struct EntranceProps {
    pub cue: Cue,
    pub play: bool,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Entrance)]
pub fn entrance(props: &EntranceProps) -> Html {
    let node = use_node_ref();
    let player = use_player(node.clone(), props.cue.from);

    {
        let cue = props.cue;
        use_effect_with_deps(
            move |play| {
                if *play {
                    player.to(VisualState::VISIBLE, cue.spec);
                }
                || ()
            },
            props.play,
        );
    }

    html! {
        <@{props.tag.to_string()} ref={node} class={props.class.clone()} style={props.cue.from.style_attr()}>
            { for props.children.iter() }
        </@>
    }
}
