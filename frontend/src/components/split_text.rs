use yew::prelude::*;

use crate::components::entrance::Entrance;
use crate::hooks::scroll::use_scroll_trigger;
use crate::motion::split::split_chars;
use crate::motion::stagger::StaggerPreset;
use crate::motion::timeline::Cue;
use crate::motion::trigger::TriggerEvent;

#[derive(Properties, PartialEq)]
pub struct SplitTextProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("h2"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SplitText)]
pub fn split_text(props: &SplitTextProps) -> Html {
    let node = use_node_ref();
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        let on_event = Callback::from(move |event: TriggerEvent| {
            if event == TriggerEvent::Enter {
                entered.set(true);
            }
        });
        use_scroll_trigger(node.clone(), StaggerPreset::SplitChar.trigger(), on_event);
    }

    let preset = StaggerPreset::SplitChar;
    html! {
        <@{props.tag.to_string()} ref={node} class={classes!("text-split", props.class.clone())} aria-label={props.text.clone()}>
            { for split_chars(&props.text).into_iter().enumerate().map(|(index, ch)| html! {
                <Entrance
                    tag="span"
                    class="split-char"
                    cue={Cue { from: preset.from_state(), spec: preset.spec(index) }}
                    play={*entered}
                >
                    {ch}
                </Entrance>
            }) }
        </@>
    }
}
