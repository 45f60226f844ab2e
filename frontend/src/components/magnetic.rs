use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::player::use_offset_player;
use crate::motion::magnetic::{magnetic_offset, Bounds, FOLLOW, RELEASE};
use crate::motion::tween::VisualState;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub to: Option<Route>,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let player = use_offset_player(node.clone());
    let navigator = use_navigator();

    let onmousemove = {
        let player = player.clone();
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let pointer = (e.client_x() as f64, e.client_y() as f64);
            player.to(magnetic_offset(pointer, bounds), FOLLOW);
        })
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| player.to(VisualState::VISIBLE, RELEASE));

    let class = classes!("btn", props.class.clone());
    match (&props.to, &props.href) {
        (Some(route), _) => {
            let href = route.to_path();
            let onclick = {
                let route = route.clone();
                Callback::from(move |e: MouseEvent| {
                    if let Some(navigator) = &navigator {
                        e.prevent_default();
                        navigator.push(&route);
                    }
                })
            };
            html! {
                <a ref={node} {href} {class} {onclick} {onmousemove} {onmouseleave}>
                    { for props.children.iter() }
                </a>
            }
        }
        (None, Some(href)) => html! {
            <a ref={node} href={href.clone()} {class} {onmousemove} {onmouseleave}>
                { for props.children.iter() }
            </a>
        },
        (None, None) => html! {
            <button ref={node} type={props.button_type.clone()} {class} {onmousemove} {onmouseleave}>
                { for props.children.iter() }
            </button>
        },
    }
}
