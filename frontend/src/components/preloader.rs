use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub loaded: bool,
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    html! {
        <div class={classes!("preloader", props.loaded.then(|| "loaded"))} aria-hidden={props.loaded.to_string()}>
            <span class="preloader-mark">{config::site().brand.chars().take(1).collect::<String>()}</span>
        </div>
    }
}
