use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::state::nav::{is_scrolled, MenuState};
use crate::Route;

const LINKS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::Services, "Services"),
    (Route::Partners, "Partners"),
    (Route::Faq, "FAQ"),
    (Route::Contact, "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuState::default);
    let (_, scroll_y) = use_window_scroll();
    let current = use_route::<Route>();
    let scrolled = is_scrolled(scroll_y, config::site().nav_scroll_threshold);

    // New page, start from the top.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        current.clone(),
    );

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggle());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(MenuState::Closed);
        })
    };

    html! {
        <nav class={classes!("navbar", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::site().brand.clone()}
                </Link<Route>>

                <button class={classes!("nav-toggle", menu.is_open().then(|| "active"))} onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", menu.is_open().then(|| "open"))}>
                    { for LINKS.iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then(|| "active"))}>
                                    {*label}
                                </Link<Route>>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}
