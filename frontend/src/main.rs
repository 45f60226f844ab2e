use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod motion {
    pub mod counter;
    pub mod ease;
    pub mod magnetic;
    pub mod marquee;
    pub mod reveal;
    pub mod split;
    pub mod stagger;
    pub mod timeline;
    pub mod trigger;
    pub mod tween;
}
mod state {
    pub mod accordion;
    pub mod contact;
    pub mod nav;
}
mod hooks {
    pub mod frame;
    pub mod listener;
    pub mod player;
    pub mod ready;
    pub mod scroll;
}
mod components {
    pub mod anchor;
    pub mod contact_form;
    pub mod counter;
    pub mod entrance;
    pub mod footer;
    pub mod hero;
    pub mod magnetic;
    pub mod marquee;
    pub mod nav;
    pub mod page_header;
    pub mod preloader;
    pub mod reveal;
    pub mod split_text;
    pub mod stagger;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod partners;
    pub mod services;
}

use components::{footer::SiteFooter, nav::Nav, preloader::Preloader};
use hooks::ready::{use_load_then_delay, PageReady};
use pages::{contact::Contact, faq::Faq, home::Home, partners::Partners, services::Services};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/partners")]
    Partners,
    #[at("/contact")]
    Contact,
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Partners => {
            info!("Rendering Partners page");
            html! { <Partners /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="page-header">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
                </section>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Nothing animates until the page has loaded and the preloader is gone;
    // every component has bound its triggers by then.
    let ready = use_load_then_delay(config::site().preloader_delay_ms);

    html! {
        <BrowserRouter>
            <Preloader loaded={ready} />
            <ContextProvider<PageReady> context={PageReady(ready)}>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <SiteFooter />
            </ContextProvider<PageReady>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
