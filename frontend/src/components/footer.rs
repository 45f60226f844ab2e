use chrono::{Datelike, Utc};
use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::entrance::Entrance;
use crate::config;
use crate::hooks::scroll::use_scroll_trigger;
use crate::motion::stagger::StaggerPreset;
use crate::motion::timeline::Cue;
use crate::motion::trigger::TriggerEvent;
use crate::state::accordion::{footer_accordion_active, AccordionState};
use crate::Route;

const COLUMNS: [(&str, &[(Route, &str)]); 3] = [
    ("Studio", &[(Route::Home, "Home"), (Route::Services, "Services"), (Route::Partners, "Partners")]),
    ("Support", &[(Route::Faq, "FAQ"), (Route::Contact, "Contact")]),
    ("Work", &[(Route::Services, "Web design"), (Route::Services, "Motion"), (Route::Services, "Brand")]),
];

fn cue(index: usize) -> Cue {
    let preset = StaggerPreset::Footer;
    Cue { from: preset.from_state(), spec: preset.spec(index) }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let node = use_node_ref();
    let entered = use_state(|| false);
    let columns = use_state(AccordionState::default);
    let (width, _) = use_window_size();
    let breakpoint = config::site().footer_breakpoint;
    let folding = footer_accordion_active(width, breakpoint);

    {
        let entered = entered.clone();
        let on_event = Callback::from(move |event: TriggerEvent| {
            if event == TriggerEvent::Enter {
                entered.set(true);
            }
        });
        use_scroll_trigger(node.clone(), StaggerPreset::Footer.trigger(), on_event);
    }

    // Desktop layout shows every column, so drop any mobile selection.
    {
        let columns = columns.clone();
        use_effect_with_deps(
            move |folding| {
                if !*folding && columns.open().is_some() {
                    columns.set(columns.close_all());
                }
                || ()
            },
            folding,
        );
    }

    let toggle = |index: usize| {
        let columns = columns.clone();
        Callback::from(move |_: MouseEvent| {
            if !folding {
                return;
            }
            debug!("Footer column {} toggled", index);
            columns.set(columns.toggle(index));
        })
    };

    let contact = &config::site().contact;
    html! {
        <footer class="footer" ref={node}>
            <div class="footer-grid">
                <Entrance class="footer-brand" cue={cue(0)} play={*entered}>
                    <h3>{config::site().brand.clone()}</h3>
                    <p>{"Motion-first marketing sites for teams who care how things feel."}</p>
                </Entrance>
                { for COLUMNS.iter().enumerate().map(|(index, (title, links))| html! {
                    <Entrance class={classes!("footer-col", columns.is_open(index).then(|| "open"))} cue={cue(index + 1)} play={*entered}>
                        <h4 onclick={toggle(index)}>{*title}</h4>
                        <ul>
                            { for links.iter().map(|(route, label)| html! {
                                <li><Link<Route> to={route.clone()}>{*label}</Link<Route>></li>
                            }) }
                        </ul>
                    </Entrance>
                }) }
                <Entrance class="footer-contact" cue={cue(COLUMNS.len() + 1)} play={*entered}>
                    <a href={format!("mailto:{}", contact.email)}>{contact.email.clone()}</a>
                    <span>{contact.phone.clone()}</span>
                </Entrance>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", Utc::now().year(), config::site().brand)}
            </div>
        </footer>
    }
}
