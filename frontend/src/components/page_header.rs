use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::entrance::Entrance;
use crate::hooks::ready::use_page_ready;
use crate::motion::timeline::{page_header_timeline, HeaderPart};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub crumb: AttrValue,
    pub title: AttrValue,
    pub lead: AttrValue,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let ready = use_page_ready();
    let timeline = page_header_timeline();
    let cue = |part| timeline.cue(part, 0);

    let (Some(crumb), Some(title), Some(lead)) = (cue(HeaderPart::Breadcrumb), cue(HeaderPart::Title), cue(HeaderPart::Lead)) else {
        return html! {};
    };

    html! {
        <section class="page-header">
            <Entrance class="breadcrumb" cue={crumb} play={ready}>
                <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                <span class="breadcrumb-sep">{"/"}</span>
                <span>{props.crumb.clone()}</span>
            </Entrance>
            <Entrance tag="h1" cue={title} play={ready}>{props.title.clone()}</Entrance>
            <Entrance tag="p" cue={lead} play={ready}>{props.lead.clone()}</Entrance>
        </section>
    }
}
