use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::page_header::PageHeader;
use crate::components::reveal::Reveal;
use crate::state::accordion::AccordionState;

#[derive(Clone, PartialEq)]
struct AccordionScope {
    state: AccordionState,
    toggle: Callback<usize>,
}

#[hook]
fn use_accordion_scope() -> AccordionScope {
    let state = use_state(AccordionState::default);
    let toggle = {
        let state = state.clone();
        Callback::from(move |id: usize| {
            let next = state.toggle(id);
            debug!("Accordion now open: {:?}", next.open());
            state.set(next);
        })
    };
    AccordionScope { state: *state, toggle }
}

fn toggle_for(scope: &Option<AccordionScope>, index: usize) -> Callback<MouseEvent> {
    let toggle = scope.as_ref().map(|scope| scope.toggle.clone());
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(toggle) = &toggle {
            toggle.emit(index);
        }
    })
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let scope = use_context::<AccordionScope>();
    let is_open = scope.as_ref().map(|scope| scope.state.is_open(props.index)).unwrap_or(false);

    html! {
        <div class={classes!("faq-item", if is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle_for(&scope, props.index)}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqGroupProps {
    index: usize,
    title: String,
    children: Children,
}

#[function_component(FaqGroup)]
fn faq_group(props: &FaqGroupProps) -> Html {
    let groups = use_context::<AccordionScope>();
    let items = use_accordion_scope();
    let is_open = groups.as_ref().map(|scope| scope.state.is_open(props.index)).unwrap_or(false);

    html! {
        <div class={classes!("faq-group", if is_open { "open" } else { "" })}>
            <button class="faq-group-header" onclick={toggle_for(&groups, props.index)}>
                <span>{&props.title}</span>
                <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-group-body">
                <ContextProvider<AccordionScope> context={items}>
                    { for props.children.iter() }
                </ContextProvider<AccordionScope>>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let groups = use_accordion_scope();

    html! {
        <div class="faq-page">
            <PageHeader
                crumb="FAQ"
                title="Frequently Asked Questions"
                lead="Everything you need to know before we start working together."
            />

            <Reveal tag="section" class="faq-section">
                <ContextProvider<AccordionScope> context={groups}>
                    <FaqGroup index={0} title="Working with us">
                        <FaqItem index={0} question="How long does a typical project take?">
                            <p>{"Most marketing sites go from kickoff to launch in six to ten weeks. A single landing page can ship in two."}</p>
                        </FaqItem>
                        <FaqItem index={1} question="Do you work with existing brands?">
                            <p>{"Yes. We bring your identity to the web and only suggest changes where motion or layout needs them."}</p>
                        </FaqItem>
                        <FaqItem index={2} question="Who owns the finished site?">
                            <p>{"You do. Source, assets and accounts are handed over at launch."}</p>
                        </FaqItem>
                    </FaqGroup>

                    <FaqGroup index={1} title="Motion & performance">
                        <FaqItem index={0} question="Will animations slow my site down?">
                            <p>{"Animations only touch transform and opacity, which browsers composite cheaply. Pages stay fully usable before any motion starts."}</p>
                        </FaqItem>
                        <FaqItem index={1} question="What happens on older browsers?">
                            <p>{"Content simply appears without the motion. Nothing depends on an animation finishing."}</p>
                        </FaqItem>
                    </FaqGroup>

                    <FaqGroup index={2} title="Pricing">
                        <FaqItem index={0} question="How do you price projects?">
                            <p>{"Fixed scope, fixed price, agreed after a discovery call. No hourly surprises."}</p>
                        </FaqItem>
                        <FaqItem index={1} question="Do you offer ongoing support?">
                            <p>{"Monthly care plans cover updates, new sections and small design tweaks."}</p>
                        </FaqItem>
                    </FaqGroup>
                </ContextProvider<AccordionScope>>
            </Reveal>
        </div>
    }
}
