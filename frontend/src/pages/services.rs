use yew::prelude::*;

use crate::components::magnetic::MagneticButton;
use crate::components::page_header::PageHeader;
use crate::components::reveal::Reveal;
use crate::components::stagger::StaggerItem;
use crate::motion::reveal::RevealVariant;
use crate::motion::stagger::StaggerPreset;
use crate::Route;

pub const SERVICES: [(&str, &str, &str); 6] = [
    ("◆", "Brand identity", "Logos, type and color systems that hold up from favicon to billboard."),
    ("▲", "Web design", "Layouts built around the story you need a visitor to follow."),
    ("●", "Development", "Fast, accessible front ends on a stack your team already knows."),
    ("■", "Motion design", "Scroll and hover choreography that points at what matters."),
    ("✦", "Content", "Copy and imagery written for the page, not pasted onto it."),
    ("⬢", "Care plans", "Monthly updates, experiments and fixes after launch."),
];

const PROCESS: [(&str, &str); 3] = [
    ("Discover", "A workshop to pin down audience, message and what success looks like."),
    ("Design", "Wireframes, then full visuals with motion studies for the key moments."),
    ("Deliver", "Build, test on real devices, launch, and hand over everything."),
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <PageHeader
                crumb="Services"
                title="What we do"
                lead="Six disciplines, one team, and a single point of contact from kickoff to launch."
            />

            <section class="services-grid">
                { for SERVICES.iter().enumerate().map(|(index, (icon, title, blurb))| html! {
                    <StaggerItem preset={StaggerPreset::Service} {index} class="service-card">
                        <span class="service-icon">{*icon}</span>
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                    </StaggerItem>
                }) }
            </section>

            <section class="process">
                { for PROCESS.iter().enumerate().map(|(index, (step, text))| {
                    let variant = if index % 2 == 0 { RevealVariant::SlideLeft } else { RevealVariant::SlideRight };
                    html! {
                        <Reveal {variant} class="process-step">
                            <span class="process-index">{format!("0{}", index + 1)}</span>
                            <h3>{*step}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    }
                }) }
            </section>

            <Reveal tag="section" variant={RevealVariant::Scale} class="cta">
                <h2>{"Not sure which you need?"}</h2>
                <MagneticButton to={Route::Contact} class="btn-primary">{"Ask us"}</MagneticButton>
            </Reveal>
        </div>
    }
}
