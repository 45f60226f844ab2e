use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::counter::StatNumber;
use crate::components::hero::Hero;
use crate::components::magnetic::MagneticButton;
use crate::components::marquee::Marquee;
use crate::components::reveal::Reveal;
use crate::components::split_text::SplitText;
use crate::components::stagger::StaggerItem;
use crate::motion::reveal::RevealVariant;
use crate::motion::stagger::StaggerPreset;
use crate::pages::services::SERVICES;
use crate::pages::partners::PARTNERS;
use crate::Route;

// (count target, suffix, label); a target that is not a number shows as is.
const STATS: [(&str, &str, &str); 4] = [
    ("250", "+", "Sites launched"),
    ("48", "", "Partner brands"),
    ("12", "", "Design awards"),
    ("∞", "", "Coffee consumed"),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <Hero />

            <section class="intro" id="intro">
                <Reveal class="section-heading">
                    <span class="eyebrow">{"What we do"}</span>
                    <SplitText text="Design that earns attention" />
                    <p>{"Strategy, identity and build under one roof, with motion treated as part of the design rather than decoration."}</p>
                </Reveal>
                <div class="intro-rows">
                    <Reveal variant={RevealVariant::SlideLeft} class="intro-row">
                        <h3>{"Strategy first"}</h3>
                        <p>{"Every page starts from what a visitor needs to believe before they act."}</p>
                    </Reveal>
                    <Reveal variant={RevealVariant::SlideRight} class="intro-row">
                        <h3>{"Built to last"}</h3>
                        <p>{"Clean components your team can extend without calling us."}</p>
                    </Reveal>
                    <Reveal variant={RevealVariant::Scale} class="intro-row highlight">
                        <h3>{"Motion with purpose"}</h3>
                        <p>{"Animations that lead the eye to the next step, never away from it."}</p>
                    </Reveal>
                </div>
                <AnchorLink href="#services" class="scroll-hint">{"See services ↓"}</AnchorLink>
            </section>

            <section class="services-preview" id="services">
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, (icon, title, blurb))| html! {
                        <StaggerItem preset={StaggerPreset::Service} {index} class="service-card">
                            <span class="service-icon">{*icon}</span>
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </StaggerItem>
                    }) }
                </div>
            </section>

            <section class="stats">
                <div class="stats-grid">
                    { for STATS.iter().enumerate().map(|(index, (count, suffix, label))| html! {
                        <StaggerItem preset={StaggerPreset::Stat} {index} class="stat-card">
                            <StatNumber count={AttrValue::from(*count)} fallback={AttrValue::from(*count)} suffix={AttrValue::from(*suffix)} />
                            <span class="stat-label">{*label}</span>
                        </StaggerItem>
                    }) }
                </div>
            </section>

            <section class="partners-strip">
                <Reveal tag="h2">{"Trusted by teams at"}</Reveal>
                <Marquee items={PARTNERS.iter().map(|name| AttrValue::from(*name)).collect::<Vec<_>>()} />
            </section>

            <Reveal tag="section" variant={RevealVariant::Scale} class="cta">
                <h2>{"Have something worth showing off?"}</h2>
                <MagneticButton to={Route::Contact} class="btn-primary">{"Let's talk"}</MagneticButton>
            </Reveal>
        </div>
    }
}
