use yew::prelude::*;

use crate::components::marquee::Marquee;
use crate::components::page_header::PageHeader;
use crate::components::reveal::Reveal;
use crate::components::stagger::StaggerItem;
use crate::motion::stagger::StaggerPreset;

pub const PARTNERS: [&str; 12] = [
    "Northwind", "Lumen", "Orbital", "Fieldnote", "Kestrel", "Paperplane",
    "Halcyon", "Juniper", "Monolith", "Tidewater", "Quarry", "Verve",
];

#[function_component(Partners)]
pub fn partners() -> Html {
    let names = PARTNERS.iter().map(|name| AttrValue::from(*name)).collect::<Vec<_>>();

    html! {
        <div class="partners-page">
            <PageHeader
                crumb="Partners"
                title="Who we work with"
                lead="Startups, agencies and established brands that want their site to feel as good as their product."
            />

            <section class="partner-grid">
                { for PARTNERS.iter().enumerate().map(|(index, name)| html! {
                    <StaggerItem preset={StaggerPreset::Partner} {index} class="partner-logo-card">
                        <span>{*name}</span>
                    </StaggerItem>
                }) }
            </section>

            <section class="partners-strip">
                <Reveal tag="h2">{"And counting"}</Reveal>
                <Marquee items={names} />
            </section>
        </div>
    }
}
