use yew::prelude::*;

use crate::components::contact_form::ContactFormView;
use crate::components::page_header::PageHeader;
use crate::components::reveal::Reveal;
use crate::components::stagger::StaggerItem;
use crate::config;
use crate::motion::reveal::RevealVariant;
use crate::motion::stagger::StaggerPreset;

#[function_component(Contact)]
pub fn contact() -> Html {
    let details = &config::site().contact;
    let cards = [
        ("Email", details.email.clone()),
        ("Phone", details.phone.clone()),
        ("Studio", details.address.clone()),
    ];

    html! {
        <div class="contact-page">
            <PageHeader
                crumb="Contact"
                title="Let's talk"
                lead="Tell us a little about the project and we'll get back within one working day."
            />

            <section class="contact-layout">
                <div class="contact-info">
                    { for cards.into_iter().filter(|(_, value)| !value.is_empty()).enumerate().map(|(index, (label, value))| html! {
                        <StaggerItem preset={StaggerPreset::Contact} {index} class="contact-info-card">
                            <h4>{label}</h4>
                            <p>{value}</p>
                        </StaggerItem>
                    }) }
                </div>
                <Reveal variant={RevealVariant::SlideRight} class="contact-form-wrap">
                    <ContactFormView />
                </Reveal>
            </section>
        </div>
    }
}
