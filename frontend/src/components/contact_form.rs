use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::magnetic::MagneticButton;
use crate::config;
use crate::state::contact::{ContactFields, ContactForm};

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    fn write(self, fields: &mut ContactFields, value: String) {
        match self {
            Field::Name => fields.name = value,
            Field::Email => fields.email = value,
            Field::Subject => fields.subject = value,
            Field::Message => fields.message = value,
        }
    }
}

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let site = config::site();
    let form = use_state(|| ContactForm::new(site.submit_label.clone(), site.sent_label.clone()));
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let oninput = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()));
            if let Some(value) = value {
                let mut next = (*form).clone();
                field.write(&mut next.fields, value);
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let reset_ms = site.form_reset_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_sent() {
                return;
            }
            info!("Contact form submitted");
            debug!("Submitted with empty fields: {}", form.fields.is_empty());
            let submitted = (*form).clone().submit();
            form.set(submitted.clone());

            let form = form.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(reset_ms, move || {
                form.set(submitted.settle());
            }));
        })
    };

    let fields = &form.fields;
    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-row">
                <input type="text" name="name" placeholder="Your name" required=true
                    value={fields.name.clone()} oninput={oninput(Field::Name)} />
                <input type="email" name="email" placeholder="Email address" required=true
                    value={fields.email.clone()} oninput={oninput(Field::Email)} />
            </div>
            <input type="text" name="subject" placeholder="Subject"
                value={fields.subject.clone()} oninput={oninput(Field::Subject)} />
            <textarea name="message" rows="5" placeholder="Tell us about your project" required=true
                value={fields.message.clone()} oninput={oninput(Field::Message)} />
            <MagneticButton button_type="submit" class={classes!("btn-primary", form.is_sent().then(|| "btn-success"))}>
                if form.is_sent() {
                    <><i class="fas fa-check"></i>{" "}</>
                }
                {form.label().to_string()}
            </MagneticButton>
        </form>
    }
}
