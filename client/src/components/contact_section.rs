//! Rooman contact section: the form slides in from the left and the image
//! from the right as the section scrolls into view.

use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::util::contact_form::{ContactForm, SUCCESS_MESSAGE};
use crate::util::timelines::TimelineId;

pub const CONTACT_EMAIL: &str = "online@rooman.net";
pub const CONTACT_ADDRESS: &str = "30, 12th Main Rd, 1st Stage, Rajajinagar, Bengaluru 560010";

#[derive(Clone, Debug, PartialEq)]
enum Feedback {
    Sent,
    Invalid(String),
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let feedback = RwSignal::new(None::<Feedback>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = form.try_update(ContactForm::submit);
        match result {
            Some(Ok(_)) => feedback.set(Some(Feedback::Sent)),
            Some(Err(e)) => feedback.set(Some(Feedback::Invalid(e.to_string()))),
            None => {}
        }
    };

    let field = move |get: fn(&ContactForm) -> &String| move || form.with(|f| get(f).clone());

    view! {
        <AnimatedSection timeline=TimelineId::ContactScroll id="contact" class="section contact">
            <div class="contact__form" data-anim="contact-form">
                <span class="eyebrow">"Get In Touch"</span>
                <h2 class="section__heading">"Let's build what's next."</h2>
                <p class="section__sub">"Tell us what you're shipping. We'll reply within two business days."</p>
                <form class="form" on:submit=on_submit>
                    <div class="form__row">
                        <label class="form__field">
                            "Name"
                            <input
                                placeholder="Your name"
                                prop:value=field(|f| &f.name)
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Email"
                            <input
                                type="email"
                                placeholder="you@company.com"
                                prop:value=field(|f| &f.email)
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="form__field">
                        "Company"
                        <input
                            placeholder="Your company"
                            prop:value=field(|f| &f.company)
                            on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "Message"
                        <textarea
                            rows="5"
                            placeholder="Tell us about your project..."
                            prop:value=field(|f| &f.message)
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="form__actions">
                        <button type="submit" class="btn btn--primary">"Send message"</button>
                        <span class="form__alt">
                            "Or email: " <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                        </span>
                    </div>
                    {move || match feedback.get() {
                        Some(Feedback::Sent) => view! { <p class="form__notice">{SUCCESS_MESSAGE}</p> }.into_any(),
                        Some(Feedback::Invalid(message)) => {
                            view! { <p class="form__notice form__notice--error">{message}</p> }.into_any()
                        }
                        None => ().into_any(),
                    }}
                </form>
                <p class="contact__address">{CONTACT_ADDRESS}</p>
            </div>
            <div class="contact__image hex-frame" data-anim="contact-image">
                <img src="/images/contact.jpg" alt="Rooman office"/>
            </div>
        </AnimatedSection>
    }
}
