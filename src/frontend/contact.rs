use tracing::debug;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::scene::use_scene;
use crate::contact::{ContactForm, Field};
use crate::content::{CONTACT_INFO, SOCIAL_LINKS};
use crate::sections::{contact, contact_scene, press_feedback};

fn input_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .or_else(|| {
            event
                .target_dyn_into::<HtmlTextAreaElement>()
                .map(|area| area.value())
        })
}

#[function_component(Contact)]
pub fn contact_section() -> Html {
    let root = use_node_ref();
    let scene = use_scene(root.clone(), contact_scene);
    let form = use_state_eq(ContactForm::default);

    let oninput = |field: Field| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                let mut next = (*form).clone();
                next.set(field, value);
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let scene = scene.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                Ok(_) => {
                    scene.with_mut(press_feedback);
                    form.set(next);
                }
                Err(error) => debug!(%error, "contact_form_incomplete"),
            }
        })
    };

    html! {
        <section id="contact" class="section contact" ref={root} data-motion={contact::SECTION}>
            <h2 class="section-title">
                {"Get In "}<span class="gradient-text">{"Touch"}</span>
            </h2>
            <div class="contact-grid">
                <form class="contact-form card" data-motion={contact::FORM} onsubmit={onsubmit}>
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        name={Field::Name.as_str()}
                        type="text"
                        placeholder="Your name"
                        required=true
                        value={form.name.clone()}
                        oninput={oninput(Field::Name)}
                    />
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        name={Field::Email.as_str()}
                        type="email"
                        placeholder="your.email@example.com"
                        required=true
                        value={form.email.clone()}
                        oninput={oninput(Field::Email)}
                    />
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        name={Field::Message.as_str()}
                        rows="5"
                        placeholder="Tell me about your project..."
                        required=true
                        value={form.message.clone()}
                        oninput={oninput(Field::Message)}
                    />
                    <button
                        class="button button-primary"
                        type="submit"
                        data-motion={contact::SUBMIT}
                    >
                        {"Send Message"}
                    </button>
                </form>
                <div class="contact-side" data-motion={contact::SOCIAL}>
                    <div class="card">
                        <h3>{"Connect With Me"}</h3>
                        <ul class="social-list">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <li>
                                    <a
                                        class={classes!("social-link", link.hover_class)}
                                        href={link.href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        <span class="social-glyph" aria-hidden="true">
                                            {link.glyph}
                                        </span>
                                        {link.name}
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="card info-card">
                        { for CONTACT_INFO.iter().map(|item| html! {
                            <div class="info-item">
                                <h4>{item.heading}</h4>
                                <p>{item.body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
