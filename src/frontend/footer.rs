use yew::prelude::*;

use super::dom::prefers_reduced_motion;
use super::scene::use_scene;
use crate::content::{self, footer_socials, NAV_ITEMS, SOCIAL_LINKS};
use crate::sections::{footer, footer_scene};

#[function_component(Footer)]
pub fn footer_section() -> Html {
    let root = use_node_ref();
    use_scene(root.clone(), || footer_scene(prefers_reduced_motion()));

    let email = SOCIAL_LINKS.iter().find(|link| link.name == "Email");

    html! {
        <footer class="site-footer" ref={root} data-motion={footer::ROOT}>
            { for (0..footer::ORB_COUNT).map(|index| html! {
                <span
                    class={classes!("orb", format!("footer-orb-{index}"))}
                    data-motion={footer::orb_target(index)}
                    aria-hidden="true"
                />
            }) }
            <div class="footer-grid">
                <div class="footer-brand">
                    <a class="brand gradient-text" href="#home">{content::OWNER}</a>
                    <p>{content::FOOTER_TAGLINE}</p>
                    <ul class="footer-socials">
                        { for footer_socials().map(|link| html! {
                            <li>
                                <a
                                    class={classes!("social-icon", link.hover_class)}
                                    href={link.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={link.name}
                                >
                                    {link.glyph}
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>
                <nav class="footer-links" aria-label="Quick links">
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li><a href={item.href}>{item.name}</a></li>
                        }) }
                    </ul>
                </nav>
                <div class="footer-connect">
                    <h3>{"Connect"}</h3>
                    if let Some(email) = email {
                        <a href={email.href}>{email.href.trim_start_matches("mailto:")}</a>
                    }
                    <a class="button button-primary" href="#contact">{"Start a Project"}</a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {}. All rights reserved.", content::OWNER)}</p>
                <div class="footer-legal">
                    <a href="#">{"Privacy"}</a>
                    <a href="#">{"Terms"}</a>
                </div>
            </div>
        </footer>
    }
}
