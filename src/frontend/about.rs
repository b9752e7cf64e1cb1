use yew::prelude::*;

use super::dom::prefers_reduced_motion;
use super::scene::use_scene;
use crate::content::{self, ABOUT_PARAGRAPHS, SKILLS};
use crate::sections::{about, about_scene};

#[function_component(About)]
pub fn about_section() -> Html {
    let root = use_node_ref();
    use_scene(root.clone(), || about_scene(SKILLS.len(), prefers_reduced_motion()));

    html! {
        <section id="about" class="section about" ref={root} data-motion={about::SECTION}>
            { for (0..about::ORB_COUNT).map(|index| html! {
                <span
                    class={classes!("orb", format!("about-orb-{index}"))}
                    data-motion={about::orb_target(index)}
                    aria-hidden="true"
                />
            }) }
            <h2 class="section-title">
                {"About "}<span class="gradient-text">{"Me"}</span>
            </h2>
            <div class="about-grid">
                <div class="about-image" data-motion={about::IMAGE}>
                    <div class="about-glow" data-motion={about::GLOW} aria-hidden="true" />
                    <img src={content::PORTRAIT_PATH} alt={content::OWNER} loading="lazy" />
                </div>
                <div class="about-content" data-motion={about::CONTENT}>
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    <ul class="skills">
                        { for SKILLS.iter().enumerate().map(|(index, skill)| html! {
                            <li class="skill card" data-motion={about::skill_target(index)}>
                                <span
                                    class={classes!("skill-glyph", skill.accent.class())}
                                    aria-hidden="true"
                                >
                                    {skill.glyph}
                                </span>
                                <span>{skill.name}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}
