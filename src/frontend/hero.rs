use yew::prelude::*;

use super::dom::prefers_reduced_motion;
use super::scene::use_scene;
use crate::content;
use crate::hero::{
    split_words, subtitle_word_target, HeroScene, CTA_PRIMARY, CTA_SECONDARY, ROLE, SCENE, TITLE,
};

#[function_component(Hero)]
pub fn hero() -> Html {
    let root = use_node_ref();
    let words = split_words(content::HERO_SUBTITLE);
    let word_count = words.len();
    use_scene(root.clone(), move || {
        HeroScene::new(word_count, prefers_reduced_motion())
    });

    html! {
        <section id="home" class="hero" ref={root}>
            <div class="hero-copy">
                <h1 class="hero-title" data-motion={TITLE}>
                    {"Hi, I'm "}
                    <span class="gradient-text">{content::OWNER}</span>
                </h1>
                <p class="hero-role" aria-live="polite">
                    <span data-motion={ROLE} />
                    <span class="cursor" aria-hidden="true">{"|"}</span>
                </p>
                <p class="hero-subtitle">
                    { for words.iter().enumerate().map(|(index, word)| html! {
                        <span class="word" data-motion={subtitle_word_target(index)}>
                            {*word}{"\u{00a0}"}
                        </span>
                    }) }
                </p>
                <div class="hero-actions">
                    <a class="button button-primary" href="#projects" data-motion={CTA_PRIMARY}>
                        {"View My Work"}
                    </a>
                    <a
                        class="button button-outline"
                        href={content::RESUME_PATH}
                        target="_blank"
                        rel="noopener noreferrer"
                        data-motion={CTA_SECONDARY}
                    >
                        {"Download Resume"}
                    </a>
                </div>
            </div>
            <div class="hero-scene" data-motion={SCENE}>
                <iframe
                    src={content::SPLINE_SCENE_URL}
                    title="Interactive 3D scene"
                    loading="lazy"
                    frameborder="0"
                    width="100%"
                    height="100%"
                />
            </div>
            <a class="scroll-indicator" href="#about" aria-label="Scroll to About">
                <span aria-hidden="true">{"↓"}</span>
            </a>
        </section>
    }
}
