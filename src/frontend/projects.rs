use yew::prelude::*;

use super::dom::prefers_reduced_motion;
use super::scene::use_scene;
use crate::content::{Project, PROJECTS};
use crate::sections::{projects, projects_scene};

fn project_card(index: usize, project: &Project) -> Html {
    html! {
        <article class="project-card card" data-motion={projects::card_target(index)}>
            <div class="project-media">
                <img src={project.image} alt={project.title} loading="lazy" />
                <span class="project-category">{project.category}</span>
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <ul class="tech-list">
                    { for project.tech.iter().map(|tech| html! { <li class="tech">{*tech}</li> }) }
                </ul>
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects_section() -> Html {
    let root = use_node_ref();
    use_scene(root.clone(), || projects_scene(PROJECTS.len(), prefers_reduced_motion()));

    html! {
        <section id="projects" class="section projects" ref={root} data-motion={projects::SECTION}>
            <div class="particles" aria-hidden="true">
                { for (0..projects::PARTICLE_COUNT).map(|index| html! {
                    <span
                        class="particle"
                        style={projects::particle_style(index)}
                        data-motion={projects::particle_target(index)}
                    />
                }) }
            </div>
            <h2 class="section-title" data-motion={projects::TITLE}>
                {"Featured "}<span class="gradient-text">{"Projects"}</span>
            </h2>
            <div class="project-grid">
                { for PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| project_card(index, project)) }
            </div>
            <div class="section-footer">
                <a class="button button-outline" href="#projects">{"View All Projects"}</a>
            </div>
        </section>
    }
}
