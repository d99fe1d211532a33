//! Landing page: hero and project card grid.

use leptos::prelude::*;

use crate::app::SITE_DESCRIPTION;
use crate::components::project_card::ProjectCard;
use crate::components::theme_ready::ThemeReady;
use crate::state::projects::PROJECTS;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <ThemeReady>
            <section class="hero">
                <p class="hero__eyebrow">"Software engineer"</p>
                <h1 class="hero__title">"I build fast, careful software."</h1>
                <p class="hero__lede">{SITE_DESCRIPTION}</p>
                <a class="button button--primary" href="#projects">"See projects"</a>
            </section>
            <section id="projects" class="projects">
                <h2 class="projects__heading">"Projects"</h2>
                <div class="projects__grid">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=project/> })
                        .collect_view()}
                </div>
            </section>
        </ThemeReady>
    }
}
