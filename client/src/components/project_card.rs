//! Card linking a catalog project to its detail page.

use leptos::prelude::*;

use crate::state::projects::Project;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let tags = project
        .tags
        .iter()
        .map(|tag| view! { <li class="tag">{*tag}</li> })
        .collect_view();

    view! {
        <a class="project-card" href=href>
            <span class="project-card__year">{project.year}</span>
            <h3 class="project-card__title">{project.title}</h3>
            <p class="project-card__summary">{project.summary}</p>
            <ul class="project-card__tags">{tags}</ul>
        </a>
    }
}
