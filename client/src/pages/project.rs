//! Project detail page for `/projects/:id`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::theme_ready::ThemeReady;
use crate::pages::not_found::NotFound;
use crate::state::projects::{Project, ProjectLookup, lookup_project};

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let lookup = move || lookup_project(&params.read().get("id").unwrap_or_default());

    view! {
        <ThemeReady>
            {move || match lookup() {
                ProjectLookup::Found(project) => view! { <ProjectDetail project=project/> }.into_any(),
                ProjectLookup::NotFound(id) => {
                    log::debug!("unknown project id {id:?}");
                    view! { <NotFound detail=format!("No project named \"{id}\".")/> }.into_any()
                }
            }}
        </ThemeReady>
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    let tags = project
        .tags
        .iter()
        .map(|tag| view! { <li class="tag">{*tag}</li> })
        .collect_view();

    view! {
        <article class="project-detail">
            <a class="project-detail__back" href="/">"← All projects"</a>
            <header class="project-detail__header">
                <h1 class="project-detail__title">{project.title}</h1>
                <span class="project-detail__year">{project.year}</span>
            </header>
            <p class="project-detail__summary">{project.summary}</p>
            <p class="project-detail__description">{project.description}</p>
            <ul class="project-detail__tags">{tags}</ul>
            {project.link.map(|href| view! {
                <a class="button button--primary" href=href target="_blank" rel="noopener noreferrer">
                    "View source"
                </a>
            })}
        </article>
    }
}
