//! Not-found view for unknown routes and unknown project ids.

use leptos::prelude::*;

/// Message with a link home. `detail` replaces the default explanation.
#[component]
pub fn NotFound(#[prop(optional, into)] detail: Option<String>) -> impl IntoView {
    let detail = detail.unwrap_or_else(|| "That page does not exist.".to_owned());
    view! {
        <section class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__detail">{detail}</p>
            <a class="button button--primary" href="/">"Back home"</a>
        </section>
    }
}
