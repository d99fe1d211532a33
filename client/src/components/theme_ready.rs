//! Page-level readiness gate.
//!
//! Everything on a page is tinted by `--primary-*`, so page bodies stay behind
//! a neutral loader until the stored theme has been applied.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::theme::use_theme;

#[cfg(test)]
#[path = "theme_ready_test.rs"]
mod theme_ready_test;

/// Render `children` once the theme store is ready, a loader before that.
#[component]
pub fn ThemeReady(children: ChildrenFn) -> impl IntoView {
    match use_theme() {
        Ok(theme) => view! {
            <Show when=move || theme.is_ready() fallback=|| view! { <PageLoader/> }>
                {children()}
            </Show>
        }
        .into_any(),
        Err(err) => {
            log::error!("ThemeReady rendered outside the theme provider: {err}");
            children().into_any()
        }
    }
}

#[component]
pub fn PageLoader() -> impl IntoView {
    view! {
        <div class="page-loader" role="status" aria-label="Loading">
            <span class="page-loader__spinner"></span>
        </div>
    }
}
