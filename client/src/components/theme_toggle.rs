//! Light/dark toggle button for the site header.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use theme::ThemeMode;

use crate::state::theme::use_theme;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Button that flips the theme mode.
///
/// Renders an inert placeholder of the same size until the theme store has
/// loaded, so the icon never flashes the wrong mode after hydration.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = match use_theme() {
        Ok(theme) => theme,
        Err(err) => {
            log::error!("ThemeToggle rendered outside the theme provider: {err}");
            return ().into_any();
        }
    };

    let on_click = move |_| {
        let mode = theme.toggle_mode();
        log::debug!("theme toggled to {}", mode.as_str());
    };

    view! {
        <Show
            when=move || theme.is_ready()
            fallback=|| view! { <span class="theme-toggle theme-toggle--placeholder" aria-hidden="true"></span> }
        >
            <button
                class="theme-toggle"
                on:click=on_click
                title=move || toggle_label(theme.mode())
                aria-label=move || toggle_label(theme.mode())
            >
                {move || toggle_icon(theme.mode())}
            </button>
        </Show>
    }
    .into_any()
}

fn toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Switch to dark mode",
        ThemeMode::Dark => "Switch to light mode",
    }
}

/// Icon for the mode the button switches to.
fn toggle_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "☾",
        ThemeMode::Dark => "☀",
    }
}
