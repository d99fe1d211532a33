//! Site header with the home link and theme controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the router outlet, so the toggle and picker
//! stay mounted across navigation and keep a single store subscription.

use leptos::prelude::*;

use crate::app::SITE_TITLE;
use crate::components::color_picker::ColorPicker;
use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let picker_open = RwSignal::new(false);
    let close_picker = Callback::new(move |_: String| picker_open.set(false));

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">{SITE_TITLE}</a>
            <nav class="site-header__actions">
                <button
                    class="site-header__palette"
                    class:site-header__palette--open=move || picker_open.get()
                    aria-expanded=move || picker_open.get().to_string()
                    aria-label="Choose accent color"
                    on:click=move |_| picker_open.update(|open| *open = !*open)
                >
                    <span class="site-header__palette-dot"></span>
                </button>
                <ThemeToggle/>
            </nav>
            <Show when=move || picker_open.get()>
                <div class="site-header__picker">
                    <ColorPicker on_pick=close_picker/>
                </div>
            </Show>
        </header>
    }
}
