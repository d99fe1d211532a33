//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::components::theme_ready::ThemeReady;
use crate::pages::{home::HomePage, not_found::NotFound, project::ProjectPage};
use crate::state::theme::provide_theme;

pub const SITE_TITLE: &str = "Portfolio";
pub const SITE_DESCRIPTION: &str =
    "Systems, tools, and web apps, with notes on how each one was built.";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme context before any route renders, so every component
/// under the router can call `use_theme`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <ThemeReady><NotFound/></ThemeReady> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectPage/>
                </Routes>
            </main>
        </Router>
    }
}
