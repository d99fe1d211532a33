#![cfg(not(feature = "hydrate"))]

use theme::ThemeMode;

use super::*;
use crate::state::theme::ThemeContext;

fn render_home(ready: bool) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let theme = ThemeContext::new();
        if ready {
            theme.initialize(ThemeMode::Dark).unwrap();
        }
        provide_context(theme);
        view! { <HomePage/> }.to_html()
    })
}

#[test]
fn home_shows_loader_before_theme_is_ready() {
    let html = render_home(false);
    assert!(html.contains("page-loader"), "{html}");
    assert!(!html.contains("button--primary"), "{html}");
    assert!(!html.contains("project-card"), "{html}");
}

#[test]
fn home_renders_hero_and_cards_once_ready() {
    let html = render_home(true);
    assert!(html.contains("button--primary"), "{html}");
    for project in PROJECTS {
        assert!(html.contains(&format!("/projects/{}", project.id)), "{}", project.id);
    }
}
