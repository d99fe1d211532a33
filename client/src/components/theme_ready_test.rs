#![cfg(not(feature = "hydrate"))]

use theme::ThemeMode;

use super::*;
use crate::state::theme::ThemeContext;

/// Render the gate with `ready` = `None` for no provider.
fn render_gate(ready: Option<bool>) -> String {
    let owner = Owner::new();
    owner.with(|| {
        if let Some(ready) = ready {
            let theme = ThemeContext::new();
            if ready {
                theme.initialize(ThemeMode::Light).unwrap();
            }
            provide_context(theme);
        }
        view! {
            <ThemeReady>
                <p class="gated-content">"content"</p>
            </ThemeReady>
        }
        .to_html()
    })
}

#[test]
fn shows_loader_until_ready() {
    let html = render_gate(Some(false));
    assert!(html.contains("page-loader"), "{html}");
    assert!(!html.contains("gated-content"), "{html}");
}

#[test]
fn shows_children_once_ready() {
    let html = render_gate(Some(true));
    assert!(html.contains("gated-content"), "{html}");
    assert!(!html.contains("page-loader"), "{html}");
}

#[test]
fn without_provider_renders_children() {
    let html = render_gate(None);
    assert!(html.contains("gated-content"), "{html}");
}
