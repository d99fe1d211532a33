//! Accent color picker: preset swatches, native color input, hex text field.
//!
//! DESIGN
//! ======
//! The hex field keeps its own draft text so partial input like `#0a` can be
//! typed without the store rejecting it. Only drafts that resolve to a full
//! color reach [`ThemeContext::set_accent_color`](crate::state::theme::ThemeContext::set_accent_color);
//! swatch and color-input changes overwrite the draft with the committed value.
//! Picking a swatch is a final choice and reports through `on_pick`; the
//! native input and hex field fire continuously and do not.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use theme::{HexDraft, PRESET_ACCENTS};

use crate::state::theme::{ThemeContext, use_theme};

#[cfg(test)]
#[path = "color_picker_test.rs"]
mod color_picker_test;

#[component]
pub fn ColorPicker(#[prop(optional)] on_pick: Option<Callback<String>>) -> impl IntoView {
    let theme = match use_theme() {
        Ok(theme) => theme,
        Err(err) => {
            log::error!("ColorPicker rendered outside the theme provider: {err}");
            return ().into_any();
        }
    };

    let draft = RwSignal::new(String::new());
    let ready = Memo::new(move |_| theme.is_ready());

    // Seed the draft once the stored accent has loaded.
    Effect::new(move || {
        if ready.get() {
            draft.set(untrack(move || theme.accent().to_string()));
        }
    });

    let commit = move |hex: &str| match theme.set_accent_color(hex) {
        Ok(_) => draft.set(hex.to_ascii_lowercase()),
        Err(err) => log::warn!("accent not applied: {err}"),
    };

    let on_hex_input = move |ev: leptos::ev::Event| {
        let parsed = HexDraft::from_input(&event_target_value(&ev));
        if let Some(color) = &parsed.color {
            if let Err(err) = theme.set_accent_color(color.as_str()) {
                log::warn!("accent not applied: {err}");
            }
        }
        draft.set(parsed.text);
    };

    let swatches = move || {
        PRESET_ACCENTS
            .into_iter()
            .map(|(label, hex)| {
                let active = move || theme.accent().as_str() == hex;
                view! {
                    <button
                        class="color-picker__swatch"
                        class:color-picker__swatch--active=active
                        style:background-color=hex
                        title=label
                        aria-label=label
                        aria-pressed=move || active().to_string()
                        on:click=move |_| pick_swatch(theme, draft, hex, on_pick)
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || ready.get()
            fallback=|| view! { <div class="color-picker color-picker--placeholder" aria-hidden="true"></div> }
        >
            <div class="color-picker" role="group" aria-label="Accent color">
                <div class="color-picker__swatches">{swatches()}</div>
                <input
                    class="color-picker__native"
                    type="color"
                    aria-label="Custom accent color"
                    prop:value=move || theme.accent().to_string()
                    on:input=move |ev| commit(&event_target_value(&ev))
                />
                <input
                    class="color-picker__hex"
                    class:color-picker__hex--invalid=move || hex_field_invalid(&draft.get())
                    type="text"
                    maxlength="7"
                    spellcheck="false"
                    aria-label="Accent color hex value"
                    prop:value=move || draft.get()
                    on:input=on_hex_input
                />
            </div>
        </Show>
    }
    .into_any()
}

/// Commit a preset, sync the draft, then report the pick.
///
/// The draft is written before `on_pick` runs because the callback may
/// unmount the picker.
fn pick_swatch(theme: ThemeContext, draft: RwSignal<String>, hex: &str, on_pick: Option<Callback<String>>) {
    match theme.set_accent_color(hex) {
        Ok(_) => {
            let hex = hex.to_ascii_lowercase();
            draft.set(hex.clone());
            if let Some(on_pick) = on_pick {
                on_pick.run(hex);
            }
        }
        Err(err) => log::warn!("accent not applied: {err}"),
    }
}

/// A non-empty draft that does not resolve to a color yet.
fn hex_field_invalid(text: &str) -> bool {
    !text.is_empty() && HexDraft::from_input(text).color.is_none()
}
