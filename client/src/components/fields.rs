//! Labelled form controls shared by the settings panels.

use leptos::prelude::*;

use crate::state::fields::format_number;
use crate::state::params::parse_number;

/// Titled block inside a panel.
#[component]
pub fn Section(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="panel-section">
            <h3 class="panel-section__title">{title}</h3>
            <div class="panel-section__body">{children()}</div>
        </section>
    }
}

/// Numeric input. Commits on `change`; blank reads as 0, out-of-range values
/// are clamped, and non-numeric text snaps back to the current value.
#[component]
pub fn Num(
    label: &'static str,
    #[prop(into)] value: Signal<f64>,
    #[prop(optional_no_strip)] min: Option<f64>,
    #[prop(optional_no_strip)] max: Option<f64>,
    #[prop(default = 1.0)] step: f64,
    #[prop(into)] on_change: Callback<f64>,
) -> impl IntoView {
    let on_commit = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        let next = parse_number(&text, min, max);
        if let Some(v) = next {
            on_change.run(v);
        }
        #[cfg(feature = "csr")]
        {
            // The signal may not change (clamped to the same value, or rejected),
            // so rewrite the text directly.
            let shown = next.unwrap_or_else(|| value.get_untracked());
            event_target::<web_sys::HtmlInputElement>(&ev).set_value(&format_number(shown));
        }
    };

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type="number"
                step=step.to_string()
                min=min.map(|m| m.to_string())
                max=max.map(|m| m.to_string())
                prop:value=move || format_number(value.get())
                on:change=on_commit
            />
        </label>
    }
}

/// Color swatch plus a free-text hex input bound to the same value.
#[component]
pub fn ColorField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__swatch"
                type="color"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <input
                class="field__input field__input--hex"
                type="text"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev).trim().to_owned())
            />
        </label>
    }
}

/// ON/OFF button.
#[component]
pub fn Toggle(
    label: &'static str,
    #[prop(into)] value: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="field">
            <span class="field__label">{label}</span>
            <button
                class="toggle"
                class:toggle--on=move || value.get()
                on:click=move |_| on_change.run(!value.get_untracked())
            >
                {move || if value.get() { "ON" } else { "OFF" }}
            </button>
        </div>
    }
}
