//! Bottom-center transient notification.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::ui::TOAST_MS;
use crate::state::ui::UiState;

/// Show `message` and schedule it to hide after [`TOAST_MS`](crate::state::ui::TOAST_MS).
///
/// A newer message replaces the current one; the older timer then finds a
/// different sequence and leaves it alone.
pub fn show_toast(ui: RwSignal<UiState>, message: impl Into<String>) {
    let mut seq = 0;
    ui.update(|u| seq = u.toast.push(message));
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(TOAST_MS, move || {
            ui.try_update(|u| u.toast.hide(seq));
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = seq;
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let message = move || ui.with(|u| u.toast.message.clone());

    view! {
        <div class="toast" class:toast--shown=move || message().is_some() aria-live="polite">
            <div class="toast__body">{move || message().unwrap_or_default()}</div>
        </div>
    }
}
