//! Share URL row: read-only link plus Copy / Apply to URL.

use leptos::prelude::*;

use share::share_url;

use crate::components::toast::show_toast;
use crate::state::params::ParamsState;
use crate::state::ui::UiState;
use crate::util::clipboard::write_text;
use crate::util::url::{page_base, replace_url};

#[component]
pub fn ShareBar() -> impl IntoView {
    let params = expect_context::<RwSignal<ParamsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Serializing plain data cannot fail; an empty link is shown if it ever does.
    let url = Memo::new(move |_| {
        let base = page_base().unwrap_or_default();
        params.with(|p| share_url(&base, &p.scene())).unwrap_or_default()
    });

    let on_copy = move |_: leptos::ev::MouseEvent| {
        let text = url.get_untracked();
        leptos::task::spawn_local(async move {
            if write_text(&text).await {
                show_toast(ui, "Copied share URL");
            } else {
                show_toast(ui, "Clipboard unavailable. Select & copy manually");
            }
        });
    };
    let on_apply = move |_: leptos::ev::MouseEvent| replace_url(&url.get_untracked());

    view! {
        <div class="share-bar">
            <input
                class="share-bar__url"
                readonly=true
                prop:value=move || url.get()
                on:focus=move |ev| {
                    #[cfg(feature = "csr")]
                    event_target::<web_sys::HtmlInputElement>(&ev).select();
                    #[cfg(not(feature = "csr"))]
                    let _ = ev;
                }
            />
            <div class="share-bar__actions">
                <button class="btn" on:click=on_copy>
                    "Copy Share URL"
                </button>
                <button class="btn" on:click=on_apply>
                    "Apply to URL"
                </button>
            </div>
        </div>
    }
}
