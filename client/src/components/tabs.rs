//! Tab strip and global actions (Sync L-R, Reset, Reset View).

use leptos::prelude::*;

use crate::state::params::ParamsState;
use crate::state::ui::{Tab, UiState};

#[component]
pub fn TabBar() -> impl IntoView {
    let params = expect_context::<RwSignal<ParamsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let tabs = Tab::ALL
        .iter()
        .map(|&tab| {
            let active = move || ui.with(|u| u.tab == tab);
            view! {
                <button
                    role="tab"
                    class="pill"
                    class:pill--active=active
                    aria-selected=move || active().to_string()
                    on:click=move |_| ui.update(|u| u.tab = tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    let sync_on = move || params.with(|p| p.sync_lr);
    let on_reset = move |_: leptos::ev::MouseEvent| {
        params.update(ParamsState::reset);
        ui.update(UiState::request_view_reset);
    };

    view! {
        <div class="tab-row">
            <div class="tab-list" role="tablist" aria-label="Panels">
                {tabs}
            </div>
            <div class="actions">
                <button class="pill" class:pill--active=sync_on on:click=move |_| params.update(ParamsState::toggle_sync)>
                    {move || if sync_on() { "Sync L-R ON" } else { "Sync L-R OFF" }}
                </button>
                <button class="pill" on:click=on_reset>
                    "Reset"
                </button>
                <button class="pill" on:click=move |_| ui.update(UiState::request_view_reset)>
                    "Reset View"
                </button>
            </div>
        </div>
    }
}
