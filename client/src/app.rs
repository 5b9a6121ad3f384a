//! Root component: context wiring, mount-time restore, and page layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three signals are provided for the whole tree: `ParamsState` (the edited
//! scene), `UiState` (tab, toast, view resets), and `PresetsState`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use share::{PRESETS_STORAGE_KEY, PresetMap, decode_state, param_from_query};

use crate::components::canvas_host::CanvasHost;
use crate::components::examples_panel::ExamplesPanel;
use crate::components::general_panel::GeneralPanel;
use crate::components::preset_panel::PresetPanel;
use crate::components::share_bar::ShareBar;
use crate::components::side_panel::SidePanel;
use crate::components::tabs::TabBar;
use crate::components::toast::Toast;
use crate::state::params::{ParamsState, SideId};
use crate::state::presets::PresetsState;
use crate::state::ui::{Tab, UiState};
use crate::util::storage::load_raw;
use crate::util::url::current_query;

/// Scene to start from: the `?p=` link if it decodes, otherwise the defaults.
fn initial_params() -> ParamsState {
    let mut params = ParamsState::default();
    let Some(param) = param_from_query(&current_query()) else {
        return params;
    };
    match decode_state(&param) {
        Ok(scene) => params.restore(scene),
        Err(err) => {
            #[cfg(feature = "csr")]
            log::warn!("ignoring share link: {err}");
            #[cfg(not(feature = "csr"))]
            let _ = err;
        }
    }
    params
}

#[component]
pub fn App() -> impl IntoView {
    let params = RwSignal::new(initial_params());
    let ui = RwSignal::new(UiState::default());
    let presets = RwSignal::new(PresetsState::from_map(PresetMap::parse(load_raw(PRESETS_STORAGE_KEY).as_deref())));
    provide_context(params);
    provide_context(ui);
    provide_context(presets);

    let tab = move || ui.with(|u| u.tab);

    view! {
        <div class="app">
            <header class="app-header">
                <div class="app-header__title">"Poitune Next"</div>
            </header>
            <main class="app-main">
                <div class="stage-card">
                    <CanvasHost />
                    <ShareBar />
                    <PresetPanel />
                </div>
                <TabBar />
                {move || match tab() {
                    Tab::General => view! { <GeneralPanel /> }.into_any(),
                    Tab::Left => view! { <SidePanel which=SideId::Left /> }.into_any(),
                    Tab::Right => view! { <SidePanel which=SideId::Right /> }.into_any(),
                    Tab::Examples => view! { <ExamplesPanel /> }.into_any(),
                }}
                <Toast />
                <footer class="app-footer">"© Poitune Next"</footer>
            </main>
        </div>
    }
}
