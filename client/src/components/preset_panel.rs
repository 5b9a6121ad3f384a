//! Save / Overwrite / Load / Delete for browser-local presets.

use leptos::prelude::*;

use share::{PRESETS_STORAGE_KEY, PresetMap};

use crate::components::toast::show_toast;
use crate::state::params::ParamsState;
use crate::state::presets::PresetsState;
use crate::state::ui::UiState;
use crate::util::storage::save_raw;

fn persist(map: &PresetMap) {
    match map.to_json() {
        Ok(json) => save_raw(PRESETS_STORAGE_KEY, &json),
        Err(err) => {
            #[cfg(feature = "csr")]
            log::warn!("preset serialization failed: {err}");
            #[cfg(not(feature = "csr"))]
            let _ = err;
        }
    }
}

#[component]
pub fn PresetPanel() -> impl IntoView {
    let params = expect_context::<RwSignal<ParamsState>>();
    let presets = expect_context::<RwSignal<PresetsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let save = move |overwrite: bool| {
        let scene = params.with_untracked(ParamsState::scene);
        let mut result = Ok("");
        presets.update(|p| {
            result = p.save(scene, overwrite);
            if result.is_ok() {
                persist(&p.map);
            }
        });
        match result {
            Ok(message) => show_toast(ui, message),
            Err(err) => show_toast(ui, err.to_string()),
        }
    };

    let load = move |_: leptos::ev::MouseEvent| {
        let loaded = presets.with_untracked(|p| p.load_selected().map(|(name, scene)| (name.to_owned(), scene.clone())));
        if let Ok((name, scene)) = loaded {
            params.update(|p| p.restore(scene));
            show_toast(ui, format!("Loaded \"{name}\""));
        }
    };

    let delete = move |_: leptos::ev::MouseEvent| {
        let mut deleted = None;
        presets.update(|p| {
            if let Ok(name) = p.delete_selected() {
                persist(&p.map);
                deleted = Some(name);
            }
        });
        if let Some(name) = deleted {
            show_toast(ui, format!("Deleted \"{name}\""));
        }
    };

    let names = move || presets.with(|p| p.map.names_sorted().into_iter().map(str::to_owned).collect::<Vec<_>>());
    let nothing_selected = move || presets.with(|p| p.selected.is_none());

    view! {
        <div class="presets">
            <div class="presets__card">
                <div class="presets__title">"Save Preset"</div>
                <div class="presets__row">
                    <input
                        class="presets__input"
                        placeholder="Preset name (e.g. Clover-Blue)"
                        prop:value=move || presets.with(|p| p.name_draft.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            presets.update(|p| p.name_draft = text);
                        }
                    />
                    <button class="btn" on:click=move |_| save(false)>
                        "Save"
                    </button>
                    <button class="btn" on:click=move |_| save(true)>
                        "Overwrite"
                    </button>
                </div>
                <p class="presets__note">"Saves current parameters (general/left/right) to your browser."</p>
            </div>

            <div class="presets__card">
                <div class="presets__title">"Load / Delete Preset"</div>
                <div class="presets__row">
                    <select
                        class="presets__input"
                        prop:value=move || presets.with(|p| p.selected.clone().unwrap_or_default())
                        on:change=move |ev| {
                            let name = event_target_value(&ev);
                            presets.update(|p| p.selected = (!name.is_empty()).then_some(name));
                        }
                    >
                        <Show when=move || names().is_empty()>
                            <option value="">"(No presets)"</option>
                        </Show>
                        <For each=names key=|name| name.clone() let:name>
                            <option value=name.clone()>{name.clone()}</option>
                        </For>
                    </select>
                    <button class="btn" disabled=nothing_selected on:click=load>
                        "Load"
                    </button>
                    <button class="btn" disabled=nothing_selected on:click=delete>
                        "Delete"
                    </button>
                </div>
                <p class="presets__note">"Presets are stored only on this browser."</p>
            </div>
        </div>
    }
}
