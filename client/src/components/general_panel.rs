//! General tab: timing, trail, scale, locus count, and background.

use leptos::prelude::*;

use canvas::model::LocusCount;

use crate::components::fields::{ColorField, Num, Section, Toggle};
use crate::state::fields::{BACKGROUND_COLOR, COMMON_NUMBERS, ColorField as ColorBinding, GRID_COLOR, GRID_SHOW};
use crate::state::params::ParamsState;

fn common_color(params: RwSignal<ParamsState>, field: &'static ColorBinding<canvas::model::CommonParams>) -> impl IntoView {
    view! {
        <ColorField
            label=field.label
            value=Signal::derive(move || params.with(|p| (field.get)(&p.common).to_owned()))
            on_change=move |v: String| params.update(|p| (field.set)(&mut p.common, v))
        />
    }
}

#[component]
pub fn GeneralPanel() -> impl IntoView {
    let params = expect_context::<RwSignal<ParamsState>>();

    let numbers = COMMON_NUMBERS
        .iter()
        .map(|field| {
            view! {
                <Num
                    label=field.label
                    value=Signal::derive(move || params.with(|p| (field.get)(&p.common)))
                    min=field.min
                    max=field.max
                    step=field.step
                    on_change=move |v: f64| params.update(|p| (field.set)(&mut p.common, v))
                />
            }
        })
        .collect_view();

    let on_locus = move |ev: leptos::ev::Event| {
        let count = if event_target_value(&ev) == "1" { LocusCount::One } else { LocusCount::Two };
        params.update(|p| p.common.number_of_locus = count);
    };
    let locus_value = move || u8::from(params.with(|p| p.common.number_of_locus)).to_string();

    view! {
        <div class="panel panel--general">
            <Section title="General Settings">
                {numbers}
                <label class="field">
                    <span class="field__label">"Locus count"</span>
                    <select class="field__input" prop:value=locus_value on:change=on_locus>
                        <option value="2">"Both"</option>
                        <option value="1">"Left only"</option>
                    </select>
                </label>
                {common_color(params, &BACKGROUND_COLOR)}
            </Section>
            <Section title="Grid">
                <Toggle
                    label=GRID_SHOW.label
                    value=Signal::derive(move || params.with(|p| (GRID_SHOW.get)(&p.common)))
                    on_change=move |v: bool| params.update(|p| (GRID_SHOW.set)(&mut p.common, v))
                />
                {common_color(params, &GRID_COLOR)}
            </Section>
        </div>
    }
}
