//! Left / Right tab: one side's appearance and motion.

use leptos::prelude::*;

use crate::components::fields::{ColorField, Num, Section, Toggle};
use crate::state::fields::{SIDE_SECTIONS, SideSection};
use crate::state::params::{ParamsState, SideId};

fn section_view(params: RwSignal<ParamsState>, which: SideId, section: &'static SideSection, title: String) -> impl IntoView {
    let toggles = section
        .toggles
        .iter()
        .map(|field| {
            view! {
                <Toggle
                    label=field.label
                    value=Signal::derive(move || params.with(|p| (field.get)(p.side(which))))
                    on_change=move |v: bool| params.update(|p| p.edit_side(which, |s| (field.set)(s, v)))
                />
            }
        })
        .collect_view();
    let numbers = section
        .numbers
        .iter()
        .map(|field| {
            view! {
                <Num
                    label=field.label
                    value=Signal::derive(move || params.with(|p| (field.get)(p.side(which))))
                    min=field.min
                    max=field.max
                    step=field.step
                    on_change=move |v: f64| params.update(|p| p.edit_side(which, |s| (field.set)(s, v)))
                />
            }
        })
        .collect_view();
    let colors = section
        .colors
        .iter()
        .map(|field| {
            view! {
                <ColorField
                    label=field.label
                    value=Signal::derive(move || params.with(|p| (field.get)(p.side(which)).to_owned()))
                    on_change=move |v: String| params.update(|p| p.edit_side(which, |s| (field.set)(s, v)))
                />
            }
        })
        .collect_view();

    view! {
        <Section title=title>
            {toggles}
            {numbers}
            {colors}
        </Section>
    }
}

#[component]
pub fn SidePanel(which: SideId) -> impl IntoView {
    let params = expect_context::<RwSignal<ParamsState>>();

    let sections = SIDE_SECTIONS
        .into_iter()
        .map(|section| section_view(params, which, section, format!("{} / {}", which.label(), section.title)))
        .collect_view();

    view! { <div class="panel panel--side">{sections}</div> }
}
