//! Examples tab: the built-in gallery and a few tuning hints.

use leptos::prelude::*;

use share::EXAMPLES;

use crate::components::fields::Section;
use crate::state::params::ParamsState;

const HINTS: [&str; 4] = [
    "Radius/velocity ratios change the petal shape.",
    "Relative initial angles control vertical/horizontal symmetry.",
    "Higher afterimage helps visualize trails.",
    "Grid + lower speed is great for analysis.",
];

#[component]
pub fn ExamplesPanel() -> impl IntoView {
    let params = expect_context::<RwSignal<ParamsState>>();

    let buttons = EXAMPLES
        .iter()
        .map(|example| {
            view! {
                <button class="example-button" on:click=move |_| params.update(|p| p.apply_example(example))>
                    {example.name}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="panel panel--examples">
            <Section title="Examples">
                <div class="example-grid">{buttons}</div>
                <p class="panel-note">
                    "Clicking an example overwrites current parameters. Sync L-R will be turned OFF automatically."
                </p>
            </Section>
            <Section title="Hints">
                <ul class="hint-list">{HINTS.iter().map(|hint| view! { <li>{*hint}</li> }).collect_view()}</ul>
            </Section>
        </div>
    }
}
