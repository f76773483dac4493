use payloads::{GrowthStep, Resource};
use yew::prelude::*;

use super::Section;
use crate::get_api_client;
use crate::hooks::use_collection;

#[function_component]
pub fn GrowthStepsSection() -> Html {
    // sorted by step number on load
    let steps = use_collection::<GrowthStep>();

    let content = steps.render("growth steps", |steps, _, _| html! {
        <ol class="grid gap-8 md:grid-cols-3">
            {for steps.iter().map(|step| html! {
                <li key={step.id.to_string()} class="relative p-6 rounded-lg border border-neutral-200">
                    <span class="absolute -top-4 left-6 h-8 w-8 rounded-full bg-neutral-900 text-white flex items-center justify-center text-sm font-bold">
                        {step.number}
                    </span>
                    if let Some(image) = step.image() {
                        <img
                            src={get_api_client().image_url(image)}
                            alt={step.title.clone()}
                            class="h-32 w-full object-cover rounded-md mb-4"
                        />
                    }
                    <h3 class="text-lg font-semibold mt-2">{&step.title}</h3>
                    <p class="mt-2 text-neutral-600">{&step.description}</p>
                </li>
            })}
        </ol>
    });

    html! {
        <Section title="How We Work" subtitle="From first call to launch">
            {content}
        </Section>
    }
}
