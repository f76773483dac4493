use payloads::AboutUs;
use yew::prelude::*;

use super::Section;
use crate::hooks::use_singleton;

#[function_component]
pub fn AboutSection() -> Html {
    let about = use_singleton::<AboutUs>();

    let content = about.render("about us", |about, _, _| match about {
        Some(about) => html! {
            <div class="max-w-3xl mx-auto space-y-8">
                <div class="text-center">
                    if !about.title.is_empty() {
                        <h3 class="text-2xl font-semibold mb-3">{&about.title}</h3>
                    }
                    <p class="text-neutral-700 whitespace-pre-line">{&about.description}</p>
                </div>
                <div class="grid gap-6 md:grid-cols-2">
                    if !about.mission.is_empty() {
                        <div class="p-6 rounded-lg bg-neutral-50">
                            <h4 class="font-semibold mb-2">{"Our Mission"}</h4>
                            <p class="text-neutral-700">{&about.mission}</p>
                        </div>
                    }
                    if !about.vision.is_empty() {
                        <div class="p-6 rounded-lg bg-neutral-50">
                            <h4 class="font-semibold mb-2">{"Our Vision"}</h4>
                            <p class="text-neutral-700">{&about.vision}</p>
                        </div>
                    }
                </div>
            </div>
        },
        None => html! {},
    });

    html! {
        <Section title="About Us">{content}</Section>
    }
}
