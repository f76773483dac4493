use payloads::Service;
use yew::prelude::*;

use super::Section;
use crate::get_api_client;
use crate::hooks::use_collection;

#[function_component]
pub fn ServicesSection() -> Html {
    let services = use_collection::<Service>();

    let content = services.render("services", |services, _, _| {
        if services.is_empty() {
            return html! {
                <p class="text-center text-neutral-600">{"No services listed yet."}</p>
            };
        }
        html! {
            <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
                {for services.iter().map(|service| html! {
                    <div key={service.id.to_string()} class="p-6 rounded-lg border border-neutral-200">
                        if let Some(image) = service.image.as_deref().filter(|i| !i.is_empty()) {
                            <img
                                src={get_api_client().image_url(image)}
                                alt={service.name.clone()}
                                class="h-12 w-12 object-contain mb-4"
                            />
                        }
                        <h3 class="text-lg font-semibold">{&service.name}</h3>
                        <p class="mt-2 text-neutral-600">{&service.description}</p>
                    </div>
                })}
            </div>
        }
    });

    html! {
        <Section title="Our Services" subtitle="What we can do for you">
            {content}
        </Section>
    }
}
