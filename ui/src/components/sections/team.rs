use payloads::{Resource, TeamMember};
use yew::prelude::*;

use super::Section;
use crate::get_api_client;
use crate::hooks::use_collection;

#[function_component]
pub fn TeamSection() -> Html {
    let team = use_collection::<TeamMember>();

    let content = team.render("team", |team, _, _| html! {
        <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
            {for team.iter().map(|member| html! {
                <div key={member.id.to_string()} class="text-center">
                    if let Some(image) = member.image() {
                        <img
                            src={get_api_client().image_url(image)}
                            alt={member.full_name()}
                            class="h-40 w-40 mx-auto rounded-full object-cover bg-neutral-100"
                        />
                    }
                    <h3 class="mt-4 text-lg font-semibold">{member.full_name()}</h3>
                    <p class="text-sm text-neutral-600">{&member.role}</p>
                    if let Some(description) = member.description.as_deref().filter(|d| !d.is_empty()) {
                        <p class="mt-2 text-sm text-neutral-500">{description.to_string()}</p>
                    }
                </div>
            })}
        </div>
    });

    html! {
        <Section title="Meet the Team">{content}</Section>
    }
}
