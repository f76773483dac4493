use payloads::ContactInfo;
use yew::prelude::*;

use crate::hooks::use_singleton;

/// Email, phone, address and hours from the contact info document.
#[function_component]
pub fn ContactDetails() -> Html {
    let info = use_singleton::<ContactInfo>();

    info.render("contact details", |info, _, _| match info {
        Some(info) => {
            let rows = [
                ("Email", &info.email),
                ("Phone", &info.phone),
                ("Address", &info.address),
                ("Working hours", &info.working_hours),
            ];
            html! {
                <dl class="space-y-4">
                    {for rows.into_iter().filter(|(_, value)| !value.is_empty()).map(|(label, value)| html! {
                        <div key={label}>
                            <dt class="text-sm font-medium text-neutral-500">{label}</dt>
                            <dd class="text-neutral-900 whitespace-pre-line">{value.clone()}</dd>
                        </div>
                    })}
                </dl>
            }
        }
        None => html! {
            <p class="text-neutral-600">{"Contact details will be available soon."}</p>
        },
    })
}
