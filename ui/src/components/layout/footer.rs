use payloads::{ContactInfo, PrivacyPolicy, RefundPolicy, TermsOfService};
use yew::prelude::*;
use yew_router::prelude::*;

use super::PolicyModal;
use crate::Route;
use crate::hooks::use_singleton;

#[derive(Clone, Copy, PartialEq)]
enum OpenPolicy {
    Privacy,
    Refund,
    Terms,
}

#[function_component]
pub fn Footer() -> Html {
    let open_policy = use_state(|| None::<OpenPolicy>);
    let contact = use_singleton::<ContactInfo>();

    let open = |policy: OpenPolicy| {
        let open_policy = open_policy.clone();
        Callback::from(move |_: MouseEvent| open_policy.set(Some(policy)))
    };
    let on_close = {
        let open_policy = open_policy.clone();
        Callback::from(move |()| open_policy.set(None))
    };

    let contact_details = match contact.data.as_ref() {
        Some(Some(info)) => html! {
            <ul class="space-y-1 text-sm text-neutral-400">
                if !info.email.is_empty() {
                    <li>
                        <a href={format!("mailto:{}", info.email)} class="hover:text-white">
                            {&info.email}
                        </a>
                    </li>
                }
                if !info.phone.is_empty() {
                    <li>{&info.phone}</li>
                }
                if !info.address.is_empty() {
                    <li>{&info.address}</li>
                }
            </ul>
        },
        _ => html! {},
    };

    let policy_button = "text-sm text-neutral-400 hover:text-white";

    html! {
        <footer class="bg-neutral-900 text-neutral-200 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10 \
                        grid gap-8 md:grid-cols-3">
                <div>
                    <h3 class="text-lg font-semibold text-white mb-2">{"Company"}</h3>
                    {contact_details}
                </div>
                <div class="flex flex-col gap-2">
                    <Link<Route> to={Route::About} classes="text-sm text-neutral-400 hover:text-white">
                        {"About"}
                    </Link<Route>>
                    <Link<Route> to={Route::Services} classes="text-sm text-neutral-400 hover:text-white">
                        {"Services"}
                    </Link<Route>>
                    <Link<Route> to={Route::Blog} classes="text-sm text-neutral-400 hover:text-white">
                        {"Blog"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="text-sm text-neutral-400 hover:text-white">
                        {"Contact"}
                    </Link<Route>>
                </div>
                <div class="flex flex-col items-start gap-2">
                    <button onclick={open(OpenPolicy::Privacy)} class={policy_button}>
                        {"Privacy Policy"}
                    </button>
                    <button onclick={open(OpenPolicy::Refund)} class={policy_button}>
                        {"Refund Policy"}
                    </button>
                    <button onclick={open(OpenPolicy::Terms)} class={policy_button}>
                        {"Terms & Conditions"}
                    </button>
                </div>
            </div>
            {match *open_policy {
                Some(OpenPolicy::Privacy) => html! {
                    <PolicyModal<PrivacyPolicy> on_close={on_close.clone()} />
                },
                Some(OpenPolicy::Refund) => html! {
                    <PolicyModal<RefundPolicy> on_close={on_close.clone()} />
                },
                Some(OpenPolicy::Terms) => html! {
                    <PolicyModal<TermsOfService> on_close={on_close.clone()} />
                },
                None => html! {},
            }}
        </footer>
    }
}
