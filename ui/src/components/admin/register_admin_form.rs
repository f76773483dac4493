use payloads::requests;
use yew::prelude::*;

use crate::components::TextInput;
use crate::contexts::use_toast;
use crate::get_api_client;
use crate::hooks::use_error_reporter;

/// Adds another administrator account.
#[function_component]
pub fn RegisterAdminForm() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let toast = use_toast();
    let reporter = use_error_reporter();

    let setter = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |value: String| state.set(value))
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let details = requests::RegisterAdmin {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            if details.name.is_empty()
                || details.email.is_empty()
                || details.password.is_empty()
            {
                error.set(Some("Name, email and password are required".into()));
                return;
            }

            let name = name.clone();
            let email = email.clone();
            let password = password.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let toast = toast.clone();
            let reporter = reporter.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match get_api_client().register(&details).await {
                    Ok(_) => {
                        toast.success(format!("Registered {}", details.email));
                        name.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                    }
                    Err(e) => {
                        reporter.report("register admin", &e);
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <form {onsubmit} class="space-y-4 max-w-md">
            <h2 class="text-lg font-semibold text-neutral-900">{"Add administrator"}</h2>
            if let Some(error) = &*error {
                <div class="p-3 rounded-md bg-red-50 border border-red-200">
                    <p class="text-sm text-red-700">{error}</p>
                </div>
            }
            <TextInput
                id="register-name"
                label="Name"
                value={(*name).clone()}
                on_change={setter(&name)}
                disabled={*is_loading}
            />
            <TextInput
                id="register-email"
                label="Email"
                input_type="email"
                value={(*email).clone()}
                on_change={setter(&email)}
                disabled={*is_loading}
            />
            <TextInput
                id="register-password"
                label="Password"
                input_type="password"
                autocomplete="new-password"
                value={(*password).clone()}
                on_change={setter(&password)}
                disabled={*is_loading}
            />
            <button
                type="submit"
                disabled={*is_loading}
                class="px-4 py-2 text-sm font-medium text-white bg-neutral-900
                       hover:bg-neutral-700 rounded-md disabled:opacity-50"
            >
                {if *is_loading { "Registering..." } else { "Register" }}
            </button>
        </form>
    }
}
