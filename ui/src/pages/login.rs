use payloads::requests;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{AuthCard, TextInput};
use crate::contexts::use_session;
use crate::hooks::use_title;
use crate::utils::is_dev_mode;
use crate::{Route, get_api_client};

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Admin login");
    let session = use_session();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Already logged in
    {
        let navigator = navigator.clone();
        use_effect_with(session.is_authenticated(), move |is_auth| {
            if *is_auth && let Some(navigator) = &navigator {
                navigator.push(&Route::Admin);
            }
        });
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let credentials = requests::LoginCredentials {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            if credentials.email.is_empty() || credentials.password.is_empty()
            {
                error.set(Some(
                    "Please enter both email and password".to_string(),
                ));
                return;
            }

            let error = error.clone();
            let is_loading = is_loading.clone();
            let session = session.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match get_api_client().login(&credentials).await {
                    Ok(token) => {
                        session.login(token.token);
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Admin);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("login failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let set = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |value: String| state.set(value))
    };

    html! {
        <AuthCard
            title="Admin login"
            description="Sign in to manage the site"
            error={(*error).clone().map(AttrValue::from)}
        >
            <form onsubmit={onsubmit} class="space-y-6">
                <TextInput
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value={(*email).clone()}
                    on_change={set(&email)}
                    disabled={*is_loading}
                />
                <TextInput
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value={(*password).clone()}
                    on_change={set(&password)}
                    disabled={*is_loading}
                />
                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full py-2 px-4 rounded-md text-sm font-medium
                           text-white bg-neutral-900 hover:bg-neutral-800
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if *is_loading { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <div class="mt-6 text-center">
                <Link<Route> to={Route::EmailRequest} classes="text-sm text-neutral-600 hover:text-neutral-900 underline">
                    {"Forgot your password?"}
                </Link<Route>>
            </div>
            if is_dev_mode() {
                <p class="mt-4 text-center text-sm text-neutral-500">
                    {"Development credentials: admin@example.com / supersecret"}
                </p>
            }
        </AuthCard>
    }
}
