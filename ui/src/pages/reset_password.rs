use payloads::requests;
use yew::prelude::*;
use yew_router::prelude::*;

use super::EmailQuery;
use crate::components::{AuthCard, TextInput};
use crate::contexts::use_toast;
use crate::hooks::use_title;
use crate::{Route, get_api_client};

/// Last step: choose the new password, then log in with it.
#[function_component]
pub fn ResetPasswordPage() -> Html {
    use_title("Choose a new password");
    let navigator = use_navigator();
    let location = use_location();
    let toast = use_toast();
    let initial_email = location
        .and_then(|location| location.query::<EmailQuery>().ok())
        .unwrap_or_default()
        .email;

    let email = use_state(|| initial_email);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if email.trim().is_empty() || password.is_empty() {
                error.set(Some(
                    "Please enter your email and a new password".to_string(),
                ));
                return;
            }
            if *password != *confirm_password {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            let request = requests::ResetPassword {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match get_api_client().reset_password(&request).await {
                    Ok(_) => {
                        toast.success("Password updated. Please log in.");
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
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
            title="Choose a new password"
            description="Your code has been verified"
            error={(*error).clone().map(AttrValue::from)}
        >
            <form {onsubmit} class="space-y-6">
                <TextInput
                    id="email"
                    label="Email address"
                    input_type="email"
                    value={(*email).clone()}
                    on_change={set(&email)}
                    disabled={*is_loading}
                />
                <TextInput
                    id="password"
                    label="New password"
                    input_type="password"
                    autocomplete="new-password"
                    value={(*password).clone()}
                    on_change={set(&password)}
                    disabled={*is_loading}
                />
                <TextInput
                    id="confirm-password"
                    label="Confirm password"
                    input_type="password"
                    autocomplete="new-password"
                    value={(*confirm_password).clone()}
                    on_change={set(&confirm_password)}
                    disabled={*is_loading}
                />
                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full py-2 px-4 rounded-md text-sm font-medium
                           text-white bg-neutral-900 hover:bg-neutral-800
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if *is_loading { "Saving..." } else { "Update password" }}
                </button>
            </form>
        </AuthCard>
    }
}
