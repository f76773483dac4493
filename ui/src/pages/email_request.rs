use payloads::requests;
use yew::prelude::*;
use yew_router::prelude::*;

use super::EmailQuery;
use crate::components::{AuthCard, TextInput};
use crate::contexts::use_toast;
use crate::hooks::use_title;
use crate::{Route, get_api_client};

/// First password reset step: ask for a one-time code by email.
#[function_component]
pub fn EmailRequestPage() -> Html {
    use_title("Reset password");
    let navigator = use_navigator();
    let toast = use_toast();
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let address = email.trim().to_string();
            if address.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }

            let error = error.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let request = requests::EmailRequest {
                    email: address.clone(),
                };
                match get_api_client().email_request(&request).await {
                    Ok(response) => {
                        toast.success(response.message);
                        let query = EmailQuery { email: address };
                        if let Some(navigator) = &navigator
                            && let Err(e) = navigator
                                .push_with_query(&Route::VerifyOtp, &query)
                        {
                            tracing::error!("navigation failed: {e}");
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }

                is_loading.set(false);
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    html! {
        <AuthCard
            title="Reset your password"
            description="We will email you a one-time code"
            error={(*error).clone().map(AttrValue::from)}
        >
            <form {onsubmit} class="space-y-6">
                <TextInput
                    id="email"
                    label="Email address"
                    input_type="email"
                    autocomplete="email"
                    value={(*email).clone()}
                    on_change={on_email}
                    disabled={*is_loading}
                />
                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full py-2 px-4 rounded-md text-sm font-medium
                           text-white bg-neutral-900 hover:bg-neutral-800
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if *is_loading { "Sending..." } else { "Send code" }}
                </button>
            </form>
            <div class="mt-6 text-center">
                <Link<Route> to={Route::Login} classes="text-sm text-neutral-600 underline">
                    {"Back to login"}
                </Link<Route>>
            </div>
        </AuthCard>
    }
}
