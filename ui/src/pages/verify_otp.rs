use payloads::requests;
use yew::prelude::*;
use yew_router::prelude::*;

use super::EmailQuery;
use crate::components::{AuthCard, TextInput};
use crate::hooks::use_title;
use crate::{Route, get_api_client};

/// Second step: confirm the emailed code.
#[function_component]
pub fn VerifyOtpPage() -> Html {
    use_title("Verify code");
    let navigator = use_navigator();
    let location = use_location();
    let initial_email = location
        .and_then(|location| location.query::<EmailQuery>().ok())
        .unwrap_or_default()
        .email;

    let email = use_state(|| initial_email);
    let otp = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let email = email.clone();
        let otp = otp.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = requests::VerifyOtp {
                email: email.trim().to_string(),
                otp: otp.trim().to_string(),
            };
            if request.email.is_empty() || request.otp.is_empty() {
                error.set(Some("Please enter your email and code".to_string()));
                return;
            }

            let error = error.clone();
            let is_loading = is_loading.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match get_api_client().verify_otp(&request).await {
                    Ok(_) => {
                        let query = EmailQuery {
                            email: request.email,
                        };
                        if let Some(navigator) = &navigator
                            && let Err(e) = navigator
                                .push_with_query(&Route::ResetPassword, &query)
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

    let set = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |value: String| state.set(value))
    };

    html! {
        <AuthCard
            title="Enter your code"
            description="Check your inbox for the one-time code"
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
                    id="otp"
                    label="Code"
                    autocomplete="one-time-code"
                    value={(*otp).clone()}
                    on_change={set(&otp)}
                    disabled={*is_loading}
                />
                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full py-2 px-4 rounded-md text-sm font-medium
                           text-white bg-neutral-900 hover:bg-neutral-800
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {if *is_loading { "Verifying..." } else { "Verify" }}
                </button>
            </form>
            <div class="mt-6 text-center">
                <Link<Route> to={Route::EmailRequest} classes="text-sm text-neutral-600 underline">
                    {"Send a new code"}
                </Link<Route>>
            </div>
        </AuthCard>
    }
}
