use payloads::{ContactSubmission, ContactSubmissionDraft};
use yew::prelude::*;

use crate::components::DraftForm;
use crate::components::sections::{ContactDetails, Section};
use crate::contexts::use_toast;
use crate::get_api_client;
use crate::hooks::use_title;

#[function_component]
pub fn ContactPage() -> Html {
    use_title("Contact");
    let is_saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let sent = use_state(|| false);
    let toast = use_toast();

    let on_submit = {
        let is_saving = is_saving.clone();
        let error = error.clone();
        let sent = sent.clone();

        Callback::from(move |draft: ContactSubmissionDraft| {
            let is_saving = is_saving.clone();
            let error = error.clone();
            let sent = sent.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);
                error.set(None);

                match get_api_client().create::<ContactSubmission>(&draft).await {
                    Ok(()) => {
                        toast.success("Thanks! We will be in touch soon.");
                        sent.set(true);
                    }
                    Err(e) => {
                        tracing::error!("contact form: {e}");
                        toast.error(format!("Could not send your message: {e}"));
                        error.set(Some(e.to_string()));
                    }
                }

                is_saving.set(false);
            });
        })
    };

    let send_another = {
        let sent = sent.clone();
        Callback::from(move |_: MouseEvent| sent.set(false))
    };

    html! {
        <Section title="Contact Us" subtitle="Tell us about your project">
            <div class="grid gap-12 md:grid-cols-3">
                <div class="md:col-span-1">
                    <ContactDetails />
                </div>
                <div class="md:col-span-2">
                    if *sent {
                        <div class="p-6 rounded-lg bg-neutral-50 text-center">
                            <p class="font-semibold text-neutral-900">{"Message sent"}</p>
                            <button
                                onclick={send_another}
                                class="mt-4 text-sm font-medium underline"
                            >
                                {"Send another"}
                            </button>
                        </div>
                    } else {
                        <DraftForm<ContactSubmissionDraft>
                            initial={ContactSubmissionDraft::default()}
                            submit_text="Send message"
                            {on_submit}
                            is_saving={*is_saving}
                            error={(*error).clone().map(AttrValue::from)}
                        />
                    }
                </div>
            </div>
        </Section>
    }
}
