use payloads::Singleton;
use yew::prelude::*;

use crate::components::DraftForm;
use crate::contexts::use_toast;
use crate::get_api_client;
use crate::hooks::{use_error_reporter, use_singleton};

#[derive(Properties, PartialEq)]
pub struct Props {}

/// Edits a single-record document with `PUT {endpoint}`. A document that
/// does not exist yet starts from its defaults.
#[function_component]
pub fn SingletonEditor<S: Singleton>(_props: &Props) -> Html {
    let document = use_singleton::<S>();
    let is_saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let toast = use_toast();
    let reporter = use_error_reporter();

    let on_submit = {
        let is_saving = is_saving.clone();
        let error = error.clone();
        let refetch = document.refetch.clone();

        Callback::from(move |draft: S::Draft| {
            let is_saving = is_saving.clone();
            let error = error.clone();
            let refetch = refetch.clone();
            let toast = toast.clone();
            let reporter = reporter.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);
                error.set(None);

                match get_api_client().save_singleton::<S>(&draft).await {
                    Ok(()) => {
                        toast.success(format!("Saved {}", S::LABEL));
                        refetch.emit(());
                    }
                    Err(e) => {
                        reporter.report(
                            &format!("save {}", S::LABEL.to_lowercase()),
                            &e,
                        );
                        error.set(Some(e.to_string()));
                    }
                }

                is_saving.set(false);
            });
        })
    };

    document.render(&S::LABEL.to_lowercase(), |current, _, _| {
        let initial = current.clone().unwrap_or_default().to_draft();
        html! {
            <div class="max-w-2xl space-y-4">
                if current.is_none() {
                    <p class="text-sm text-neutral-600">
                        {format!("{} has not been created yet.", S::LABEL)}
                    </p>
                }
                <DraftForm<S::Draft>
                    {initial}
                    submit_text="Save"
                    on_submit={on_submit.clone()}
                    is_saving={*is_saving}
                    error={(*error).clone().map(AttrValue::from)}
                />
            </div>
        }
    })
}
