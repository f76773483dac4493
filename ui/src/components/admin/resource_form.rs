use payloads::Resource;
use yew::prelude::*;

use crate::components::{DraftForm, Modal};
use crate::contexts::use_toast;
use crate::get_api_client;
use crate::hooks::use_error_reporter;

#[derive(Properties, PartialEq)]
pub struct Props<R: Resource> {
    /// The item being edited; `None` to create a new one.
    #[prop_or_default]
    pub item: Option<R>,
    /// Called after a successful save. The parent refetches its list.
    pub on_close: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Add/edit dialog for one collection item. Sends exactly one request per
/// submit: `PUT {endpoint}/{id}` when editing, `POST {endpoint}` otherwise.
#[function_component]
pub fn ResourceForm<R: Resource>(props: &Props<R>) -> Html {
    let is_saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let toast = use_toast();
    let reporter = use_error_reporter();

    let initial = props
        .item
        .as_ref()
        .map(R::to_draft)
        .unwrap_or_default();
    let image_url = props
        .item
        .as_ref()
        .and_then(R::image)
        .map(|image| AttrValue::from(get_api_client().image_url(image)));
    let is_edit = props.item.is_some();

    let on_submit = {
        let id = props.item.as_ref().map(|item| item.id().clone());
        let is_saving = is_saving.clone();
        let error = error.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |draft: R::Draft| {
            let id = id.clone();
            let is_saving = is_saving.clone();
            let error = error.clone();
            let on_close = on_close.clone();
            let toast = toast.clone();
            let reporter = reporter.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);
                error.set(None);

                match get_api_client().save::<R>(id.as_ref(), &draft).await {
                    Ok(()) => {
                        let verb = if id.is_some() { "Updated" } else { "Added" };
                        toast.success(format!("{verb} {}", R::LABEL.to_lowercase()));
                        is_saving.set(false);
                        on_close.emit(());
                    }
                    Err(e) => {
                        let action = if id.is_some() { "update" } else { "add" };
                        reporter.report(
                            &format!("{action} {}", R::LABEL.to_lowercase()),
                            &e,
                        );
                        error.set(Some(e.to_string()));
                        is_saving.set(false);
                    }
                }
            });
        })
    };

    let title = if is_edit {
        format!("Edit {}", R::LABEL)
    } else {
        format!("Add {}", R::LABEL)
    };

    html! {
        <Modal on_close={props.on_cancel.clone()} max_width="max-w-2xl">
            <h2 class="text-lg font-semibold text-neutral-900 mb-4">{title}</h2>
            <DraftForm<R::Draft>
                {initial}
                submit_text={if is_edit { "Save changes" } else { "Add" }}
                {on_submit}
                on_cancel={Some(props.on_cancel.clone())}
                is_saving={*is_saving}
                error={(*error).clone().map(AttrValue::from)}
                {image_url}
            />
        </Modal>
    }
}
