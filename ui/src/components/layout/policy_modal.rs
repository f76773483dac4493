use payloads::{PolicyDocument, PolicyKind};
use yew::prelude::*;

use crate::components::{HtmlContent, Modal};
use crate::hooks::use_singleton;

#[derive(Properties, PartialEq)]
pub struct PolicyModalProps {
    pub on_close: Callback<()>,
}

/// Shows one policy document, fetched when the modal opens.
#[function_component]
pub fn PolicyModal<K: PolicyKind>(props: &PolicyModalProps) -> Html {
    let policy = use_singleton::<PolicyDocument<K>>();

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal on_close={props.on_close.clone()} max_width="max-w-3xl">
            <div class="flex items-start justify-between mb-4">
                <h2 class="text-xl font-semibold">{K::LABEL}</h2>
                <button
                    onclick={on_close_click}
                    class="text-neutral-500 hover:text-neutral-900"
                    aria-label="Close"
                >
                    {"✕"}
                </button>
            </div>
            {policy.render(&K::LABEL.to_lowercase(), |document, _, _| {
                match document {
                    Some(document) => html! {
                        <>
                            if !document.title.is_empty() && document.title != K::LABEL {
                                <h3 class="text-lg font-medium mb-2">{&document.title}</h3>
                            }
                            <HtmlContent html={document.content.clone()} />
                        </>
                    },
                    None => html! {
                        <p class="text-neutral-600">
                            {format!("The {} has not been published yet.", K::LABEL)}
                        </p>
                    },
                }
            })}
        </Modal>
    }
}
