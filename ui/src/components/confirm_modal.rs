use yew::prelude::*;

use super::Modal;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    /// e.g. "Delete product"
    pub title: AttrValue,
    pub message: AttrValue,
    /// e.g. "Delete"
    pub confirm_text: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

/// Asks before a destructive action.
#[function_component]
pub fn ConfirmModal(props: &ConfirmModalProps) -> Html {
    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal on_close={props.on_close.clone()}>
            <h3 class="text-lg font-semibold text-neutral-900 mb-4">
                {&props.title}
            </h3>
            <p class="text-sm text-neutral-600">
                {&props.message}{" "}
                <span class="font-semibold text-red-600">
                    {"This cannot be undone."}
                </span>
            </p>
            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={on_cancel_click}
                    class="px-4 py-2 text-sm font-medium text-neutral-700
                           bg-white border border-neutral-300 rounded-md
                           hover:bg-neutral-50 transition-colors"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_confirm_click}
                    class="px-4 py-2 text-sm font-medium text-white
                           bg-red-600 hover:bg-red-700 rounded-md
                           transition-colors"
                >
                    {&props.confirm_text}
                </button>
            </div>
        </Modal>
    }
}
