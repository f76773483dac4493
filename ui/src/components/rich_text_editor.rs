//! Markdown/HTML editor with a rendered preview.

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::HtmlContent;
use crate::utils::render_markdown;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The current source text (controlled by parent).
    pub text: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn RichTextEditor(props: &Props) -> Html {
    let show_preview = use_state(|| false);

    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(textarea.value());
        })
    };

    let on_toggle_preview = {
        let show_preview = show_preview.clone();
        Callback::from(move |_: MouseEvent| show_preview.set(!*show_preview))
    };

    html! {
        <div class="space-y-2">
            <div class="flex items-center justify-between">
                <p class="text-xs text-neutral-500">
                    {"Markdown or HTML. Converted to HTML when saved."}
                </p>
                <button
                    type="button"
                    onclick={on_toggle_preview}
                    class="text-xs font-medium text-neutral-700
                           hover:text-neutral-900 underline"
                >
                    {if *show_preview { "Edit" } else { "Preview" }}
                </button>
            </div>
            if *show_preview {
                <div class="min-h-[12rem] p-3 border border-neutral-200
                            rounded-md bg-neutral-50">
                    <HtmlContent html={render_markdown(&props.text)} />
                </div>
            } else {
                <textarea
                    value={props.text.clone()}
                    oninput={on_input}
                    disabled={props.disabled}
                    rows="12"
                    class="w-full px-3 py-2 border border-neutral-300
                           rounded-md font-mono text-sm
                           focus:outline-none focus:ring-2
                           focus:ring-neutral-500"
                />
            }
        </div>
    }
}
