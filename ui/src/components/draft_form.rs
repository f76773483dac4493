//! One form for every entity: fields come from the draft's table.

use payloads::{Draft, FieldErrors, FieldKind, FieldSpec, ImageField};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{ImageInput, RichTextEditor};
use crate::utils::render_markdown;

#[derive(Properties, PartialEq)]
pub struct DraftFormProps<D: Draft> {
    /// Starting values; a default draft for "add", the item's draft for
    /// "edit".
    pub initial: D,
    pub submit_text: AttrValue,
    pub on_submit: Callback<D>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
    #[prop_or_default]
    pub is_saving: bool,
    /// Error returned by the server for the last submit.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Full URL of the currently stored image, if any.
    #[prop_or_default]
    pub image_url: Option<AttrValue>,
}

/// Renders the draft's fields, checks required fields before submitting,
/// and hands the completed draft to `on_submit`. Rich text is converted to
/// HTML at that point.
#[function_component]
pub fn DraftForm<D: Draft>(props: &DraftFormProps<D>) -> Html {
    let draft = use_state(|| props.initial.clone());
    let errors = use_state(FieldErrors::default);

    let on_field_change = {
        let draft = draft.clone();
        Callback::from(move |(key, value): (&'static str, String)| {
            let mut updated = (*draft).clone();
            updated.set(key, value);
            draft.set(updated);
        })
    };

    let on_image_change = {
        let draft = draft.clone();
        Callback::from(move |image: ImageField| {
            let mut updated = (*draft).clone();
            if let Some(field) = updated.image_mut() {
                *field = image;
            }
            draft.set(updated);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        let is_saving = props.is_saving;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if is_saving {
                return;
            }

            let mut submitted = (*draft).clone();
            for field in D::fields() {
                if field.kind == FieldKind::RichText {
                    let source = submitted.get(field.key);
                    if !source.trim().is_empty() {
                        submitted.set(field.key, render_markdown(&source));
                    }
                }
            }

            match submitted.validate() {
                Ok(()) => {
                    errors.set(FieldErrors::default());
                    on_submit.emit(submitted);
                }
                Err(field_errors) => errors.set(field_errors),
            }
        })
    };

    let on_cancel_click = props.on_cancel.clone().map(|on_cancel| {
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    });

    let disabled = props.is_saving;

    html! {
        <form onsubmit={on_submit} class="space-y-4" novalidate={true}>
            {for D::fields().iter().map(|field| {
                let error = errors.get(field.key).map(|e| AttrValue::from(e.to_string()));
                if field.kind == FieldKind::Image {
                    html! {
                        <ImageInput
                            key={field.key}
                            label={field.label}
                            value={draft.image().cloned().unwrap_or_default()}
                            on_change={on_image_change.clone()}
                            existing_url={props.image_url.clone()}
                            required={field.required}
                            {error}
                            {disabled}
                        />
                    }
                } else {
                    html! {
                        <FieldRow
                            key={field.key}
                            field={*field}
                            value={draft.get(field.key)}
                            on_change={on_field_change.clone()}
                            {error}
                            {disabled}
                        />
                    }
                }
            })}

            if let Some(error) = &props.error {
                <div class="p-3 rounded-md bg-red-50 border border-red-200">
                    <p class="text-sm text-red-700">{error}</p>
                </div>
            }

            <div class="flex justify-end gap-3 pt-2">
                if let Some(onclick) = on_cancel_click {
                    <button
                        type="button"
                        {onclick}
                        disabled={disabled}
                        class="px-4 py-2 text-sm font-medium text-neutral-700
                               bg-white border border-neutral-300 rounded-md
                               hover:bg-neutral-50 transition-colors"
                    >
                        {"Cancel"}
                    </button>
                }
                <button
                    type="submit"
                    disabled={disabled}
                    class="px-4 py-2 text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-700 rounded-md
                           disabled:opacity-50 transition-colors"
                >
                    {if disabled { "Saving..." } else { props.submit_text.as_str() }}
                </button>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct FieldRowProps {
    field: FieldSpec,
    value: AttrValue,
    on_change: Callback<(&'static str, String)>,
    error: Option<AttrValue>,
    disabled: bool,
}

#[function_component]
fn FieldRow(props: &FieldRowProps) -> Html {
    let FieldSpec {
        key,
        label,
        kind,
        required,
    } = props.field;
    let disabled = props.disabled;
    let input_id = format!("field-{key}");

    let input_class = if props.error.is_some() {
        "w-full px-3 py-2 border border-red-400 rounded-md \
         focus:outline-none focus:ring-2 focus:ring-red-400"
    } else {
        "w-full px-3 py-2 border border-neutral-300 rounded-md \
         focus:outline-none focus:ring-2 focus:ring-neutral-500"
    };

    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((key, input.value()));
        })
    };

    let control = match kind {
        FieldKind::TextArea => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                on_change.emit((key, textarea.value()));
            });
            html! {
                <textarea
                    id={input_id.clone()}
                    value={props.value.clone()}
                    {oninput}
                    {disabled}
                    rows="4"
                    class={input_class}
                />
            }
        }
        FieldKind::RichText => {
            let on_change = props.on_change.clone();
            html! {
                <RichTextEditor
                    text={props.value.clone()}
                    on_change={Callback::from(move |text| on_change.emit((key, text)))}
                    {disabled}
                />
            }
        }
        FieldKind::Select(options) => {
            let on_change = props.on_change.clone();
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                on_change.emit((key, select.value()));
            });
            html! {
                <select id={input_id.clone()} {onchange} {disabled} class={input_class}>
                    <option value="" selected={props.value.is_empty()}>
                        {format!("Select {}", label.to_lowercase())}
                    </option>
                    {for options.iter().map(|(value, text)| html! {
                        <option
                            value={*value}
                            selected={props.value.as_str() == *value}
                        >
                            {*text}
                        </option>
                    })}
                </select>
            }
        }
        _ => html! {
            <input
                id={input_id.clone()}
                type={input_type(kind)}
                value={props.value.clone()}
                oninput={on_input}
                {disabled}
                class={input_class}
            />
        },
    };

    html! {
        <div>
            <label
                for={input_id}
                class="block text-sm font-medium text-neutral-700 mb-1"
            >
                {label}
                if required {
                    <span class="text-red-500">{" *"}</span>
                }
            </label>
            {control}
            if kind == FieldKind::Tags {
                <p class="mt-1 text-xs text-neutral-500">{"Separate with commas"}</p>
            }
            if let Some(error) = &props.error {
                <p class="mt-1 text-sm text-red-600">{error}</p>
            }
        </div>
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Url => "url",
        FieldKind::Tel => "tel",
        FieldKind::Number => "number",
        FieldKind::Date => "date",
        FieldKind::Password => "password",
        _ => "text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_types_follow_field_kind() {
        assert_eq!(input_type(FieldKind::Email), "email");
        assert_eq!(input_type(FieldKind::Number), "number");
        assert_eq!(input_type(FieldKind::Date), "date");
        assert_eq!(input_type(FieldKind::Tags), "text");
    }
}
