use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Labelled input for the account forms.
#[function_component]
pub fn TextInput(props: &Props) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div>
            <label
                for={props.id.clone()}
                class="block text-sm font-medium text-neutral-700 mb-2"
            >
                {&props.label}
            </label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                {oninput}
                autocomplete={props.autocomplete.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                required={true}
                class="w-full px-3 py-2 border border-neutral-300 rounded-md
                       shadow-sm bg-white text-neutral-900
                       focus:outline-none focus:ring-2 focus:ring-neutral-500
                       focus:border-neutral-500"
            />
        </div>
    }
}
