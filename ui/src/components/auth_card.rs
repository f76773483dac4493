use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Centered card holding the login and password reset forms.
#[function_component]
pub fn AuthCard(props: &Props) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-neutral-50 px-4">
            <div class="max-w-md w-full bg-white p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 mb-2">
                        {&props.title}
                    </h1>
                    <p class="text-neutral-600">{&props.description}</p>
                </div>
                if let Some(error) = &props.error {
                    <div class="mb-6 p-4 rounded-md bg-red-50 border border-red-200">
                        <p class="text-sm text-red-700">{error}</p>
                    </div>
                }
                {for props.children.iter()}
            </div>
        </div>
    }
}
