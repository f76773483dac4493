use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// HTML as stored by the API.
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Renders rich text written in the admin panel (blog posts, policies).
#[function_component]
pub fn HtmlContent(props: &Props) -> Html {
    let classes = classes!(
        "prose",
        "prose-neutral",
        "max-w-none",
        "prose-p:my-2",
        "prose-headings:mt-4",
        "prose-headings:mb-2",
        props.class.clone()
    );

    html! {
        <div class={classes}>
            { Html::from_html_unchecked(props.html.clone()) }
        </div>
    }
}
