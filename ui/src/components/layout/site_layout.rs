use yew::prelude::*;

use super::{Footer, Header};

#[derive(Properties, PartialEq)]
pub struct SiteLayoutProps {
    pub children: Children,
}

/// Navigation bar and footer around every public page.
#[function_component]
pub fn SiteLayout(props: &SiteLayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-white text-neutral-900">
            <Header />
            <main class="flex-1">
                {for props.children.iter()}
            </main>
            <Footer />
        </div>
    }
}
