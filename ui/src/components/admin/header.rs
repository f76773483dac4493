use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_logout;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

#[function_component]
pub fn AdminHeader(props: &Props) -> Html {
    let on_logout = use_logout();

    html! {
        <header class="flex items-center justify-between px-6 py-4 border-b \
                       border-neutral-200 bg-white">
            <h1 class="text-xl font-semibold text-neutral-900">{&props.title}</h1>
            <div class="flex items-center gap-4">
                <Link<Route> to={Route::Home} classes="text-sm text-neutral-600 hover:text-neutral-900">
                    {"View site"}
                </Link<Route>>
                <button
                    onclick={on_logout}
                    class="px-3 py-1.5 text-sm font-medium text-neutral-700
                           border border-neutral-300 rounded-md
                           hover:bg-neutral-50"
                >
                    {"Log out"}
                </button>
            </div>
        </header>
    }
}
