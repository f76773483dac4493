use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Products, "Products"),
    (Route::Blog, "Blog"),
    (Route::Contact, "Contact"),
];

#[function_component]
pub fn Header() -> Html {
    let menu_open = use_state(|| false);
    let current = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let link_class = |route: &Route| {
        if current.as_ref() == Some(route) {
            "text-sm font-semibold text-neutral-900"
        } else {
            "text-sm font-medium text-neutral-600 hover:text-neutral-900"
        }
    };

    html! {
        <header class="bg-white border-b border-neutral-200 sticky top-0 z-30">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route>
                        to={Route::Home}
                        classes="text-xl font-bold text-neutral-900"
                    >
                        {"Company"}
                    </Link<Route>>
                    <nav class="hidden md:flex items-center gap-6">
                        {for NAV_LINKS.iter().map(|(route, label)| html! {
                            <Link<Route> to={route.clone()} classes={link_class(route)}>
                                {*label}
                            </Link<Route>>
                        })}
                    </nav>
                    <button
                        onclick={toggle_menu}
                        class="md:hidden p-2 text-neutral-700"
                        aria-label="Toggle menu"
                    >
                        {if *menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
                if *menu_open {
                    <nav
                        onclick={close_menu}
                        class="md:hidden flex flex-col gap-3 pb-4"
                    >
                        {for NAV_LINKS.iter().map(|(route, label)| html! {
                            <Link<Route> to={route.clone()} classes={link_class(route)}>
                                {*label}
                            </Link<Route>>
                        })}
                    </nav>
                }
            </div>
        </header>
    }
}
