use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Hero() -> Html {
    html! {
        <section class="bg-neutral-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 text-center">
                <h1 class="text-4xl sm:text-5xl font-bold tracking-tight">
                    {"We build software that grows with you"}
                </h1>
                <p class="mt-6 text-lg text-neutral-300 max-w-2xl mx-auto">
                    {"Product design, engineering and support for teams of every size."}
                </p>
                <div class="mt-10 flex justify-center gap-4">
                    <Link<Route>
                        to={Route::Contact}
                        classes="px-6 py-3 rounded-md bg-white text-neutral-900 font-medium hover:bg-neutral-200"
                    >
                        {"Get in touch"}
                    </Link<Route>>
                    <Link<Route>
                        to={Route::Services}
                        classes="px-6 py-3 rounded-md border border-neutral-500 font-medium hover:bg-neutral-800"
                    >
                        {"Our services"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
