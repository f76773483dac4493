use payloads::{Product, ResourceList};
use yew::prelude::*;

use crate::components::PaginationControls;
use crate::components::sections::{ProductCard, Section};
use crate::hooks::{use_collection, use_title};

/// Every product, nine per page. The whole collection is fetched once and
/// paged in the browser.
#[function_component]
pub fn ProductsPage() -> Html {
    use_title("Products");
    let products = use_collection::<Product>();
    let page = use_state(|| 1usize);

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: usize| {
            page.set(next);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let content = products.render("products", |products, is_loading, _| {
        if products.is_empty() {
            return html! {
                <p class="text-center text-neutral-600">{"No products yet."}</p>
            };
        }
        let mut list = ResourceList::new(products.clone());
        list.go_to(*page);
        html! {
            <>
                <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
                    {for list.visible().iter().map(|product| html! {
                        <ProductCard key={product.id.to_string()} product={product.clone()} />
                    })}
                </div>
                <PaginationControls
                    current_page={list.current_page()}
                    total_pages={list.total_pages()}
                    on_page_change={on_page_change.clone()}
                    {is_loading}
                />
            </>
        }
    });

    html! {
        <Section title="Our Products" subtitle="Things we have built">
            {content}
        </Section>
    }
}
