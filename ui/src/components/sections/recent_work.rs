use payloads::{Product, Resource};
use yew::prelude::*;

use super::Section;
use crate::get_api_client;
use crate::hooks::use_collection;

/// Products shown on the home page before "View all".
const PREVIEW_COUNT: usize = 6;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component]
pub fn ProductCard(props: &ProductCardProps) -> Html {
    let product = &props.product;

    html! {
        <div class="rounded-lg border border-neutral-200 overflow-hidden bg-white flex flex-col">
            if let Some(image) = product.image() {
                <img
                    src={get_api_client().image_url(image)}
                    alt={product.name.clone()}
                    class="h-48 w-full object-cover bg-neutral-100"
                />
            }
            <div class="p-5 flex-1 flex flex-col">
                <h3 class="text-lg font-semibold">{&product.name}</h3>
                <p class="mt-2 text-neutral-600 flex-1">{&product.description}</p>
                if let Some(link) = product.link.as_deref().filter(|l| !l.is_empty()) {
                    <a
                        href={link.to_string()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="mt-4 text-sm font-medium text-neutral-900 underline"
                    >
                        {"Visit"}
                    </a>
                }
            </div>
        </div>
    }
}

#[function_component]
pub fn RecentWorkSection() -> Html {
    let products = use_collection::<Product>();

    let content = products.render("recent work", |products, _, _| html! {
        <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
            {for products.iter().take(PREVIEW_COUNT).map(|product| html! {
                <ProductCard key={product.id.to_string()} product={product.clone()} />
            })}
        </div>
    });

    html! {
        <Section title="Recent Work" class="bg-neutral-50">{content}</Section>
    }
}
