use payloads::{
    Achievement, Blog, ContactSubmission, GrowthStep, Product, Resource,
    Service, TeamMember,
};
use yew::prelude::*;

use super::RegisterAdminForm;
use crate::get_api_client;
use crate::hooks::{use_collection, use_fetch};

#[function_component]
pub fn Dashboard() -> Html {
    let visitors = use_fetch((), || async move {
        get_api_client().visitor_count().await
    });

    html! {
        <div class="space-y-8">
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                <div class="p-5 rounded-lg border border-neutral-200 bg-white">
                    <p class="text-sm text-neutral-600">{"Visitors"}</p>
                    <p class="mt-1 text-3xl font-semibold text-neutral-900">
                        {match (visitors.data.as_ref(), &visitors.error) {
                            (Some(count), _) => count.count.to_string(),
                            (None, Some(_)) => "Unavailable".to_string(),
                            (None, None) => "…".to_string(),
                        }}
                    </p>
                </div>
                <CollectionCount<Product> />
                <CollectionCount<Service> />
                <CollectionCount<TeamMember> />
                <CollectionCount<Achievement> />
                <CollectionCount<GrowthStep> />
                <CollectionCount<Blog> />
                <CollectionCount<ContactSubmission> />
            </div>
            <div class="p-6 rounded-lg border border-neutral-200 bg-white">
                <RegisterAdminForm />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CollectionCountProps {}

#[function_component]
fn CollectionCount<R: Resource>(_props: &CollectionCountProps) -> Html {
    let items = use_collection::<R>();

    let count = match (items.data.as_ref(), &items.error) {
        (Some(items), _) => items.len().to_string(),
        (None, Some(_)) => "Unavailable".to_string(),
        (None, None) => "…".to_string(),
    };

    html! {
        <div class="p-5 rounded-lg border border-neutral-200 bg-white">
            <p class="text-sm text-neutral-600">{R::PLURAL}</p>
            <p class="mt-1 text-3xl font-semibold text-neutral-900">{count}</p>
        </div>
    }
}
