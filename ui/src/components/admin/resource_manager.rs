use payloads::Resource;
use yew::prelude::*;

use super::ResourceForm;
use crate::components::{ConfirmModal, PaginationControls};
use crate::get_api_client;
use crate::hooks::use_resource_list;

#[derive(Clone, PartialEq)]
enum Editing<R> {
    Add,
    Edit(R),
}

#[derive(Properties, PartialEq)]
pub struct Props {}

/// Grid of one collection with add, edit and delete. Pages hold nine items;
/// deleting removes the item locally without refetching.
#[function_component]
pub fn ResourceManager<R: Resource>(_props: &Props) -> Html {
    let list = use_resource_list::<R>();
    let editing = use_state(|| None::<Editing<R>>);
    let confirm_delete = use_state(|| None::<R>);

    let on_add = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(Some(Editing::Add)))
    };
    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(None))
    };
    let on_saved = {
        let editing = editing.clone();
        let refetch = list.refetch.clone();
        Callback::from(move |()| {
            editing.set(None);
            refetch.emit(());
        })
    };
    let on_retry = {
        let refetch = list.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };
    let on_confirm_delete = {
        let confirm_delete = confirm_delete.clone();
        let delete = list.delete.clone();
        Callback::from(move |()| {
            if let Some(item) = (*confirm_delete).clone() {
                delete.emit(item);
            }
            confirm_delete.set(None);
        })
    };
    let on_close_confirm = {
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |()| confirm_delete.set(None))
    };

    let body = if !list.is_fetched() {
        match &list.error {
            Some(error) => html! {
                <div class="p-4 rounded-md bg-red-50 border border-red-200 \
                            flex items-center justify-between">
                    <p class="text-sm text-red-700">
                        {format!("Error loading {}: {}", R::PLURAL.to_lowercase(), error)}
                    </p>
                    <button
                        onclick={on_retry}
                        class="px-3 py-1.5 text-sm font-medium text-red-700
                               border border-red-300 rounded-md hover:bg-red-100"
                    >
                        {"Retry"}
                    </button>
                </div>
            },
            None => html! {
                <p class="text-center py-12 text-neutral-600">
                    {format!("Loading {}...", R::PLURAL.to_lowercase())}
                </p>
            },
        }
    } else if list.list().is_empty() {
        html! {
            <p class="text-center py-12 text-neutral-600">
                {format!("No {} yet.", R::PLURAL.to_lowercase())}
            </p>
        }
    } else {
        html! {
            <>
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    {for list.list().visible().iter().map(|item| {
                        let on_edit = {
                            let editing = editing.clone();
                            let item = item.clone();
                            Callback::from(move |_: MouseEvent| {
                                editing.set(Some(Editing::Edit(item.clone())))
                            })
                        };
                        let on_delete = {
                            let confirm_delete = confirm_delete.clone();
                            let item = item.clone();
                            Callback::from(move |_: MouseEvent| {
                                confirm_delete.set(Some(item.clone()))
                            })
                        };
                        html! {
                            <ItemCard<R>
                                key={item.id().to_string()}
                                item={item.clone()}
                                {on_edit}
                                {on_delete}
                            />
                        }
                    })}
                </div>
                <PaginationControls
                    current_page={list.list().current_page()}
                    total_pages={list.list().total_pages()}
                    on_page_change={list.go_to.clone()}
                    is_loading={list.is_loading}
                />
            </>
        }
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <p class="text-sm text-neutral-600">
                    if list.is_fetched() {
                        {format!("{} {}", list.list().len(), R::PLURAL.to_lowercase())}
                    }
                </p>
                if R::EDITABLE {
                    <button
                        onclick={on_add}
                        class="px-4 py-2 text-sm font-medium text-white
                               bg-neutral-900 hover:bg-neutral-700 rounded-md"
                    >
                        {format!("Add {}", R::LABEL)}
                    </button>
                }
            </div>

            {body}

            {match &*editing {
                Some(Editing::Add) => html! {
                    <ResourceForm<R>
                        on_close={on_saved.clone()}
                        on_cancel={on_cancel.clone()}
                    />
                },
                Some(Editing::Edit(item)) => html! {
                    <ResourceForm<R>
                        item={Some(item.clone())}
                        on_close={on_saved.clone()}
                        on_cancel={on_cancel.clone()}
                    />
                },
                None => html! {},
            }}

            if let Some(item) = &*confirm_delete {
                <ConfirmModal
                    title={format!("Delete {}", R::LABEL.to_lowercase())}
                    message={format!("Delete \"{}\"?", item.title())}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_close_confirm}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ItemCardProps<R: Resource> {
    item: R,
    on_edit: Callback<MouseEvent>,
    on_delete: Callback<MouseEvent>,
}

#[function_component]
fn ItemCard<R: Resource>(props: &ItemCardProps<R>) -> Html {
    let item = &props.item;

    html! {
        <div class="border border-neutral-200 rounded-lg overflow-hidden bg-white \
                    flex flex-col">
            if let Some(image) = item.image() {
                <img
                    src={get_api_client().image_url(image)}
                    alt={item.title()}
                    class="h-40 w-full object-cover bg-neutral-100"
                />
            }
            <div class="p-4 flex-1">
                <h3 class="font-semibold text-neutral-900">{item.title()}</h3>
                if let Some(summary) = item.summary() {
                    <p class="mt-1 text-sm text-neutral-600 line-clamp-3">{summary}</p>
                }
            </div>
            <div class="px-4 pb-4 flex gap-2">
                if R::EDITABLE {
                    <button
                        onclick={props.on_edit.clone()}
                        class="px-3 py-1.5 text-sm font-medium text-neutral-700
                               border border-neutral-300 rounded-md
                               hover:bg-neutral-50"
                    >
                        {"Edit"}
                    </button>
                }
                <button
                    onclick={props.on_delete.clone()}
                    class="px-3 py-1.5 text-sm font-medium text-red-600
                           border border-red-200 rounded-md hover:bg-red-50"
                >
                    {"Delete"}
                </button>
            </div>
        </div>
    }
}
