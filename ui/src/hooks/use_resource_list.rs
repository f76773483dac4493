use payloads::{Resource, ResourceId, ResourceList};
use std::rc::Rc;
use yew::prelude::*;

use super::use_error_reporter;
use crate::contexts::use_toast;
use crate::get_api_client;

#[derive(Clone, PartialEq)]
pub struct ListState<R: Resource> {
    pub list: ResourceList<R>,
    pub fetched: bool,
}

impl<R: Resource> Default for ListState<R> {
    fn default() -> Self {
        Self {
            list: ResourceList::default(),
            fetched: false,
        }
    }
}

pub enum ListAction<R: Resource> {
    /// A fresh collection from the server; back to page 1.
    Loaded(Vec<R>),
    Remove(ResourceId),
    GoTo(usize),
}

impl<R: Resource> Reducible for ListState<R> {
    type Action = ListAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            ListAction::Loaded(items) => {
                state.list.replace(items);
                state.fetched = true;
            }
            ListAction::Remove(id) => {
                state.list.remove(&id);
            }
            ListAction::GoTo(page) => state.list.go_to(page),
        }
        Rc::new(state)
    }
}

/// Admin list state for one collection: the fetched items, the page being
/// viewed, and the actions on them.
pub struct ResourceListHandle<R: Resource> {
    pub state: UseReducerHandle<ListState<R>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    /// Sends `DELETE {endpoint}/{id}`; on success only that item is removed
    /// locally, on failure nothing changes.
    pub delete: Callback<R>,
    pub go_to: Callback<usize>,
}

impl<R: Resource> ResourceListHandle<R> {
    pub fn list(&self) -> &ResourceList<R> {
        &self.state.list
    }

    pub fn is_fetched(&self) -> bool {
        self.state.fetched
    }
}

/// Fetches the whole collection on mount, bypassing anything cached so
/// admin screens always start from the server's copy.
#[hook]
pub fn use_resource_list<R: Resource>() -> ResourceListHandle<R> {
    let state = use_reducer(ListState::<R>::default);
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let reporter = use_error_reporter();
    let toast = use_toast();

    let refetch = {
        let dispatcher = state.dispatcher();
        let is_loading = is_loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let dispatcher = dispatcher.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match get_api_client().refetch_list::<R>().await {
                    Ok(items) => dispatcher.dispatch(ListAction::Loaded(items)),
                    Err(e) => {
                        tracing::error!(endpoint = R::ENDPOINT, "{e}");
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| refetch.emit(()));
    }

    let delete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |item: R| {
            let dispatcher = dispatcher.clone();
            let reporter = reporter.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                let id = item.id().clone();
                match get_api_client().delete::<R>(&id).await {
                    Ok(()) => {
                        dispatcher.dispatch(ListAction::Remove(id));
                        toast.success(format!("Deleted \"{}\"", item.title()));
                    }
                    Err(e) => reporter.report(
                        &format!("delete {}", R::LABEL.to_lowercase()),
                        &e,
                    ),
                }
            });
        })
    };

    let go_to = {
        let dispatcher = state.dispatcher();
        Callback::from(move |page: usize| {
            dispatcher.dispatch(ListAction::GoTo(page));
        })
    };

    ResourceListHandle {
        state,
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch,
        delete,
        go_to,
    }
}
