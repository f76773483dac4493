use payloads::Singleton;
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// A singleton document; `None` when it has not been created yet.
#[hook]
pub fn use_singleton<S: Singleton>() -> FetchHookReturn<Option<S>> {
    use_fetch(S::ENDPOINT, || async move {
        get_api_client().singleton::<S>().await
    })
}
