use payloads::Resource;
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// A whole collection through the shared request cache. Sections that ask
/// for the same collection at the same time share one request.
#[hook]
pub fn use_collection<R: Resource>() -> FetchHookReturn<Vec<R>> {
    use_fetch(R::ENDPOINT, || async move { get_api_client().list::<R>().await })
}
