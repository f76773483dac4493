//! De-duplicating cache for GET requests.
//!
//! Concurrent requests for the same key share one in-flight future, and a
//! settled response is reused until it is older than `max_age` or a
//! mutation invalidates it. Failed fetches are never cached.

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use jiff::{SignedDuration, Timestamp};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;

use crate::ClientError;

/// How long a settled response is served without refetching.
pub const DEFAULT_MAX_AGE: SignedDuration = SignedDuration::from_secs(60);

type SharedFetch =
    Shared<LocalBoxFuture<'static, Result<Arc<Value>, Arc<ClientError>>>>;

enum Entry {
    InFlight(SharedFetch),
    Ready {
        value: Arc<Value>,
        fetched_at: Timestamp,
    },
}

enum Lookup {
    Hit(Arc<Value>),
    Pending(SharedFetch),
    Miss,
}

#[derive(Clone)]
pub struct RequestCache {
    entries: Rc<RefCell<HashMap<String, Entry>>>,
    /// `None` keeps responses until invalidated.
    max_age: Option<SignedDuration>,
}

impl Default for RequestCache {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_AGE))
    }
}

impl std::fmt::Debug for RequestCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.borrow();
        f.debug_struct("RequestCache")
            .field("keys", &entries.keys().collect::<Vec<_>>())
            .field("max_age", &self.max_age)
            .finish()
    }
}

impl RequestCache {
    pub fn new(max_age: Option<SignedDuration>) -> Self {
        Self {
            entries: Rc::default(),
            max_age,
        }
    }

    fn is_fresh(&self, fetched_at: Timestamp) -> bool {
        match self.max_age {
            Some(max_age) => {
                Timestamp::now().duration_since(fetched_at) < max_age
            }
            None => true,
        }
    }

    fn lookup(&self, key: &str) -> Lookup {
        match self.entries.borrow().get(key) {
            Some(Entry::Ready { value, fetched_at })
                if self.is_fresh(*fetched_at) =>
            {
                Lookup::Hit(Arc::clone(value))
            }
            Some(Entry::InFlight(pending)) => Lookup::Pending(pending.clone()),
            _ => Lookup::Miss,
        }
    }

    /// Return the cached value for `key`, join an identical request already
    /// in flight, or start `fetch` and share it with later callers.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: &str,
        fetch: F,
    ) -> Result<Arc<Value>, ClientError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, ClientError>> + 'static,
    {
        let pending = match self.lookup(key) {
            Lookup::Hit(value) => {
                tracing::debug!(key, "cache hit");
                return Ok(value);
            }
            Lookup::Pending(pending) => {
                tracing::debug!(key, "joining in-flight request");
                pending
            }
            Lookup::Miss => {
                let pending = fetch()
                    .map(|result| result.map(Arc::new).map_err(Arc::new))
                    .boxed_local()
                    .shared();
                self.entries
                    .borrow_mut()
                    .insert(key.to_string(), Entry::InFlight(pending.clone()));
                pending
            }
        };

        let result = pending.clone().await;

        {
            let mut entries = self.entries.borrow_mut();
            // The entry may have been invalidated or replaced while we
            // waited; only settle the request we joined.
            let still_ours = matches!(
                entries.get(key),
                Some(Entry::InFlight(current)) if current.ptr_eq(&pending)
            );
            if still_ours {
                match &result {
                    Ok(value) => {
                        entries.insert(
                            key.to_string(),
                            Entry::Ready {
                                value: Arc::clone(value),
                                fetched_at: Timestamp::now(),
                            },
                        );
                    }
                    Err(_) => {
                        entries.remove(key);
                    }
                }
            }
        }
        drop(pending);

        result.map_err(|error| {
            Arc::try_unwrap(error).unwrap_or_else(ClientError::Shared)
        })
    }

    pub fn invalidate(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    /// Drop every entry for `endpoint`: the bare collection, item paths
    /// (`endpoint/…`) and query variants (`endpoint?…`).
    pub fn invalidate_prefix(&self, endpoint: &str) {
        self.entries.borrow_mut().retain(|key, _| {
            let Some(rest) = key.strip_prefix(endpoint) else {
                return true;
            };
            !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
        });
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Whether a settled, fresh response is held for `key`.
    pub fn is_cached(&self, key: &str) -> bool {
        matches!(self.lookup(key), Lookup::Hit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::cell::Cell;

    fn counting_fetch(
        calls: &Rc<Cell<usize>>,
        value: Value,
    ) -> impl FnOnce() -> LocalBoxFuture<'static, Result<Value, ClientError>>
    {
        let calls = calls.clone();
        move || {
            async move {
                calls.set(calls.get() + 1);
                tokio::task::yield_now().await;
                Ok(value)
            }
            .boxed_local()
        }
    }

    #[tokio::test]
    async fn concurrent_requests_share_one_fetch() {
        let cache = RequestCache::default();
        let calls = Rc::new(Cell::new(0));

        let (a, b) = futures::join!(
            cache.get_or_fetch("product", counting_fetch(&calls, json!([1]))),
            cache.get_or_fetch("product", counting_fetch(&calls, json!([2]))),
        );

        assert_eq!(calls.get(), 1);
        assert_eq!(*a.unwrap(), json!([1]));
        assert_eq!(*b.unwrap(), json!([1]));
        assert!(cache.is_cached("product"));
    }

    #[tokio::test]
    async fn settled_values_are_reused() {
        let cache = RequestCache::new(None);
        let calls = Rc::new(Cell::new(0));

        cache
            .get_or_fetch("service", counting_fetch(&calls, json!([])))
            .await
            .unwrap();
        cache
            .get_or_fetch("service", counting_fetch(&calls, json!([])))
            .await
            .unwrap();

        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn stale_values_are_refetched() {
        let cache = RequestCache::new(Some(SignedDuration::ZERO));
        let calls = Rc::new(Cell::new(0));

        for _ in 0..2 {
            cache
                .get_or_fetch("team", counting_fetch(&calls, json!([])))
                .await
                .unwrap();
        }

        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let cache = RequestCache::default();
        let calls = Rc::new(Cell::new(0));

        let failing = {
            let calls = calls.clone();
            move || async move {
                calls.set(calls.get() + 1);
                Err::<Value, _>(ClientError::APIError(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "boom".into(),
                ))
            }
        };
        let error = cache.get_or_fetch("blog", failing).await.unwrap_err();
        assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!cache.is_cached("blog"));

        cache
            .get_or_fetch("blog", counting_fetch(&calls, json!([])))
            .await
            .unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn invalidate_prefix_matches_endpoint_paths_only() {
        let cache = RequestCache::new(None);
        let calls = Rc::new(Cell::new(0));
        for key in ["blog", "blog/1", "blog?page=2&limit=9", "blogroll"] {
            cache
                .get_or_fetch(key, counting_fetch(&calls, json!(null)))
                .await
                .unwrap();
        }

        cache.invalidate_prefix("blog");

        assert!(!cache.is_cached("blog"));
        assert!(!cache.is_cached("blog/1"));
        assert!(!cache.is_cached("blog?page=2&limit=9"));
        assert!(cache.is_cached("blogroll"));
    }
}
