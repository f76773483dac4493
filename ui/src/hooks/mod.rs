pub mod use_collection;
pub mod use_error_reporter;
pub mod use_fetch;
pub mod use_logout;
pub mod use_resource_list;
pub mod use_singleton;
pub mod use_title;

pub use use_collection::use_collection;
pub use use_error_reporter::{ErrorReporter, use_error_reporter};
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_logout::use_logout;
pub use use_resource_list::{ResourceListHandle, use_resource_list};
pub use use_singleton::use_singleton;
pub use use_title::use_title;

/// Whether a fetch has completed, distinguishing "not fetched yet" from
/// "fetched and empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(data) => Some(data),
            Self::NotFetched => None,
        }
    }
}
