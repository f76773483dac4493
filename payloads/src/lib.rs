pub mod api_client;
pub mod cache;
pub mod draft;
pub mod list;
pub mod models;
pub mod requests;
pub mod resource;
pub mod responses;
pub mod session;

pub use api_client::{APIClient, ClientConfig, ClientError};
pub use cache::RequestCache;
pub use draft::{
    Draft, FieldErrors, FieldKind, FieldSpec, ImageField, ImageUpload,
};
pub use list::{PAGE_SIZE, Pagination, ResourceList};
pub use models::*;
pub use resource::{Resource, ResourceId, Singleton};
pub use session::{
    AuthState, MemoryTokenStore, Session, TOKEN_KEY, TokenStore,
};

/// Largest image the admin forms will attach to an upload.
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;
