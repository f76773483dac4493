//! The generic CRUD contract shared by every entity the CMS manages.

use derive_more::Display;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::Draft;

/// Server-assigned identifier of a collection item.
///
/// Used both as the render key in lists and as the path parameter of
/// `PUT`/`DELETE` requests.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ResourceId(pub String);

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// An entity type stored as a collection on the API
/// (`GET/POST {ENDPOINT}`, `GET/PUT/DELETE {ENDPOINT}/{id}`).
pub trait Resource:
    Clone + PartialEq + Serialize + DeserializeOwned + 'static
{
    /// Editable copy of the entity held by forms.
    type Draft: Draft;

    /// Collection path relative to the API root, e.g. `"product"`.
    const ENDPOINT: &'static str;
    /// Singular display name, e.g. `"Product"`.
    const LABEL: &'static str;
    /// Plural display name, e.g. `"Products"`.
    const PLURAL: &'static str;
    /// Timeout applied to create/update requests, if any.
    const REQUEST_TIMEOUT: Option<Duration> = None;
    /// Whether existing items can be edited from the admin panel.
    const EDITABLE: bool = true;

    fn id(&self) -> &ResourceId;

    /// Headline shown on cards and table rows.
    fn title(&self) -> String;

    /// Secondary line shown under the title.
    fn summary(&self) -> Option<String> {
        None
    }

    /// Image filename (or URL) as returned by the API.
    fn image(&self) -> Option<&str> {
        None
    }

    fn to_draft(&self) -> Self::Draft;

    /// Order applied to a freshly fetched collection.
    fn sort(_items: &mut [Self]) {}
}

/// A document type for which the API holds exactly one record
/// (`GET/PUT {ENDPOINT}`).
pub trait Singleton:
    Clone + PartialEq + Default + Serialize + DeserializeOwned + 'static
{
    type Draft: Draft;

    const ENDPOINT: &'static str;
    const LABEL: &'static str;

    fn to_draft(&self) -> Self::Draft;
}
