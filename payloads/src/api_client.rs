use crate::cache::{DEFAULT_MAX_AGE, RequestCache};
use crate::draft::form_fields;
use crate::requests::{self, PageQuery};
use crate::responses::{self, Paged};
use crate::{Blog, Draft, FieldErrors, Resource, ResourceId, Singleton};
use jiff::SignedDuration;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Connection settings for [`APIClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin of the API server, without the `/api` suffix.
    pub address: String,
    /// Prefix prepended to stored image filenames. Defaults to
    /// `{address}/uploads/`.
    pub image_base: Option<String>,
    pub cache_max_age: Option<SignedDuration>,
}

impl ClientConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            image_base: None,
            cache_max_age: Some(DEFAULT_MAX_AGE),
        }
    }
}

/// An API client for the content API.
///
/// Clones share the request cache and the bearer token, so one client can
/// be handed to every component.
#[derive(Debug, Clone)]
pub struct APIClient {
    pub address: String,
    pub image_base: String,
    pub inner_client: reqwest::Client,
    auth_token: Rc<RefCell<Option<String>>>,
    cache: RequestCache,
}

impl APIClient {
    pub fn new(config: ClientConfig) -> Self {
        let address = config.address.trim_end_matches('/').to_string();
        let mut image_base = config
            .image_base
            .unwrap_or_else(|| format!("{address}/uploads/"));
        if !image_base.ends_with('/') {
            image_base.push('/');
        }
        Self {
            address,
            image_base,
            inner_client: reqwest::Client::new(),
            auth_token: Rc::default(),
            cache: RequestCache::new(config.cache_max_age),
        }
    }

    /// Token sent as `Authorization: Bearer` on every request.
    pub fn set_token(&self, token: Option<String>) {
        *self.auth_token.borrow_mut() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.auth_token.borrow().clone()
    }

    pub fn cache(&self) -> &RequestCache {
        &self.cache
    }

    /// Resolve an image as stored by the API to something an `<img>` can
    /// load. Absolute, `data:` and `blob:` URLs are returned unchanged.
    pub fn image_url(&self, image: &str) -> String {
        let passthrough = ["http://", "https://", "data:", "blob:", "//"];
        if passthrough.iter().any(|prefix| image.starts_with(prefix)) {
            return image.to_string();
        }
        format!("{}{}", self.image_base, image.trim_start_matches('/'))
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "api request");
        let request = self.inner_client.request(method, self.format_url(path));
        let request = match self.auth_token.borrow().as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(
        &self,
        request: RequestBuilder,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Response, ClientError> {
        let request = match timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };
        request.send().await.map_err(ClientError::from_transport)
    }

    /// The browser fetch has no timeout of its own, so race it against a
    /// timer.
    #[cfg(target_arch = "wasm32")]
    async fn send(
        &self,
        request: RequestBuilder,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Response, ClientError> {
        use futures::future::{Either, select};

        let Some(timeout) = timeout else {
            return request.send().await.map_err(ClientError::from_transport);
        };
        let send = Box::pin(request.send());
        let timer = Box::pin(gloo_timers::future::sleep(timeout));
        match select(send, timer).await {
            Either::Left((response, _)) => {
                response.map_err(ClientError::from_transport)
            }
            Either::Right(_) => Err(ClientError::Timeout),
        }
    }

    async fn empty_get(
        &self,
        path: &str,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::GET, path), None).await
    }

    async fn empty_post(
        &self,
        path: &str,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::POST, path), None).await
    }

    async fn post(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::POST, path).json(body), None)
            .await
    }

    async fn delete_path(
        &self,
        path: &str,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::DELETE, path), None).await
    }

    /// Send a draft as multipart when it carries a newly picked image,
    /// JSON otherwise.
    async fn send_draft<D: Draft>(
        &self,
        method: Method,
        path: &str,
        draft: &D,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.request(method, path);
        let upload = draft.image().and_then(|image| image.upload.as_ref());
        let request = match (upload, D::image_key()) {
            (Some(upload), Some(image_key)) => {
                let mut form = Form::new();
                for (name, value) in form_fields(draft)? {
                    form = form.text(name, value);
                }
                let part = Part::bytes(upload.bytes.clone())
                    .file_name(upload.file_name.clone())
                    .mime_str(&upload.mime_type)?;
                request.multipart(form.part(image_key, part))
            }
            _ => request.json(draft),
        };
        self.send(request, timeout).await
    }

    /// GET through the shared request cache.
    async fn cached_get(&self, path: &str) -> Result<Arc<Value>, ClientError> {
        let client = self.clone();
        let owned_path = path.to_string();
        self.cache
            .get_or_fetch(path, move || async move {
                let response = client.empty_get(&owned_path).await?;
                ok_body::<Value>(response).await
            })
            .await
    }
}

/// Generic collection and singleton access
impl APIClient {
    /// Fetch a whole collection, sorted by the resource's natural order.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ClientError> {
        let value = self.cached_get(R::ENDPOINT).await?;
        let mut items: Vec<R> = decode(collection_items(&value))?;
        R::sort(&mut items);
        Ok(items)
    }

    /// Drop any cached copy of the collection and fetch it again.
    pub async fn refetch_list<R: Resource>(
        &self,
    ) -> Result<Vec<R>, ClientError> {
        self.cache.invalidate(R::ENDPOINT);
        self.list::<R>().await
    }

    pub async fn get<R: Resource>(
        &self,
        id: &ResourceId,
    ) -> Result<R, ClientError> {
        let value = self.cached_get(&format!("{}/{id}", R::ENDPOINT)).await?;
        decode(&value)
    }

    /// One server-side page of a collection. The server pages newest
    /// first; items within the page keep the resource's natural order.
    pub async fn list_page<R: Resource>(
        &self,
        query: &PageQuery,
    ) -> Result<Paged<R>, ClientError> {
        let path = format!("{}?{}", R::ENDPOINT, query.to_query_string());
        let value = self.cached_get(&path).await?;
        let mut page: Paged<R> = decode(&value)?;
        R::sort(&mut page.data);
        Ok(page)
    }

    /// Validate and submit a draft: `PUT {endpoint}/{id}` when `id` is
    /// given, `POST {endpoint}` otherwise. Exactly one request is sent.
    pub async fn save<R: Resource>(
        &self,
        id: Option<&ResourceId>,
        draft: &R::Draft,
    ) -> Result<(), ClientError> {
        self.save_with_timeout::<R>(id, draft, R::REQUEST_TIMEOUT)
            .await
    }

    /// `save` with an explicit request timeout in place of
    /// `R::REQUEST_TIMEOUT`.
    pub async fn save_with_timeout<R: Resource>(
        &self,
        id: Option<&ResourceId>,
        draft: &R::Draft,
        timeout: Option<Duration>,
    ) -> Result<(), ClientError> {
        let mut draft = draft.clone();
        draft.prepare();
        draft.validate().map_err(ClientError::Validation)?;

        let (method, path) = match id {
            Some(id) => (Method::PUT, format!("{}/{id}", R::ENDPOINT)),
            None => (Method::POST, R::ENDPOINT.to_string()),
        };
        let response = self.send_draft(method, &path, &draft, timeout).await?;
        ok_empty(response).await?;
        self.cache.invalidate_prefix(R::ENDPOINT);
        Ok(())
    }

    pub async fn create<R: Resource>(
        &self,
        draft: &R::Draft,
    ) -> Result<(), ClientError> {
        self.save::<R>(None, draft).await
    }

    pub async fn update<R: Resource>(
        &self,
        id: &ResourceId,
        draft: &R::Draft,
    ) -> Result<(), ClientError> {
        self.save::<R>(Some(id), draft).await
    }

    pub async fn delete<R: Resource>(
        &self,
        id: &ResourceId,
    ) -> Result<(), ClientError> {
        let response =
            self.delete_path(&format!("{}/{id}", R::ENDPOINT)).await?;
        ok_empty(response).await?;
        self.cache.invalidate_prefix(R::ENDPOINT);
        Ok(())
    }

    /// Fetch a singleton document. A missing document (404, `null` or an
    /// empty array) is `None`.
    pub async fn singleton<S: Singleton>(
        &self,
    ) -> Result<Option<S>, ClientError> {
        match self.cached_get(S::ENDPOINT).await {
            Ok(value) => match value.as_ref() {
                Value::Null => Ok(None),
                Value::Array(items) => items.first().map(decode).transpose(),
                other => decode(other).map(Some),
            },
            Err(error) if error.is_not_found() => Ok(None),
            Err(error) => Err(error),
        }
    }

    pub async fn save_singleton<S: Singleton>(
        &self,
        draft: &S::Draft,
    ) -> Result<(), ClientError> {
        let mut draft = draft.clone();
        draft.prepare();
        draft.validate().map_err(ClientError::Validation)?;

        let response = self
            .send_draft(Method::PUT, S::ENDPOINT, &draft, None)
            .await?;
        ok_empty(response).await?;
        self.cache.invalidate_prefix(S::ENDPOINT);
        Ok(())
    }
}

/// Site-specific endpoints
impl APIClient {
    pub async fn blog_by_slug(&self, slug: &str) -> Result<Blog, ClientError> {
        let value = self.cached_get(&format!("blog/slug/{slug}")).await?;
        decode(&value)
    }

    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<responses::LoginToken, ClientError> {
        let response = self.post("admin/login", details).await?;
        ok_body(response).await
    }

    /// Add another administrator. Requires a session.
    pub async fn register(
        &self,
        details: &requests::RegisterAdmin,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.post("admin/register", details).await?;
        ok_body(response).await
    }

    /// Ask for a one-time code to be emailed.
    pub async fn email_request(
        &self,
        details: &requests::EmailRequest,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.post("admin/emailrequest", details).await?;
        ok_body(response).await
    }

    pub async fn verify_otp(
        &self,
        details: &requests::VerifyOtp,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.post("admin/verifyotp", details).await?;
        ok_body(response).await
    }

    pub async fn reset_password(
        &self,
        details: &requests::ResetPassword,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.post("admin/resetpassword", details).await?;
        ok_body(response).await
    }

    /// Count one visit to the site.
    pub async fn record_visit(&self) -> Result<(), ClientError> {
        let response = self.empty_post("visitor").await?;
        ok_empty(response).await
    }

    pub async fn visitor_count(
        &self,
    ) -> Result<responses::VisitorCount, ClientError> {
        let response = self.empty_get("visitor").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the server's message.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("The request timed out. Please try again.")]
    Timeout,
    #[error("Unexpected response from the server.")]
    Decode(#[from] serde_json::Error),
    /// Required fields were left empty; nothing was sent.
    #[error("{0}")]
    Validation(FieldErrors),
    /// The same failure delivered to every caller that joined a request.
    #[error("{0}")]
    Shared(Arc<ClientError>),
}

impl ClientError {
    fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(error)
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(error) => error.status(),
            Self::Shared(error) => error.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Shared(error) => error.field_errors(),
            _ => None,
        }
    }
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, ClientError> {
    Ok(<T as serde::Deserialize>::deserialize(value)?)
}

/// Collections come back either as a bare array or wrapped in `{ data }`.
fn collection_items(value: &Value) -> &Value {
    match value.get("data") {
        Some(data @ Value::Array(_)) => data,
        _ => value,
    }
}

/// Build the error for a non-2xx response, preferring a JSON `message`
/// over the raw body and the status reason over an empty one.
async fn api_error(
    response: reqwest::Response,
) -> Result<ClientError, reqwest::Error> {
    let status = response.status();
    let text = response.text().await?;
    let message = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|body| {
            body.get("message").and_then(Value::as_str).map(str::to_string)
        })
        .unwrap_or(text);
    let message = if message.trim().is_empty() {
        status.canonical_reason().unwrap_or("Request failed").to_string()
    } else {
        message
    };
    tracing::warn!(%status, reason = %message, "api request failed");
    Ok(ClientError::APIError(status, message))
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error. An empty body reads as `null`.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await?);
    }
    let bytes = response.bytes().await?;
    let body: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
    Ok(serde_json::from_slice(body)?)
}

/// Check that a response is OK, ignoring its body.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> APIClient {
        APIClient::new(ClientConfig::new("http://localhost:8000/"))
    }

    #[test]
    fn urls_are_rooted_at_api() {
        assert_eq!(
            client().format_url("product/1"),
            "http://localhost:8000/api/product/1"
        );
    }

    #[test]
    fn image_filenames_resolve_against_upload_base() {
        let client = client();
        assert_eq!(
            client.image_url("team.png"),
            "http://localhost:8000/uploads/team.png"
        );
        assert_eq!(
            client.image_url("/team.png"),
            "http://localhost:8000/uploads/team.png"
        );
    }

    #[test]
    fn absolute_and_inline_images_pass_through() {
        let client = client();
        for url in [
            "https://cdn.example.com/a.png",
            "data:image/png;base64,AAAA",
        ] {
            assert_eq!(client.image_url(url), url);
        }
    }

    #[test]
    fn custom_image_base_gets_trailing_slash() {
        let client = APIClient::new(ClientConfig {
            image_base: Some("https://cdn.example.com/img".into()),
            ..ClientConfig::new("http://localhost:8000")
        });
        assert_eq!(
            client.image_url("a.png"),
            "https://cdn.example.com/img/a.png"
        );
    }

    #[test]
    fn token_is_shared_between_clones() {
        let client = client();
        let clone = client.clone();
        client.set_token(Some("abc".into()));
        assert_eq!(clone.token().as_deref(), Some("abc"));
    }

    #[test]
    fn wrapped_collections_are_unwrapped() {
        let wrapped = json!({"data": [1, 2]});
        assert_eq!(collection_items(&wrapped), &json!([1, 2]));
        let bare = json!([3]);
        assert_eq!(collection_items(&bare), &json!([3]));
    }

    #[test]
    fn shared_errors_keep_their_status() {
        let error = ClientError::Shared(Arc::new(ClientError::APIError(
            StatusCode::UNAUTHORIZED,
            "Unauthorized".into(),
        )));
        assert!(error.is_unauthorized());
        assert_eq!(error.to_string(), "Unauthorized");
    }
}
