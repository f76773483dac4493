pub mod admin;
pub mod documents;
pub mod uploads;

use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName};
use actix_web::{
    HttpRequest, HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};
use futures::{StreamExt, TryStreamExt};
use serde_json::{Map, Value, json};

use crate::store::{MockStore, RecordedRequest, StoreError};

pub fn api_services() -> impl HttpServiceFactory {
    // Fixed paths first: the document routes match any endpoint name.
    web::scope("/api")
        .service(health_check)
        .service(admin::login)
        .service(admin::register)
        .service(admin::email_request)
        .service(admin::verify_otp)
        .service(admin::reset_password)
        .service(documents::visitor_count)
        .service(documents::record_visit)
        .service(documents::blog_by_slug)
        .service(documents::get_endpoint)
        .service(documents::create_document)
        .service(documents::put_singleton)
        .service(documents::get_document)
        .service(documents::update_document)
        .service(documents::delete_document)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Authentication failed")]
    AuthError(#[source] anyhow::Error),
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    /// Failure injected by a test for this endpoint.
    #[error("Injected failure")]
    Injected(StatusCode),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthError(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Injected(status) => *status,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Errors are sent as `{ "message": ... }`, like the real backend.
    fn error_response(&self) -> HttpResponse<BoxBody> {
        let message = match self {
            Self::AuthError(e) | Self::BadRequest(e) | Self::NotFound(e) => {
                format!("{self}: {e}")
            }
            Self::Injected(_) | Self::UnexpectedError(_) => self.to_string(),
        };
        HttpResponse::build(self.status_code())
            .json(json!({ "message": message }))
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UnknownEndpoint(_) | StoreError::DocumentNotFound => {
                APIError::NotFound(e.into())
            }
            StoreError::AccountNotFound => APIError::NotFound(e.into()),
            StoreError::InvalidCredentials | StoreError::InvalidToken => {
                APIError::AuthError(e.into())
            }
            _ => APIError::BadRequest(e.into()),
        }
    }
}

/// Request body after parsing, as JSON or multipart.
pub struct Submitted {
    pub fields: Value,
    pub files: Vec<String>,
}

/// Path of the request below `/api/`.
fn api_path(request: &HttpRequest) -> String {
    request
        .path()
        .trim_start_matches("/api/")
        .trim_end_matches('/')
        .to_string()
}

fn header(request: &HttpRequest, name: HeaderName) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Log the request, then fail it if a test asked for this endpoint to fail.
fn record(
    request: &HttpRequest,
    store: &MockStore,
    submitted: Option<&Submitted>,
) -> Result<(), APIError> {
    let path = api_path(request);
    store.record(RecordedRequest {
        method: request.method().to_string(),
        path: path.clone(),
        query: request.query_string().to_string(),
        content_type: header(request, CONTENT_TYPE),
        authorization: header(request, AUTHORIZATION),
        body: submitted.map(|submitted| submitted.fields.clone()),
        files: submitted
            .map(|submitted| submitted.files.clone())
            .unwrap_or_default(),
    });
    match store.injected_failure(&path) {
        Some(status) => Err(APIError::Injected(
            StatusCode::from_u16(status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )),
        None => Ok(()),
    }
}

/// Sleep if a test asked for this endpoint to respond slowly.
async fn injected_delay(request: &HttpRequest, store: &MockStore) {
    if let Some(delay) = store.injected_delay(&api_path(request)) {
        actix_web::rt::time::sleep(delay).await;
    }
}

/// Require `Authorization: Bearer <token>` for a token the store issued.
fn require_admin(
    request: &HttpRequest,
    store: &MockStore,
) -> Result<(), APIError> {
    let token = header(request, AUTHORIZATION)
        .and_then(|value| value.strip_prefix("Bearer ").map(str::to_string))
        .ok_or_else(|| {
            APIError::AuthError(anyhow::anyhow!("Missing bearer token"))
        })?;
    store.check_token(&token)?;
    Ok(())
}

/// Read a JSON or multipart body. Multipart text fields stay strings unless
/// they hold a JSON list or object; file parts are stored as uploads and
/// replaced by their stored filename.
async fn read_submission(
    request: &HttpRequest,
    mut payload: web::Payload,
    store: &MockStore,
) -> Result<Submitted, APIError> {
    let content_type = header(request, CONTENT_TYPE).unwrap_or_default();
    if !content_type.starts_with("multipart/form-data") {
        let mut body = Vec::new();
        while let Some(chunk) = payload.next().await {
            let chunk = chunk
                .map_err(|e| APIError::BadRequest(anyhow::anyhow!("{e}")))?;
            body.extend_from_slice(&chunk);
        }
        let fields = if body.is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(&body)
                .map_err(|e| APIError::BadRequest(e.into()))?
        };
        return Ok(Submitted {
            fields,
            files: Vec::new(),
        });
    }

    let mut multipart = Multipart::new(request.headers(), payload);
    let mut fields = Map::new();
    let mut files = Vec::new();
    let bad_multipart = |e: actix_multipart::MultipartError| {
        APIError::BadRequest(anyhow::anyhow!("{e}"))
    };
    while let Some(mut field) =
        multipart.try_next().await.map_err(bad_multipart)?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|disposition| disposition.get_filename())
            .map(str::to_string);
        let mime = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(bad_multipart)? {
            bytes.extend_from_slice(&chunk);
        }
        let value = match file_name {
            Some(file_name) => {
                files.push(name.clone());
                Value::String(store.save_upload(&file_name, &mime, bytes))
            }
            None => {
                let text = String::from_utf8_lossy(&bytes).into_owned();
                if text.starts_with('[') || text.starts_with('{') {
                    serde_json::from_str(&text).unwrap_or(Value::String(text))
                } else {
                    Value::String(text)
                }
            }
        };
        fields.insert(name, value);
    }
    Ok(Submitted {
        fields: Value::Object(fields),
        files,
    })
}
