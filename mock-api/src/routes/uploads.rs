use actix_web::{HttpResponse, get, web};

use crate::store::MockStore;

use super::APIError;

/// Serve a file stored by a multipart create or update.
#[tracing::instrument(skip(store))]
#[get("/uploads/{name}")]
pub async fn uploaded_file(
    name: web::Path<String>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let upload = store.upload(&name).ok_or_else(|| {
        APIError::NotFound(anyhow::anyhow!("No upload named {name}"))
    })?;
    Ok(HttpResponse::Ok()
        .content_type(upload.content_type)
        .body(upload.bytes))
}
