use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use jiff::Timestamp;
use payloads::responses::{Paged, SuccessMessage, VisitorCount};
use payloads::{Blog, Resource};
use serde::Deserialize;
use serde_json::Value;

use crate::store::{self, MockStore, PUBLIC_WRITABLE};

use super::{
    APIError, injected_delay, read_submission, record, require_admin,
};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    page: Option<usize>,
    limit: Option<usize>,
    status: Option<String>,
}

/// Pages are served newest first by `createdAt`. Documents without a
/// readable timestamp sort last.
fn newest_first(items: &mut [Value]) {
    let created_at = |item: &Value| {
        item.get("createdAt")
            .and_then(Value::as_str)
            .and_then(|value| value.parse::<Timestamp>().ok())
    };
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
}

#[tracing::instrument(skip(request, store), ret)]
#[get("/visitor")]
pub async fn visitor_count(
    request: HttpRequest,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    record(&request, &store, None)?;
    Ok(HttpResponse::Ok().json(VisitorCount {
        count: store.visits(),
    }))
}

#[tracing::instrument(skip(request, store), ret)]
#[post("/visitor")]
pub async fn record_visit(
    request: HttpRequest,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    record(&request, &store, None)?;
    let count = store.record_visit();
    Ok(HttpResponse::Ok().json(VisitorCount { count }))
}

#[tracing::instrument(skip(request, store))]
#[get("/blog/slug/{slug}")]
pub async fn blog_by_slug(
    request: HttpRequest,
    slug: web::Path<String>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    record(&request, &store, None)?;
    let post = store.find_by(Blog::ENDPOINT, "slug", &slug)?;
    Ok(HttpResponse::Ok().json(post))
}

/// A singleton document, a whole collection, or (with `page`/`limit`) one
/// page of it. `status` filters collections by their `status` field.
#[tracing::instrument(skip(request, store))]
#[get("/{name}")]
pub async fn get_endpoint(
    request: HttpRequest,
    name: web::Path<String>,
    params: web::Query<ListParams>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    record(&request, &store, None)?;
    if store::is_singleton(&name) {
        return match store.singleton(&name)? {
            Some(document) => Ok(HttpResponse::Ok().json(document)),
            None => Err(APIError::NotFound(anyhow::anyhow!(
                "{name} has not been created"
            ))),
        };
    }

    let mut items = store.list(&name)?;
    if let Some(status) = &params.status {
        items.retain(|item| {
            item.get("status").and_then(Value::as_str) == Some(status.as_str())
        });
    }
    if params.page.is_none() && params.limit.is_none() {
        return Ok(HttpResponse::Ok().json(items));
    }

    newest_first(&mut items);
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(payloads::PAGE_SIZE).max(1);
    let total = items.len();
    let data: Vec<Value> = items
        .into_iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .collect();
    Ok(HttpResponse::Ok().json(Paged {
        data,
        total,
        page,
        limit,
    }))
}

#[tracing::instrument(skip(request, payload, store))]
#[post("/{name}")]
pub async fn create_document(
    request: HttpRequest,
    name: web::Path<String>,
    payload: web::Payload,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let submitted = read_submission(&request, payload, &store).await?;
    record(&request, &store, Some(&submitted))?;
    injected_delay(&request, &store).await;
    if !PUBLIC_WRITABLE.contains(&name.as_str()) {
        require_admin(&request, &store)?;
    }
    let document = store.create(&name, submitted.fields)?;
    Ok(HttpResponse::Created().json(document))
}

#[tracing::instrument(skip(request, payload, store))]
#[put("/{name}")]
pub async fn put_singleton(
    request: HttpRequest,
    name: web::Path<String>,
    payload: web::Payload,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let submitted = read_submission(&request, payload, &store).await?;
    record(&request, &store, Some(&submitted))?;
    injected_delay(&request, &store).await;
    require_admin(&request, &store)?;
    let document = store.put_singleton(&name, submitted.fields)?;
    Ok(HttpResponse::Ok().json(document))
}

#[tracing::instrument(skip(request, store))]
#[get("/{name}/{id}")]
pub async fn get_document(
    request: HttpRequest,
    path: web::Path<(String, String)>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    record(&request, &store, None)?;
    let (name, id) = path.into_inner();
    Ok(HttpResponse::Ok().json(store.get(&name, &id)?))
}

#[tracing::instrument(skip(request, payload, store))]
#[put("/{name}/{id}")]
pub async fn update_document(
    request: HttpRequest,
    path: web::Path<(String, String)>,
    payload: web::Payload,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    let submitted = read_submission(&request, payload, &store).await?;
    record(&request, &store, Some(&submitted))?;
    injected_delay(&request, &store).await;
    require_admin(&request, &store)?;
    let (name, id) = path.into_inner();
    let document = store.update(&name, &id, submitted.fields)?;
    Ok(HttpResponse::Ok().json(document))
}

#[tracing::instrument(skip(request, store))]
#[delete("/{name}/{id}")]
pub async fn delete_document(
    request: HttpRequest,
    path: web::Path<(String, String)>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    record(&request, &store, None)?;
    require_admin(&request, &store)?;
    let (name, id) = path.into_inner();
    store.delete(&name, &id)?;
    Ok(HttpResponse::Ok().json(SuccessMessage {
        message: format!("Deleted {id}"),
    }))
}
