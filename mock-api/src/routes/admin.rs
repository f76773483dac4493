use actix_web::{HttpRequest, HttpResponse, post, web};
use payloads::{requests, responses};

use crate::store::MockStore;

use super::{APIError, Submitted, record, require_admin};

fn success(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(responses::SuccessMessage {
        message: message.to_string(),
    })
}

/// Record a request whose JSON body was already extracted.
fn record_json<T: serde::Serialize>(
    request: &HttpRequest,
    store: &MockStore,
    body: &T,
) -> Result<(), APIError> {
    let fields = serde_json::to_value(body)
        .map_err(|e| APIError::UnexpectedError(e.into()))?;
    record(
        request,
        store,
        Some(&Submitted {
            fields,
            files: Vec::new(),
        }),
    )
}

#[tracing::instrument(
    skip(request, credentials, store),
    fields(email = %credentials.email)
)]
#[post("/admin/login")]
pub async fn login(
    request: HttpRequest,
    credentials: web::Json<requests::LoginCredentials>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    record(&request, &store, None)?;
    let token = store.login(&credentials)?;
    Ok(HttpResponse::Ok().json(responses::LoginToken { token }))
}

#[tracing::instrument(
    skip(request, details, store),
    fields(email = %details.email)
)]
#[post("/admin/register")]
pub async fn register(
    request: HttpRequest,
    details: web::Json<requests::RegisterAdmin>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    record(&request, &store, None)?;
    require_admin(&request, &store)?;
    store.register(&details)?;
    Ok(success("Admin registered"))
}

#[tracing::instrument(skip(request, store), ret)]
#[post("/admin/emailrequest")]
pub async fn email_request(
    request: HttpRequest,
    details: web::Json<requests::EmailRequest>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    record_json(&request, &store, &details.0)?;
    let otp = store.request_otp(&details.email)?;
    // No mail is sent; the code is only available in the log.
    tracing::info!(email = %details.email, %otp, "one-time code issued");
    Ok(success("A verification code has been sent to your email"))
}

#[tracing::instrument(skip(request, store), ret)]
#[post("/admin/verifyotp")]
pub async fn verify_otp(
    request: HttpRequest,
    details: web::Json<requests::VerifyOtp>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    record_json(&request, &store, &details.0)?;
    store.verify_otp(&details.email, &details.otp)?;
    Ok(success("Code verified"))
}

#[tracing::instrument(
    skip(request, details, store),
    fields(email = %details.email)
)]
#[post("/admin/resetpassword")]
pub async fn reset_password(
    request: HttpRequest,
    details: web::Json<requests::ResetPassword>,
    store: web::Data<MockStore>,
) -> Result<HttpResponse, APIError> {
    record(&request, &store, None)?;
    store.reset_password(&details)?;
    Ok(success("Password updated"))
}
