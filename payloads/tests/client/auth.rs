use payloads::{MemoryTokenStore, Session, TokenStore, requests};
use reqwest::StatusCode;

use test_helpers::{
    ADMIN_EMAIL, ADMIN_PASSWORD, admin_credentials, assert_status_code,
    spawn_app,
};

#[tokio::test]
async fn login_returns_a_token() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let token = app.client.login(&admin_credentials()).await?;
    assert!(!token.token.is_empty());
    Ok(())
}

#[tokio::test]
async fn wrong_password_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let details = requests::LoginCredentials {
        email: ADMIN_EMAIL.into(),
        password: "not-the-password".into(),
    };
    let result = app.client.login(&details).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn session_token_survives_a_reload() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let store = MemoryTokenStore::default();

    let mut session = Session::restore(store.clone());
    assert!(!session.is_authenticated());
    let token = app.client.login(&admin_credentials()).await?;
    session.login(token.token.clone());
    assert_eq!(store.load(), Some(token.token.clone()));

    // a fresh session reads the persisted token back
    let restored = Session::restore(store.clone());
    assert_eq!(restored.token(), Some(token.token.as_str()));

    let mut restored = restored;
    restored.logout();
    assert_eq!(store.load(), None);
    Ok(())
}

#[tokio::test]
async fn register_needs_a_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let details = requests::RegisterAdmin {
        name: "Second".into(),
        email: "second@example.com".into(),
        password: "hunter22".into(),
    };

    let result = app.client.register(&details).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    app.login_admin().await?;
    app.client.register(&details).await?;
    app.logout();

    let login = requests::LoginCredentials {
        email: details.email.clone(),
        password: details.password.clone(),
    };
    app.client.login(&login).await?;
    Ok(())
}

#[tokio::test]
async fn password_reset_flow() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let email = requests::EmailRequest {
        email: ADMIN_EMAIL.into(),
    };

    app.client.email_request(&email).await?;
    let otp = app.store.otp_for(ADMIN_EMAIL).unwrap();
    assert_eq!(otp.len(), 6);

    app.client
        .verify_otp(&requests::VerifyOtp {
            email: ADMIN_EMAIL.into(),
            otp,
        })
        .await?;
    app.client
        .reset_password(&requests::ResetPassword {
            email: ADMIN_EMAIL.into(),
            password: "brand-new".into(),
        })
        .await?;

    let old = app.client.login(&admin_credentials()).await;
    assert_status_code(old, StatusCode::UNAUTHORIZED);
    assert_ne!(ADMIN_PASSWORD, "brand-new");
    app.client
        .login(&requests::LoginCredentials {
            email: ADMIN_EMAIL.into(),
            password: "brand-new".into(),
        })
        .await?;
    Ok(())
}

#[tokio::test]
async fn wrong_code_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.client
        .email_request(&requests::EmailRequest {
            email: ADMIN_EMAIL.into(),
        })
        .await?;

    let result = app
        .client
        .verify_otp(&requests::VerifyOtp {
            email: ADMIN_EMAIL.into(),
            otp: "not-a-code".into(),
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    // resetting without a verified code fails too
    let result = app
        .client
        .reset_password(&requests::ResetPassword {
            email: ADMIN_EMAIL.into(),
            password: "brand-new".into(),
        })
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_email_gets_no_code() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .email_request(&requests::EmailRequest {
            email: "nobody@example.com".into(),
        })
        .await;
    assert_status_code(result, StatusCode::NOT_FOUND);
    Ok(())
}
