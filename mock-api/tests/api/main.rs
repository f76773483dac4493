//! Raw HTTP checks of the mock API's wire behaviour, independent of the
//! typed client.

use reqwest::StatusCode;
use serde_json::{Value, json};
use test_helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp, spawn_app};

fn url(app: &TestApp, path: &str) -> String {
    format!("http://127.0.0.1:{}/api/{path}", app.port)
}

async fn admin_token(app: &TestApp) -> anyhow::Result<String> {
    let body: Value = reqwest::Client::new()
        .post(url(app, "admin/login"))
        .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    body["token"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("login response has no token"))
}

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let response = reqwest::get(url(&app, "health_check")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await?, "healthy");
    Ok(())
}

#[tokio::test]
async fn errors_carry_a_json_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let response = reqwest::get(url(&app, "product/missing")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await?;
    assert!(body["message"].as_str().is_some_and(|m| m.starts_with("Not found")));
    Ok(())
}

#[tokio::test]
async fn writes_need_a_bearer_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let document = json!({ "name": "Launchpad", "description": "Pages" });

    let response = client
        .post(url(&app, "product"))
        .json(&document)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = admin_token(&app).await?;
    let response = client
        .post(url(&app, "product"))
        .bearer_auth(token)
        .json(&document)
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await?;
    assert!(created["_id"].is_string());
    assert_eq!(created["name"], "Launchpad");
    Ok(())
}

#[tokio::test]
async fn contact_form_is_open_to_visitors() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let response = reqwest::Client::new()
        .post(url(&app, "contact"))
        .json(&json!({ "email": "grace@example.com", "message": "Hi" }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn paging_parameters_return_an_envelope() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_products(10)?;

    let whole: Value = reqwest::get(url(&app, "product")).await?.json().await?;
    assert_eq!(whole.as_array().map(Vec::len), Some(10));

    let page: Value = reqwest::get(url(&app, "product?page=2&limit=9"))
        .await?
        .json()
        .await?;
    assert_eq!(page["total"], 10);
    assert_eq!(page["page"], 2);
    assert_eq!(page["limit"], 9);
    assert_eq!(page["data"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn multipart_text_fields_stay_text() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let token = admin_token(&app).await?;

    let form = reqwest::multipart::Form::new()
        .text("number", "2")
        .text("title", "Design")
        .part(
            "image",
            reqwest::multipart::Part::bytes(vec![1, 2, 3])
                .file_name("step.png")
                .mime_str("image/png")?,
        );
    let created: Value = reqwest::Client::new()
        .post(url(&app, "growthsteps"))
        .bearer_auth(token)
        .multipart(form)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    assert_eq!(created["number"], "2");
    let image = created["image"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("no stored image name"))?;

    let upload = reqwest::get(format!(
        "http://127.0.0.1:{}/uploads/{image}",
        app.port
    ))
    .await?;
    assert_eq!(upload.status(), StatusCode::OK);
    assert_eq!(
        upload.headers()["content-type"].to_str()?,
        "image/png"
    );
    assert_eq!(upload.bytes().await?.as_ref(), &[1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn visits_are_counted() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    client.post(url(&app, "visitor")).send().await?;
    client.post(url(&app, "visitor")).send().await?;

    let count: Value = reqwest::get(url(&app, "visitor")).await?.json().await?;
    assert_eq!(count["count"], 2);
    Ok(())
}

#[tokio::test]
async fn oversized_paging_returns_an_empty_page() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_products(3)?;

    let path = format!("product?page={}&limit={}", usize::MAX, usize::MAX);
    let response = reqwest::get(url(&app, &path)).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let page: Value = response.json().await?;
    assert_eq!(page["total"], 3);
    assert_eq!(page["data"].as_array().map(Vec::len), Some(0));
    Ok(())
}
