use payloads::{
    ClientError, ContactSubmission, PAGE_SIZE, Product, ProductDraft,
    Resource, ResourceList, Service, TeamMember, TeamMemberDraft,
    requests::PageQuery,
};
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

use test_helpers::{
    TINY_PNG, assert_status_code, contact_draft_a, picked_image,
    product_draft_a, spawn_app,
};

#[tokio::test]
async fn create_sends_one_multipart_post() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;

    app.client.create::<Product>(&product_draft_a()).await?;

    let posts = app.requests_to("POST", "product");
    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert!(post.is_multipart());
    assert_eq!(post.files, vec!["image".to_string()]);
    let body = post.body.as_ref().unwrap();
    assert_eq!(body["name"], "Launchpad");
    assert_eq!(body["link"], "https://example.com/launchpad");
    assert!(post.authorization.as_deref().unwrap().starts_with("Bearer "));

    let products = app.client.list::<Product>().await?;
    assert_eq!(products.len(), 1);
    let image = products[0].image.clone().unwrap();
    assert!(image.ends_with("launchpad.png"));

    // the stored upload is served back under the image base
    let bytes = reqwest::get(app.client.image_url(&image))
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    assert_eq!(bytes.as_ref(), TINY_PNG);
    Ok(())
}

#[tokio::test]
async fn draft_without_new_image_is_sent_as_json() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // contact submissions are accepted without a session
    app.client
        .create::<ContactSubmission>(&contact_draft_a())
        .await?;

    let posts = app.requests_to("POST", "contact");
    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert!(!post.is_multipart());
    assert!(post.authorization.is_none());
    assert_eq!(
        post.body,
        Some(json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "number": "5551234",
            "message": "Please call me back.",
        }))
    );
    Ok(())
}

#[tokio::test]
async fn edit_sends_one_put_with_id() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let ids = app.seed_products(2)?;
    app.login_admin().await?;

    let products = app.client.list::<Product>().await?;
    let target = products.iter().find(|p| p.id == ids[1]).unwrap();
    let mut draft = target.to_draft();
    draft.name = "Renamed".into();
    app.client.update::<Product>(&target.id, &draft).await?;

    let puts = app.requests_to("PUT", &format!("product/{}", ids[1]));
    assert_eq!(puts.len(), 1);
    assert!(!puts[0].is_multipart());
    assert!(app.requests_to("POST", "product").is_empty());

    let updated = app.client.get::<Product>(&ids[1]).await?;
    assert_eq!(updated.name, "Renamed");
    // keeps the image it already had
    assert_eq!(updated.image.as_deref(), Some("product-2.png"));
    Ok(())
}

#[tokio::test]
async fn missing_required_fields_send_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;

    let result = app.client.create::<Product>(&ProductDraft::default()).await;
    let error = result.unwrap_err();
    let errors = error.field_errors().unwrap();
    assert!(errors.contains("name"));
    assert!(errors.contains("description"));
    assert!(errors.contains("image"));
    assert!(!errors.contains("link"));
    assert!(app.requests_to("POST", "product").is_empty());
    Ok(())
}

#[tokio::test]
async fn writes_require_a_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let ids = app.seed_products(1)?;

    let result = app.client.create::<Product>(&product_draft_a()).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    let result = app.client.delete::<Product>(&ids[0]).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    assert_eq!(app.client.list::<Product>().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn delete_refreshes_the_list() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let ids = app.seed_products(3)?;
    app.login_admin().await?;

    assert_eq!(app.client.list::<Product>().await?.len(), 3);
    app.client.delete::<Product>(&ids[0]).await?;

    let deletes = app.requests_to("DELETE", &format!("product/{}", ids[0]));
    assert_eq!(deletes.len(), 1);

    let products = app.client.list::<Product>().await?;
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.id != ids[0]));
    assert_eq!(app.requests_to("GET", "product").len(), 2);
    Ok(())
}

#[tokio::test]
async fn failed_fetch_is_reported_once() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_products(1)?;
    app.store.fail_endpoint("service", 500);

    let result = app.client.list::<Service>().await;
    assert_status_code(result, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.requests_to("GET", "service").len(), 1);

    // the failure was not cached
    app.store.clear_failures();
    assert!(app.client.list::<Service>().await?.is_empty());
    assert_eq!(app.requests_to("GET", "service").len(), 2);
    Ok(())
}

#[tokio::test]
async fn server_message_is_surfaced() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let missing = "does-not-exist".into();

    let error = app.client.get::<Product>(&missing).await.unwrap_err();
    assert!(error.is_not_found());
    assert!(error.to_string().contains("Not found"));
    Ok(())
}

#[tokio::test]
async fn ten_products_span_two_pages() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_products(10)?;

    let mut list = ResourceList::new(app.client.list::<Product>().await?);
    assert_eq!(list.total_pages(), 2);
    assert_eq!(list.visible().len(), PAGE_SIZE);
    assert!(list.has_next());

    list.next_page();
    assert_eq!(list.current_page(), 2);
    assert_eq!(list.visible().len(), 1);
    assert_eq!(list.visible()[0].title(), "Product 10");
    assert!(!list.has_next());
    Ok(())
}

#[tokio::test]
async fn server_side_page() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_products(10)?;

    let page = app
        .client
        .list_page::<Product>(&PageQuery::new(2, PAGE_SIZE))
        .await?;
    assert_eq!(page.total, 10);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.total_pages(), 2);
    assert!(page.has_previous());
    assert!(!page.has_next());

    let gets = app.requests_to("GET", "product");
    assert_eq!(gets.len(), 1);
    assert_eq!(gets[0].query, "page=2&limit=9");
    Ok(())
}

#[tokio::test]
async fn slow_team_upload_times_out() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;
    assert_eq!(TeamMember::REQUEST_TIMEOUT, Some(Duration::from_secs(30)));

    let draft = TeamMemberDraft {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        role: "Engineer".into(),
        image: picked_image("ada.png"),
        ..Default::default()
    };

    // a slow server still finishes well inside the upload limit
    app.store.delay_endpoint("team", Duration::from_millis(200));
    app.client.create::<TeamMember>(&draft).await?;

    app.store.delay_endpoint("team", Duration::from_secs(2));
    let result = app
        .client
        .save_with_timeout::<TeamMember>(
            None,
            &draft,
            Some(Duration::from_millis(100)),
        )
        .await;
    assert!(matches!(result, Err(ClientError::Timeout)), "{result:?}");
    Ok(())
}
