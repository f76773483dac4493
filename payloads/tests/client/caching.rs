use payloads::{Product, Service};

use test_helpers::{product_draft_a, spawn_app};

#[tokio::test]
async fn concurrent_fetches_share_one_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_products(2)?;

    let (a, b) = futures::join!(
        app.client.list::<Product>(),
        app.client.list::<Product>()
    );
    assert_eq!(a?, b?);
    assert_eq!(app.requests_to("GET", "product").len(), 1);
    Ok(())
}

#[tokio::test]
async fn fresh_results_are_reused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_products(1)?;

    app.client.list::<Product>().await?;
    app.client.list::<Product>().await?;
    assert_eq!(app.requests_to("GET", "product").len(), 1);

    // each endpoint has its own entry
    app.client.list::<Service>().await?;
    assert_eq!(app.requests_to("GET", "service").len(), 1);

    app.client.refetch_list::<Product>().await?;
    assert_eq!(app.requests_to("GET", "product").len(), 2);
    Ok(())
}

#[tokio::test]
async fn create_invalidates_the_collection() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;

    assert!(app.client.list::<Product>().await?.is_empty());
    app.client.create::<Product>(&product_draft_a()).await?;
    assert_eq!(app.client.list::<Product>().await?.len(), 1);
    assert_eq!(app.requests_to("GET", "product").len(), 2);
    Ok(())
}
