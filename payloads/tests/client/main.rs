mod auth;
mod caching;
mod collections;
mod singletons;
mod site;

use test_helpers::spawn_app;

#[tokio::test]
async fn visitor_counter() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_eq!(app.client.visitor_count().await?.count, 0);
    app.client.record_visit().await?;
    app.client.record_visit().await?;
    assert_eq!(app.client.visitor_count().await?.count, 2);

    Ok(())
}
