use payloads::{Blog, BlogStatus, requests::PageQuery};
use serde_json::json;

use test_helpers::spawn_app;

#[tokio::test]
async fn blog_post_by_slug() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_blog("Hello world", "hello-world", "published")?;

    let post = app.client.blog_by_slug("hello-world").await?;
    assert_eq!(post.title, "Hello world");
    assert!(post.is_published());
    assert_eq!(post.tag_list(), vec!["rust", "web"]);

    let missing = app.client.blog_by_slug("nope").await.unwrap_err();
    assert!(missing.is_not_found());
    Ok(())
}

#[tokio::test]
async fn published_filter() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_blog("Out now", "out-now", "published")?;
    app.seed_blog("Work in progress", "wip", "draft")?;

    let page = app
        .client
        .list_page::<Blog>(&PageQuery::default().with_status("published"))
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].status, BlogStatus::Published);

    // the admin list shows everything
    assert_eq!(app.client.list::<Blog>().await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn published_pages_start_with_the_newest_post() -> anyhow::Result<()> {
    let app = spawn_app().await;
    for month in 1..=5 {
        app.seed(
            "blog",
            json!({
                "title": format!("Post {month}"),
                "slug": format!("post-{month}"),
                "content": "<p>news</p>",
                "status": "published",
                "createdAt": format!("2025-0{month}-01T00:00:00Z"),
            }),
        )?;
    }

    let preview = app
        .client
        .list_page::<Blog>(&PageQuery::new(1, 3).with_status("published"))
        .await?;
    let titles: Vec<&str> =
        preview.data.iter().map(|post| post.title.as_str()).collect();
    assert_eq!(titles, vec!["Post 5", "Post 4", "Post 3"]);

    let rest = app
        .client
        .list_page::<Blog>(&PageQuery::new(2, 3).with_status("published"))
        .await?;
    let titles: Vec<&str> =
        rest.data.iter().map(|post| post.title.as_str()).collect();
    assert_eq!(titles, vec!["Post 2", "Post 1"]);
    Ok(())
}

#[tokio::test]
async fn image_urls_point_at_uploads() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_eq!(
        app.client.image_url("abc.png"),
        format!("http://127.0.0.1:{}/uploads/abc.png", app.port)
    );
    assert_eq!(
        app.client.image_url("https://cdn.example.com/x.png"),
        "https://cdn.example.com/x.png"
    );
    Ok(())
}
