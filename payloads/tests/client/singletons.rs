use payloads::{
    AboutUs, AboutUsDraft, PrivacyPolicyDocument, RefundPolicyDocument,
    Singleton, Stats, StatsDraft, TermsDocument,
};
use reqwest::StatusCode;
use serde_json::json;

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn missing_document_is_none() -> anyhow::Result<()> {
    let app = spawn_app().await;

    assert_eq!(app.client.singleton::<AboutUs>().await?, None);
    assert_eq!(app.client.singleton::<TermsDocument>().await?, None);
    Ok(())
}

#[tokio::test]
async fn stats_fall_back_to_defaults() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let stats = app.client.singleton::<Stats>().await?.unwrap_or_default();
    assert_eq!(stats, Stats::default());
    assert_eq!(stats.projects_completed, 150);
    Ok(())
}

#[tokio::test]
async fn save_replaces_the_document() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;

    let draft = AboutUsDraft {
        title: "About".into(),
        description: "Who we are".into(),
        mission: "Ship".into(),
        vision: String::new(),
    };
    app.client.save_singleton::<AboutUs>(&draft).await?;

    let puts = app.requests_to("PUT", "aboutus");
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].body.as_ref().unwrap()["mission"], "Ship");

    let about = app.client.singleton::<AboutUs>().await?.unwrap();
    assert_eq!(about.title, "About");
    assert_eq!(about.to_draft(), draft);
    Ok(())
}

#[tokio::test]
async fn stats_are_sent_as_numbers() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.login_admin().await?;

    let draft = StatsDraft {
        projects_completed: "12".into(),
        happy_clients: "10".into(),
        team_members: "4".into(),
        years_of_experience: "2".into(),
    };
    app.client.save_singleton::<Stats>(&draft).await?;

    let puts = app.requests_to("PUT", "stats");
    assert_eq!(puts[0].body.as_ref().unwrap()["happyClients"], json!(10));
    let stats = app.client.singleton::<Stats>().await?.unwrap();
    assert_eq!(stats.team_members, 4);
    Ok(())
}

#[tokio::test]
async fn policies_live_at_their_own_endpoints() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.seed_singleton(
        "privacypolicy",
        json!({"title": "Privacy", "content": "<p>p</p>"}),
    )?;
    app.seed_singleton("refund", json!({"title": "Refunds", "content": "<p>r</p>"}))?;

    let privacy = app.client.singleton::<PrivacyPolicyDocument>().await?;
    assert_eq!(privacy.unwrap().title, "Privacy");
    let refund = app.client.singleton::<RefundPolicyDocument>().await?;
    assert_eq!(refund.unwrap().content, "<p>r</p>");
    assert_eq!(app.client.singleton::<TermsDocument>().await?, None);
    Ok(())
}

#[tokio::test]
async fn saving_requires_a_session() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let draft = AboutUsDraft {
        title: "About".into(),
        description: "Who we are".into(),
        ..Default::default()
    };
    let result = app.client.save_singleton::<AboutUs>(&draft).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);
    Ok(())
}
