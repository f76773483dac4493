use actix_web::web;
use mock_api::{
    Config, build,
    store::MockStore,
    telemetry::{get_subscriber, init_subscriber},
};

/// Mock content API server
///
/// Serves every collection and singleton endpoint from memory, starting
/// empty apart from one administrator account.
///
/// Environment variables (all optional, also read from a .env file):
/// - IP_ADDRESS: bind address, default 127.0.0.1
/// - PORT: default 8000
/// - ALLOWED_ORIGINS: "*" or a comma-separated list, default "*"
/// - ADMIN_EMAIL / ADMIN_PASSWORD: seeded administrator login, default
///   admin@example.com / password
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let mut config = Config::from_env()?;

    let store = web::Data::new(MockStore::default());
    let email = std::env::var("ADMIN_EMAIL")
        .unwrap_or_else(|_| "admin@example.com".into());
    let password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "password".into());
    store.add_admin("Administrator", &email, &password);

    let server = build(&mut config, store)?;
    tracing::info!("mock API listening on {}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
