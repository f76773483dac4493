pub mod mock;

use actix_web::web;
use mock_api::store::{MockStore, RecordedRequest};
use mock_api::{Config, telemetry};
use payloads::{
    APIClient, ClientConfig, ImageField, ImageUpload, ResourceId, requests,
};
use reqwest::StatusCode;
use serde_json::{Value, json};
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub const ADMIN_NAME: &str = "Admin";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "supersecret";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: APIClient,
    /// Direct handle on the server's state, for seeding and inspecting the
    /// requests the client made.
    pub store: web::Data<MockStore>,
}

/// Session helpers
impl TestApp {
    pub async fn login_admin(&self) -> anyhow::Result<()> {
        let token = self.client.login(&admin_credentials()).await?;
        self.client.set_token(Some(token.token));
        Ok(())
    }

    pub fn logout(&self) {
        self.client.set_token(None);
    }
}

/// Request log helpers
impl TestApp {
    /// Requests received for `path` (below `/api/`) with the given method.
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.store
            .requests()
            .into_iter()
            .filter(|request| request.method == method && request.path == path)
            .collect()
    }
}

/// Functions to populate test data
///
/// Seeding goes straight to the store, so it neither needs a session nor
/// shows up in the request log.
impl TestApp {
    pub fn seed(
        &self,
        endpoint: &str,
        document: Value,
    ) -> anyhow::Result<ResourceId> {
        let created = self.store.create(endpoint, document)?;
        let id = created
            .get("_id")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow::anyhow!("created document has no _id"))?;
        Ok(ResourceId::from(id))
    }

    /// Products named "Product 1" through "Product {count}".
    pub fn seed_products(&self, count: usize) -> anyhow::Result<Vec<ResourceId>> {
        (1..=count)
            .map(|n| {
                self.seed(
                    "product",
                    json!({
                        "name": format!("Product {n}"),
                        "description": format!("Description of product {n}"),
                        "image": format!("product-{n}.png"),
                    }),
                )
            })
            .collect()
    }

    pub fn seed_blog(
        &self,
        title: &str,
        slug: &str,
        status: &str,
    ) -> anyhow::Result<ResourceId> {
        self.seed(
            "blog",
            json!({
                "title": title,
                "slug": slug,
                "category": "Technology",
                "content": format!("<p>{title}</p>"),
                "tags": ["rust", "web"],
                "status": status,
                "featuredImage": format!("{slug}.png"),
            }),
        )
    }

    pub fn seed_singleton(
        &self,
        endpoint: &str,
        document: Value,
    ) -> anyhow::Result<()> {
        self.store.put_singleton(endpoint, document)?;
        Ok(())
    }
}

pub fn admin_credentials() -> requests::LoginCredentials {
    requests::LoginCredentials {
        email: ADMIN_EMAIL.into(),
        password: ADMIN_PASSWORD.into(),
    }
}

/// A 1x1 transparent PNG.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d,
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1f, 0x15, 0xc4, 0x89, 0x00, 0x00, 0x00,
    0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// An image field holding a freshly picked PNG, as the admin form would.
pub fn picked_image(file_name: &str) -> ImageField {
    ImageField {
        existing: None,
        upload: Some(ImageUpload {
            file_name: file_name.to_string(),
            mime_type: "image/png".to_string(),
            bytes: TINY_PNG.to_vec(),
            preview_url: String::new(),
        }),
    }
}

pub fn product_draft_a() -> payloads::ProductDraft {
    payloads::ProductDraft {
        name: "Launchpad".into(),
        description: "Landing pages that convert".into(),
        link: "https://example.com/launchpad".into(),
        image: picked_image("launchpad.png"),
    }
}

pub fn contact_draft_a() -> payloads::ContactSubmissionDraft {
    payloads::ContactSubmissionDraft {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: "grace@example.com".into(),
        number: "5551234".into(),
        message: "Please call me back.".into(),
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        port,
        ..Config::for_tests()
    };

    let store = web::Data::new(MockStore::default());
    store.add_admin(ADMIN_NAME, ADMIN_EMAIL, ADMIN_PASSWORD);

    let server = mock_api::build(&mut config, store.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: APIClient::new(ClientConfig::new(format!(
            "http://127.0.0.1:{}",
            config.port
        ))),
        store,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(e) => assert_eq!(e.status(), Some(expected), "{e}"),
        Ok(_) => panic!("Expected APIError"),
    };
}
