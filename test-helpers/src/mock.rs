//! Sample content for the dev-server and for tests that want a populated
//! site.
//!
//! Everything is created through the client while logged in as the seeded
//! administrator, so the dataset also exercises the admin write paths
//! (multipart uploads for entities with images, JSON otherwise).

use crate::{TestApp, picked_image};
use anyhow::Result;
use payloads::{
    AboutUs, AboutUsDraft, Achievement, AchievementDraft,
    AchievementStatistics, Blog, BlogDraft, ContactInfo, ContactInfoDraft,
    GrowthStep, GrowthStepDraft, PolicyDraft, PrivacyPolicyDocument, Product,
    ProductDraft, RefundPolicyDocument, Service, ServiceDraft, Stats,
    StatsDraft, TeamMember, TeamMemberDraft, TermsDocument,
};

pub struct DevDataset {
    pub products: Vec<Product>,
    pub services: Vec<Service>,
    pub team: Vec<TeamMember>,
    pub achievements: Vec<Achievement>,
    pub growth_steps: Vec<GrowthStep>,
    pub blogs: Vec<Blog>,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        app.login_admin().await?;
        let client = &app.client;

        tracing::info!("📦 Creating products and services");
        for n in 1..=11 {
            client
                .create::<Product>(&ProductDraft {
                    name: format!("Product {n}"),
                    description: format!(
                        "A sample product, number {n}, for browsing pages."
                    ),
                    link: format!("https://example.com/products/{n}"),
                    image: picked_image(&format!("product-{n}.png")),
                })
                .await?;
        }
        for (name, description) in [
            ("Web development", "Sites and web applications."),
            ("Mobile apps", "Native and cross-platform apps."),
            ("Cloud hosting", "Managed infrastructure."),
            ("Consulting", "Architecture and code reviews."),
        ] {
            client
                .create::<Service>(&ServiceDraft {
                    name: name.into(),
                    description: description.into(),
                    image: picked_image("service.png"),
                })
                .await?;
        }

        tracing::info!("👥 Creating team, achievements and growth steps");
        for (first, last, role, gender) in [
            ("Ada", "Lovelace", "CTO", "female"),
            ("Alan", "Turing", "Lead engineer", "male"),
            ("Grace", "Hopper", "Engineering manager", "female"),
        ] {
            client
                .create::<TeamMember>(&TeamMemberDraft {
                    first_name: first.into(),
                    last_name: last.into(),
                    role: role.into(),
                    email: format!("{}@example.com", first.to_lowercase()),
                    gender: gender.into(),
                    description: format!("{first} joined early on."),
                    image: picked_image("portrait.png"),
                })
                .await?;
        }
        for (title, date, funded) in [
            ("Seed round", "2022-03-01", "$1M"),
            ("Series A", "2023-09-15", "$8M"),
        ] {
            client
                .create::<Achievement>(&AchievementDraft {
                    title: title.into(),
                    description: format!("{title} closed."),
                    statistics: AchievementStatistics {
                        projects_completed: "40".into(),
                        year_on_year_growth: "120%".into(),
                        funded: funded.into(),
                        downloads: "10k".into(),
                    },
                    date: date.into(),
                })
                .await?;
        }
        for (number, title) in [(1, "Discover"), (2, "Design"), (3, "Deliver")]
        {
            client
                .create::<GrowthStep>(&GrowthStepDraft {
                    number: number.to_string(),
                    title: title.into(),
                    description: format!("Step {number}: {title}."),
                    image: picked_image("step.png"),
                })
                .await?;
        }

        tracing::info!("📝 Creating blog posts");
        for (title, status) in [
            ("Shipping Rust to the browser", "published"),
            ("Why we moved to WebAssembly", "published"),
            ("Roadmap for next year", "draft"),
        ] {
            client
                .create::<Blog>(&BlogDraft {
                    title: title.into(),
                    category: "Technology".into(),
                    content: format!("<h1>{title}</h1><p>Sample post body.</p>"),
                    tags: "rust, wasm".into(),
                    status: status.into(),
                    author: "Ada Lovelace".into(),
                    duration: "4 min read".into(),
                    featured_image: picked_image("post.png"),
                    ..Default::default()
                })
                .await?;
        }

        tracing::info!("📄 Saving singleton documents");
        client
            .save_singleton::<Stats>(&StatsDraft {
                projects_completed: "210".into(),
                happy_clients: "180".into(),
                team_members: "32".into(),
                years_of_experience: "9".into(),
            })
            .await?;
        client
            .save_singleton::<AboutUs>(&AboutUsDraft {
                title: "About us".into(),
                description: "We build software for growing companies.".into(),
                mission: "Make good software ordinary.".into(),
                vision: "Every business runs on tools it trusts.".into(),
            })
            .await?;
        client
            .save_singleton::<ContactInfo>(&ContactInfoDraft {
                email: "hello@example.com".into(),
                phone: "+1 555 0100".into(),
                address: "1 Main Street, Springfield".into(),
                working_hours: "Mon-Fri 9:00-17:00".into(),
            })
            .await?;
        client
            .save_singleton::<PrivacyPolicyDocument>(&policy("Privacy policy"))
            .await?;
        client
            .save_singleton::<RefundPolicyDocument>(&policy("Refund policy"))
            .await?;
        client
            .save_singleton::<TermsDocument>(&policy("Terms of service"))
            .await?;

        Ok(Self {
            products: client.list().await?,
            services: client.list().await?,
            team: client.list().await?,
            achievements: client.list().await?,
            growth_steps: client.list().await?,
            blogs: client.list().await?,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📊 Development dataset:");
        tracing::info!("   {} products", self.products.len());
        tracing::info!("   {} services", self.services.len());
        tracing::info!("   {} team members", self.team.len());
        tracing::info!("   {} achievements", self.achievements.len());
        tracing::info!("   {} growth steps", self.growth_steps.len());
        let published = self.blogs.iter().filter(|b| b.is_published()).count();
        tracing::info!(
            "   {} blog posts ({published} published)",
            self.blogs.len()
        );
        for blog in &self.blogs {
            tracing::info!("     /blog/{}", blog.slug);
        }
    }
}

fn policy(title: &str) -> PolicyDraft {
    PolicyDraft {
        title: title.into(),
        content: format!("<h2>{title}</h2><p>Sample terms for development.</p>"),
    }
}
