//! Public page sections. Each one fetches through the shared request
//! cache, so sections that need the same data share one request.

pub mod about;
pub mod achievements;
pub mod blog_preview;
pub mod contact_details;
pub mod growth_steps;
pub mod hero;
pub mod recent_work;
pub mod services;
pub mod stats;
pub mod team;

pub use about::AboutSection;
pub use achievements::AchievementsSection;
pub use blog_preview::{BlogCard, BlogPreviewSection};
pub use contact_details::ContactDetails;
pub use growth_steps::GrowthStepsSection;
pub use hero::Hero;
pub use recent_work::{ProductCard, RecentWorkSection};
pub use services::ServicesSection;
pub use stats::StatsSection;
pub use team::TeamSection;

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn Section(props: &SectionProps) -> Html {
    html! {
        <section class={classes!("py-16", props.class.clone())}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-10">
                    <h2 class="text-3xl font-bold text-neutral-900">{&props.title}</h2>
                    if let Some(subtitle) = &props.subtitle {
                        <p class="mt-3 text-neutral-600 max-w-2xl mx-auto">{subtitle}</p>
                    }
                </div>
                {for props.children.iter()}
            </div>
        </section>
    }
}
