use yew::prelude::*;

use crate::components::sections::{
    AchievementsSection, BlogPreviewSection, GrowthStepsSection, Hero,
    RecentWorkSection, ServicesSection, StatsSection, TeamSection,
};
use crate::hooks::use_title;

#[function_component]
pub fn HomePage() -> Html {
    use_title("");

    html! {
        <>
            <Hero />
            <StatsSection />
            <ServicesSection />
            <RecentWorkSection />
            <GrowthStepsSection />
            <AchievementsSection />
            <TeamSection />
            <BlogPreviewSection />
        </>
    }
}
