use yew::prelude::*;

use crate::components::sections::{
    AboutSection, AchievementsSection, StatsSection, TeamSection,
};
use crate::hooks::use_title;

#[function_component]
pub fn AboutPage() -> Html {
    use_title("About");

    html! {
        <>
            <AboutSection />
            <StatsSection />
            <TeamSection />
            <AchievementsSection />
        </>
    }
}
