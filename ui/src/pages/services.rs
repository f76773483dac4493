use yew::prelude::*;

use crate::components::sections::{GrowthStepsSection, ServicesSection};
use crate::hooks::use_title;

#[function_component]
pub fn ServicesPage() -> Html {
    use_title("Services");

    html! {
        <>
            <ServicesSection />
            <GrowthStepsSection />
        </>
    }
}
