use payloads::{
    AboutUs, Achievement, Blog, ContactInfo, ContactSubmission, GrowthStep,
    Product, Service, Stats, TeamMember,
};
use yew::prelude::*;

use crate::components::admin::{
    AdminHeader, AdminSection, AdminSidebar, Dashboard, PoliciesEditor,
    ResourceManager, SingletonEditor,
};
use crate::hooks::use_title;

#[function_component]
pub fn AdminPage() -> Html {
    use_title("Admin");
    let section = use_state(AdminSection::default);

    let on_select = {
        let section = section.clone();
        Callback::from(move |next: AdminSection| section.set(next))
    };

    let body = match *section {
        AdminSection::Dashboard => html! { <Dashboard /> },
        AdminSection::Products => html! { <ResourceManager<Product> /> },
        AdminSection::Services => html! { <ResourceManager<Service> /> },
        AdminSection::Team => html! { <ResourceManager<TeamMember> /> },
        AdminSection::Achievements => {
            html! { <ResourceManager<Achievement> /> }
        }
        AdminSection::GrowthSteps => html! { <ResourceManager<GrowthStep> /> },
        AdminSection::Blog => html! { <ResourceManager<Blog> /> },
        AdminSection::ContactSubmissions => {
            html! { <ResourceManager<ContactSubmission> /> }
        }
        AdminSection::Stats => html! { <SingletonEditor<Stats> /> },
        AdminSection::AboutUs => html! { <SingletonEditor<AboutUs> /> },
        AdminSection::ContactInfo => html! { <SingletonEditor<ContactInfo> /> },
        AdminSection::Policies => html! { <PoliciesEditor /> },
    };

    html! {
        <div class="min-h-screen flex flex-col md:flex-row bg-neutral-50">
            <AdminSidebar current={*section} {on_select} />
            <div class="flex-1 min-w-0">
                <AdminHeader title={section.label()} />
                <main class="p-6">{body}</main>
            </div>
        </div>
    }
}
