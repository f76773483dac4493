//! The admin panel: a sidebar of sections, each managing one collection or
//! singleton document through the generic components below.

pub mod dashboard;
pub mod header;
pub mod policies;
pub mod register_admin_form;
pub mod resource_form;
pub mod resource_manager;
pub mod sidebar;
pub mod singleton_editor;

pub use dashboard::Dashboard;
pub use header::AdminHeader;
pub use policies::PoliciesEditor;
pub use register_admin_form::RegisterAdminForm;
pub use resource_form::ResourceForm;
pub use resource_manager::ResourceManager;
pub use sidebar::AdminSidebar;
pub use singleton_editor::SingletonEditor;

/// Which admin section is showing. Local state, not part of the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminSection {
    #[default]
    Dashboard,
    Products,
    Services,
    Team,
    Achievements,
    GrowthSteps,
    Blog,
    ContactSubmissions,
    Stats,
    AboutUs,
    ContactInfo,
    Policies,
}

impl AdminSection {
    pub const ALL: [AdminSection; 12] = [
        Self::Dashboard,
        Self::Products,
        Self::Services,
        Self::Team,
        Self::Achievements,
        Self::GrowthSteps,
        Self::Blog,
        Self::ContactSubmissions,
        Self::Stats,
        Self::AboutUs,
        Self::ContactInfo,
        Self::Policies,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::Services => "Services",
            Self::Team => "Team",
            Self::Achievements => "Achievements",
            Self::GrowthSteps => "Growth Steps",
            Self::Blog => "Blog",
            Self::ContactSubmissions => "Contact Submissions",
            Self::Stats => "Stats",
            Self::AboutUs => "About Us",
            Self::ContactInfo => "Contact Info",
            Self::Policies => "Policies",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_distinct_label() {
        let mut labels: Vec<&str> =
            AdminSection::ALL.iter().map(AdminSection::label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), AdminSection::ALL.len());
    }

    #[test]
    fn panel_opens_on_the_dashboard() {
        assert_eq!(AdminSection::default(), AdminSection::Dashboard);
        assert_eq!(AdminSection::ALL[0], AdminSection::Dashboard);
    }
}
