pub mod footer;
pub mod header;
pub mod policy_modal;
pub mod site_layout;

pub use footer::Footer;
pub use header::Header;
pub use policy_modal::PolicyModal;
pub use site_layout::SiteLayout;
