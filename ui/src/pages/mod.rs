pub mod about;
pub mod admin;
pub mod blog;
pub mod blog_post;
pub mod contact;
pub mod email_request;
pub mod home;
pub mod login;
pub mod not_found;
pub mod products;
pub mod reset_password;
pub mod services;
pub mod verify_otp;

pub use about::AboutPage;
pub use admin::AdminPage;
pub use blog::BlogPage;
pub use blog_post::BlogPostPage;
pub use contact::ContactPage;
pub use email_request::EmailRequestPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use products::ProductsPage;
pub use reset_password::ResetPasswordPage;
pub use services::ServicesPage;
pub use verify_otp::VerifyOtpPage;

use serde::{Deserialize, Serialize};

/// `?email=` carried through the password reset steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: String,
}
