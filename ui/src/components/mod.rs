pub mod admin;
pub mod auth_card;
pub mod confirm_modal;
pub mod draft_form;
pub mod html_content;
pub mod image_input;
pub mod layout;
pub mod modal;
pub mod pagination_controls;
pub mod protected_route;
pub mod rich_text_editor;
pub mod sections;
pub mod text_input;
pub mod toast;

pub use auth_card::AuthCard;
pub use confirm_modal::ConfirmModal;
pub use draft_form::DraftForm;
pub use html_content::HtmlContent;
pub use image_input::ImageInput;
pub use layout::SiteLayout;
pub use modal::Modal;
pub use pagination_controls::PaginationControls;
pub use protected_route::ProtectedRoute;
pub use rich_text_editor::RichTextEditor;
pub use text_input::TextInput;
pub use toast::ToastContainer;
