pub mod session;
pub mod toast;

pub use session::{SessionProvider, use_session};
pub use toast::{ToastProvider, use_toast};
