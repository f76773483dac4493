use payloads::ClientError;
use yew::prelude::*;

use crate::contexts::{session::SessionHandle, toast::ToastHandle};
use crate::contexts::{use_session, use_toast};

/// Surfaces a failed mutation: logs it, shows a toast, and ends the session
/// when the API answers 401.
#[derive(Clone, PartialEq)]
pub struct ErrorReporter {
    toast: ToastHandle,
    session: SessionHandle,
}

impl ErrorReporter {
    /// `action` reads as "Could not {action}", e.g. "delete product".
    pub fn report(&self, action: &str, error: &ClientError) {
        tracing::error!(action, "{error}");
        if error.is_unauthorized() {
            self.toast.error("Your session has expired. Please log in again.");
            self.session.logout();
        } else {
            self.toast.error(format!("Could not {action}: {error}"));
        }
    }
}

#[hook]
pub fn use_error_reporter() -> ErrorReporter {
    ErrorReporter {
        toast: use_toast(),
        session: use_session(),
    }
}
