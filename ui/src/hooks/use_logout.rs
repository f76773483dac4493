use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::contexts::use_session;

/// Clears the session (token and cached responses) and returns to the
/// login page.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let session = use_session();
    let navigator = use_navigator();

    Callback::from(move |_| {
        session.logout();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    })
}
