use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::contexts::use_session;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children only with a session; otherwise redirects to the
/// login page. The stored token is re-read each time the route is entered.
#[function_component]
pub fn ProtectedRoute(props: &ProtectedRouteProps) -> Html {
    let session = use_session();

    {
        let session = session.clone();
        use_effect_with((), move |_| session.check());
    }

    if !session.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    html! { <>{for props.children.iter()}</> }
}
