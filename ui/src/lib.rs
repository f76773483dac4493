use payloads::{APIClient, ClientConfig};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod utils;

use components::{ProtectedRoute, SiteLayout, ToastContainer};
use contexts::{SessionProvider, ToastProvider};

thread_local! {
    static API_CLIENT: APIClient = build_api_client();
}

/// The shared API client. Clones share one request cache and one bearer
/// token, so every component sees the same session and cached responses.
pub fn get_api_client() -> APIClient {
    API_CLIENT.with(APIClient::clone)
}

fn build_api_client() -> APIClient {
    // Set at build time; otherwise the API is served from the page origin
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| web_sys::window().and_then(|w| w.location().origin().ok()))
        .unwrap_or_default();

    let mut config = ClientConfig::new(address);
    config.image_base = option_env!("IMAGE_BASE_URL").map(str::to_string);
    APIClient::new(config)
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    use_effect_with((), |_| {
        // one visit per app load
        wasm_bindgen_futures::spawn_local(async {
            if let Err(e) = get_api_client().record_visit().await {
                tracing::warn!("could not record visit: {e}");
            }
        });
    });

    html! {
        <BrowserRouter>
            <ToastProvider>
                <SessionProvider>
                    <div class="min-h-screen bg-white text-neutral-900">
                        <Switch<Route> render={switch} />
                    </div>
                    <ToastContainer />
                </SessionProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/products")]
    Products,
    #[at("/login")]
    Login,
    #[at("/emailrequest")]
    EmailRequest,
    #[at("/verifyotp")]
    VerifyOtp,
    #[at("/resetpassword")]
    ResetPassword,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => public(html! { <pages::HomePage /> }),
        Route::About => public(html! { <pages::AboutPage /> }),
        Route::Services => public(html! { <pages::ServicesPage /> }),
        Route::Contact => public(html! { <pages::ContactPage /> }),
        Route::Blog => public(html! { <pages::BlogPage /> }),
        Route::BlogPost { slug } => {
            public(html! { <pages::BlogPostPage {slug} /> })
        }
        Route::Products => public(html! { <pages::ProductsPage /> }),
        Route::Login => html! { <pages::LoginPage /> },
        Route::EmailRequest => html! { <pages::EmailRequestPage /> },
        Route::VerifyOtp => html! { <pages::VerifyOtpPage /> },
        Route::ResetPassword => html! { <pages::ResetPasswordPage /> },
        Route::Admin => html! {
            <ProtectedRoute>
                <pages::AdminPage />
            </ProtectedRoute>
        },
        Route::NotFound => public(html! { <pages::NotFoundPage /> }),
    }
}

fn public(page: Html) -> Html {
    html! { <SiteLayout>{page}</SiteLayout> }
}
