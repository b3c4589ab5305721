use log::{debug, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod cards;
    pub mod counter;
    pub mod faq;
    pub mod lifecycle;
    pub mod navigation;
}
mod pages {
    pub mod classic;
    pub mod content;
    pub mod landing;
}
#[cfg(test)]
mod test_support;

use pages::{classic::ClassicLandingPage, landing::LandingPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/classic")]
    Classic,
    #[not_found]
    #[at("/404")]
    NotFound,
}

// Upload and email capture live in services outside this app; until they are
// wired up the signals are only logged.
fn upload_requested() -> Callback<()> {
    Callback::from(|_| info!("Document upload requested"))
}

fn signup_requested() -> Callback<String> {
    Callback::from(|email: String| {
        info!("Signup requested");
        debug!("Signup email: {}", email);
    })
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <LandingPage on_upload={upload_requested()} on_signup={signup_requested()} /> }
        },
        Route::Classic => {
            info!("Rendering Classic landing page");
            html! { <ClassicLandingPage /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Landing page");
            html! { <LandingPage on_upload={upload_requested()} on_signup={signup_requested()} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_from_paths() {
        assert!(Route::recognize("/") == Some(Route::Home));
        assert!(Route::recognize("/classic") == Some(Route::Classic));
        assert!(Route::not_found_route() == Some(Route::NotFound));
    }

    #[test]
    fn routes_render_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Classic.to_path(), "/classic");
    }
}
