use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod consent;
mod content;
mod controller;
mod platform;
mod pricing;
mod scroll;
mod state;
mod components {
    pub mod cookie_banner;
    pub mod pricing_section;
    pub mod site_footer;
    pub mod site_header;
}
mod pages {
    pub mod cookie_policy;
    pub mod landing;
    pub mod not_found;
}

use pages::{
    cookie_policy::CookiePolicy,
    landing::Landing,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cookie-policy")]
    CookiePolicy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::CookiePolicy => {
            info!("Rendering Cookie Policy page");
            html! { <CookiePolicy /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
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

    if let Err(e) = pricing::validate_catalogue(&pricing::PLAN_TIERS) {
        log::error!("Plan catalogue is inconsistent: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
