use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod debounce;
mod dom;
mod pricing {
    pub mod catalog;
    pub mod controller;
    pub mod error;
    pub mod period;
    pub mod preference;
    pub mod shortcuts;
}
mod components {
    pub mod animated_text;
    pub mod billing_toggle;
    pub mod confirm_modal;
    pub mod plan_card;
    pub mod reveal;
    pub mod scroll_top;
}
mod pages {
    pub mod pricing;
}

use components::scroll_top::ScrollTopButton;
use pages::pricing::PricingPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Pricing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <PricingPage /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting to Pricing");
            html! { <Redirect<Route> to={Route::Pricing} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(|_| {
        dom::mark_body_loaded();
        || ()
    }, ());

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
            <ScrollTopButton />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting pricing page");
    yew::Renderer::<App>::new().render();
}
