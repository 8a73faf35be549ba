use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod referral {
    pub mod request;
    pub mod validation;
    pub mod transport;
    pub mod submission;
}
mod components {
    pub mod toast;
    pub mod referral_form;
    pub mod referral_dialog;
    pub mod nav;
    pub mod footer;
}
mod pages {
    pub mod home;
}

use components::{
    footer::Footer,
    nav::Nav,
    toast::ToastProvider,
};
use pages::home::Home;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="landing-page" style="min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center;">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="btn-primary">
                        {"Back to home"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
        </ToastProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!(
        "Starting application (referrals -> {}, mode {:?})",
        config::referrals_url(),
        config::submit_mode()
    );
    yew::Renderer::<App>::new().render();
}
