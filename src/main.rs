use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod contact_form;
mod navigation;
mod reveal;
mod viewport;

mod components {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod navbar;
    pub mod projects;
    pub mod testimonials;
}

mod pages {
    pub mod home;
}

use pages::home::Home;
use viewport::ViewportProvider;

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
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ViewportProvider>
                <Switch<Route> render={switch} />
            </ViewportProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
