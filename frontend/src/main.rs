use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod carousel;
mod content;
mod components {
    pub mod scroll;
    pub mod reveal;
    pub mod notification;
    pub mod loading;
    pub mod cursor;
    pub mod navigation;
    pub mod hero;
    pub mod about;
    pub mod facilities;
    pub mod rooms;
    pub mod gallery;
    pub mod testimonials;
    pub mod contact;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{
    home::Home,
    not_found::NotFound,
};


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
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting {}", config::RESORT_NAME);
    yew::Renderer::<App>::new().render();
}
