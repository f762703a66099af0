use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod motion {
    pub mod carousel;
    pub mod hooks;
    pub mod keyframes;
    pub mod progress;
    pub mod reveal;
    pub mod selector;
}
mod components {
    pub mod category;
    pub mod footer;
    pub mod navbar;
}
mod pages {
    pub mod home;
    pub mod men;
    pub mod product;
    pub mod skin;
}

use pages::{home::Home, men::Men, product::ProductPage, skin::Skin};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/home")]
    Home,
    #[at("/men")]
    Men,
    #[at("/skin")]
    Skin,
    #[at("/product/:id")]
    Product { id: u32 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Root | Route::NotFound => {
            html! { <Redirect<Route> to={Route::Home} /> }
        }
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Men => {
            info!("Rendering Men page");
            html! { <Men /> }
        }
        Route::Skin => {
            info!("Rendering Skin page");
            html! { <Skin /> }
        }
        Route::Product { id } => {
            info!("Rendering Product page for product {}", id);
            html! { <ProductPage {id} /> }
        }
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
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
