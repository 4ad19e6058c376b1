pub mod components;
pub mod config;
pub mod i18n;
pub mod pages;
pub mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::landing::Landing;
use crate::pages::lite::Lite;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/lite")]
    Lite,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing | Route::NotFound => html! { <Landing /> },
        Route::Lite => html! { <Lite /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
