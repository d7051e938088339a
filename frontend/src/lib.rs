pub mod components;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod pages;
pub mod render;
pub mod slider;
pub mod state;
pub mod utils;
pub mod validation;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! {
            <div class="container mx-auto px-4 py-16 text-center">
                <h1 class="text-3xl font-bold mb-4">{"ページが見つかりません"}</h1>
                <Link<Route> to={Route::Home}>{"トップへ戻る"}</Link<Route>>
            </div>
        },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
