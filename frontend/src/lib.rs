use yew::prelude::*;

pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod state;
pub mod utils;

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Landing />
    }
}
