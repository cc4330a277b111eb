//! Browser dashboard for managing a podcast network.

mod api;
mod components;
mod config;
mod hooks;
mod pages;
mod router;
mod session_context;
mod storage;

use yew::prelude::*;

use crate::session_context::SessionProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <SessionProvider>
            <router::AppRouter />
        </SessionProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
