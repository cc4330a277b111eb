use yew::prelude::*;
use yew_router::prelude::*;

use crate::{pages, session_context::use_session};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct ProtectedProps {
    children: Html,
}

/// Renders its children only with a session token, otherwise sends the
/// visitor back to the landing page.
#[function_component(Protected)]
fn protected(props: &ProtectedProps) -> Html {
    let session = use_session();
    if session.session.is_authenticated() {
        props.children.clone()
    } else {
        html! { <Redirect<Route> to={Route::Landing} /> }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <pages::landing::LandingPage /> },
        Route::Dashboard => html! {
            <Protected>
                <pages::dashboard::DashboardPage />
            </Protected>
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex min-h-screen flex-col bg-slate-50 text-slate-900 dark:bg-slate-950 dark:text-slate-100">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}
