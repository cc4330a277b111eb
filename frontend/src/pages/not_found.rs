use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="flex flex-1 flex-col items-center justify-center gap-4 p-8 text-center">
            <i class="fas fa-headphones fa-3x text-violet-500" aria-hidden="true"></i>
            <h2 class="text-2xl font-bold">{ "404 - Page not found" }</h2>
            <p class="text-slate-500">{ "The page you are looking for does not exist." }</p>
            <Link<Route> to={Route::Landing} classes="font-medium text-violet-600 hover:underline dark:text-violet-400">
                { "Back to home" }
            </Link<Route>>
        </main>
    }
}
