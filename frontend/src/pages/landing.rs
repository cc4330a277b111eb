use podnet_shared::{
    api::{LoginRequest, RegisterRequest},
    session::parse_oauth_redirect,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        error_banner::{BannerTone, ErrorBanner},
        form_fields::{InputKind, TextField},
        modal::Modal,
        theme_toggle::ThemeToggle,
    },
    config::api_config,
    router::Route,
    session_context::{use_session, SessionAction},
};

const FEATURES: [(&str, &str, &str); 4] = [
    ("fa-users", "Host Management", "Organize and track all your podcast hosts in one place"),
    ("fa-podcast", "Show Production", "Create and manage multiple podcast series effortlessly"),
    ("fa-microphone", "Episode Tracking", "Keep track of every episode with detailed metadata"),
    ("fa-briefcase", "Advertiser Relations", "Manage sponsorships and advertising partnerships"),
];

#[derive(Clone, Default, PartialEq)]
struct Credentials {
    name: String,
    email: String,
    password: String,
}

fn current_query() -> String {
    web_sys::window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let show_auth = use_state(|| false);
    let is_login = use_state(|| true);
    let submitting = use_state(|| false);
    let credentials = use_state(Credentials::default);
    let error = use_state(|| None::<String>);

    // Federated login lands here with the result in the query string.
    {
        let session = session.clone();
        let navigator = navigator.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            let query = current_query();
            match parse_oauth_redirect(&query) {
                Ok(Some(auth)) => {
                    session.dispatch(SessionAction::SignIn(auth));
                    session.dispatch(SessionAction::Notify(Some(
                        "Successfully signed in with Google!".to_string(),
                    )));
                    if let Some(navigator) = navigator.as_ref() {
                        navigator.replace(&Route::Dashboard);
                    }
                },
                Ok(None) => {},
                Err(err) => {
                    web_sys::console::error_1(&format!("oauth redirect: {err:#}").into());
                    error.set(Some(err.to_string()));
                    if let Some(navigator) = navigator.as_ref() {
                        navigator.replace(&Route::Landing);
                    }
                },
            }
            || ()
        });
    }

    if session.session.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let open_auth = {
        let show_auth = show_auth.clone();
        Callback::from(move |_: MouseEvent| show_auth.set(true))
    };
    let close_auth = {
        let show_auth = show_auth.clone();
        Callback::from(move |_: ()| show_auth.set(false))
    };
    let toggle_mode = {
        let is_login = is_login.clone();
        Callback::from(move |_: MouseEvent| is_login.set(!*is_login))
    };

    let set_field = |apply: fn(&mut Credentials, String)| {
        let credentials = credentials.clone();
        Callback::from(move |value: String| {
            let mut next = (*credentials).clone();
            apply(&mut next, value);
            credentials.set(next);
        })
    };

    let onsubmit = {
        let session = session.clone();
        let credentials = credentials.clone();
        let is_login = *is_login;
        let submitting = submitting.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            let values = (*credentials).clone();
            let session = session.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            spawn_local(async move {
                let result = if is_login {
                    api::login(&LoginRequest {
                        email: values.email,
                        password: values.password,
                    })
                    .await
                } else {
                    api::register(&RegisterRequest {
                        name: values.name,
                        email: values.email,
                        password: values.password,
                    })
                    .await
                };
                submitting.set(false);
                match result {
                    Ok(auth) => {
                        let greeting = if is_login {
                            "Welcome back!"
                        } else {
                            "Account created successfully!"
                        };
                        session.dispatch(SessionAction::SignIn(auth));
                        session.dispatch(SessionAction::Notify(Some(greeting.to_string())));
                    },
                    Err(err) => {
                        web_sys::console::error_1(&format!("auth failed: {err}").into());
                        error.set(Some(err.message().to_string()));
                    },
                }
            });
        })
    };

    let google_login = Callback::from(|_: MouseEvent| {
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(&api_config().google_login_url());
        }
    });

    let notice = session.notice.clone();
    let dismiss_error = {
        let error = error.clone();
        Callback::from(move |_: ()| error.set(None))
    };
    let dismiss_notice = {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(SessionAction::Notify(None)))
    };

    let auth_modal = if *show_auth {
        let title = if *is_login { "Welcome Back" } else { "Create Account" };
        html! {
            <Modal {title} on_close={close_auth}>
                <form class="space-y-4" {onsubmit}>
                    if !*is_login {
                        <TextField
                            id="name"
                            label="Name"
                            value={credentials.name.clone()}
                            required=true
                            on_change={set_field(|c, v| c.name = v)}
                        />
                    }
                    <TextField
                        id="email"
                        label="Email"
                        kind={InputKind::Email}
                        value={credentials.email.clone()}
                        required=true
                        on_change={set_field(|c, v| c.email = v)}
                    />
                    <TextField
                        id="password"
                        label="Password"
                        kind={InputKind::Password}
                        value={credentials.password.clone()}
                        required=true
                        on_change={set_field(|c, v| c.password = v)}
                    />
                    <button
                        type="submit"
                        class="w-full rounded-lg bg-violet-600 px-4 py-2 font-medium text-white hover:bg-violet-700 disabled:opacity-60"
                        disabled={*submitting}
                    >
                        { if *is_login { "Sign In" } else { "Sign Up" } }
                    </button>
                </form>
                <div class="my-4 text-center text-xs uppercase tracking-wide text-slate-400">{ "or" }</div>
                <button
                    type="button"
                    class="flex w-full items-center justify-center gap-2 rounded-lg border border-slate-300 px-4 py-2 font-medium hover:bg-slate-50 dark:border-slate-700 dark:hover:bg-slate-800"
                    onclick={google_login}
                >
                    <i class="fab fa-google" aria-hidden="true"></i>
                    { "Continue with Google" }
                </button>
                <p class="mt-4 text-center text-sm text-slate-500">
                    { if *is_login { "Don't have an account? " } else { "Already have an account? " } }
                    <button type="button" class="font-medium text-violet-600 hover:underline dark:text-violet-400" onclick={toggle_mode}>
                        { if *is_login { "Sign up" } else { "Sign in" } }
                    </button>
                </p>
            </Modal>
        }
    } else {
        Html::default()
    };

    html! {
        <main class="relative flex flex-1 flex-col items-center px-6 py-16">
            <div class="absolute right-6 top-6">
                <ThemeToggle />
            </div>
            <div class="fixed left-1/2 top-4 z-[60] flex w-full -translate-x-1/2 flex-col items-center gap-2 px-4">
                if let Some(message) = (*error).clone() {
                    <ErrorBanner {message} on_close={dismiss_error} />
                }
                if let Some(message) = notice {
                    <ErrorBanner {message} tone={BannerTone::Success} on_close={dismiss_notice} />
                }
            </div>

            <section class="mx-auto max-w-3xl text-center">
                <span class="inline-block rounded-full bg-violet-100 px-4 py-1 text-xs font-semibold tracking-widest text-violet-700 dark:bg-violet-900/40 dark:text-violet-300">
                    { "PODCAST NETWORK" }
                </span>
                <h1 class="mt-6 text-4xl font-bold sm:text-6xl">{ "Manage Your Podcast Empire" }</h1>
                <p class="mt-4 text-lg text-slate-600 dark:text-slate-400">
                    { "The all-in-one platform for podcast creators, hosts, and advertisers" }
                </p>
                <button
                    type="button"
                    class="mt-8 rounded-xl bg-violet-600 px-8 py-3 text-lg font-semibold text-white shadow-lg hover:bg-violet-700"
                    onclick={open_auth}
                >
                    { "Get Started" }
                </button>
            </section>

            <section class="mx-auto mt-16 grid max-w-5xl gap-6 sm:grid-cols-2 lg:grid-cols-4">
                { for FEATURES.iter().map(|(icon, title, text)| html! {
                    <div class="rounded-2xl border border-slate-200 bg-white p-6 dark:border-slate-800 dark:bg-slate-900">
                        <i class={classes!("fas", *icon, "fa-2x", "mb-4", "text-violet-500")} aria-hidden="true"></i>
                        <h3 class="mb-2 font-semibold">{ *title }</h3>
                        <p class="text-sm text-slate-600 dark:text-slate-400">{ *text }</p>
                    </div>
                }) }
            </section>

            { auth_modal }
        </main>
    }
}
