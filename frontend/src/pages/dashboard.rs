use podnet_shared::api::{ApiError, EntityKind};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::{self, DashboardData},
    components::{
        advertisers::AdvertisersSection,
        episodes::EpisodesSection,
        error_banner::{BannerTone, ErrorBanner},
        hosts::HostsSection,
        loading_spinner::LoadingSpinner,
        overview::DashboardOverview,
        shows::ShowsSection,
        theme_toggle::ThemeToggle,
    },
    hooks::SectionActions,
    router::Route,
    session_context::{use_session, SessionAction},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Collection(EntityKind),
}

impl Tab {
    const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Collection(EntityKind::Hosts),
        Tab::Collection(EntityKind::Shows),
        Tab::Collection(EntityKind::Episodes),
        Tab::Collection(EntityKind::Advertisers),
    ];

    fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Collection(EntityKind::Hosts) => "Hosts",
            Tab::Collection(EntityKind::Shows) => "Shows",
            Tab::Collection(EntityKind::Episodes) => "Episodes",
            Tab::Collection(EntityKind::Advertisers) => "Advertisers",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tab::Overview => "fa-wand-magic-sparkles",
            Tab::Collection(EntityKind::Hosts) => "fa-users",
            Tab::Collection(EntityKind::Shows) => "fa-podcast",
            Tab::Collection(EntityKind::Episodes) => "fa-microphone",
            Tab::Collection(EntityKind::Advertisers) => "fa-briefcase",
        }
    }
}

#[derive(Clone, PartialEq)]
struct Toast {
    message: String,
    tone: BannerTone,
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let tab = use_state(|| Tab::Overview);
    let menu_open = use_state(|| false);
    let data = use_state(|| None::<DashboardData>);
    let reload = use_state(|| 0_u32);
    let toast = use_state(|| None::<Toast>);

    let token = AttrValue::from(session.session.token.clone().unwrap_or_default());

    // A rejected token ends the session; everything else is shown as a toast.
    let on_error = {
        let session = session.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();
        Callback::from(move |err: ApiError| {
            web_sys::console::error_1(&format!("api error: {err}").into());
            if err.is_unauthorized() {
                session.dispatch(SessionAction::SignOut);
                session.dispatch(SessionAction::Notify(Some(
                    "Your session has expired, please sign in again".to_string(),
                )));
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Landing);
                }
                return;
            }
            toast.set(Some(Toast {
                message: err.message().to_string(),
                tone: BannerTone::Error,
            }));
        })
    };

    {
        let data = data.clone();
        let on_error = on_error.clone();
        let toast = toast.clone();
        use_effect_with((*reload, token.clone()), move |(_, token)| {
            let token = token.clone();
            if !token.is_empty() {
                spawn_local(async move {
                    match api::fetch_dashboard(&token).await {
                        Ok(fresh) => data.set(Some(fresh)),
                        Err(err) if err.is_unauthorized() => on_error.emit(err),
                        Err(err) => {
                            web_sys::console::error_1(&format!("dashboard fetch: {err}").into());
                            toast.set(Some(Toast {
                                message: "Failed to fetch data".to_string(),
                                tone: BannerTone::Error,
                            }));
                        },
                    }
                });
            }
            || ()
        });
    }

    // Pick up the greeting left behind by the landing page.
    {
        let session = session.clone();
        let toast = toast.clone();
        use_effect_with(session.notice.clone(), move |notice| {
            if let Some(message) = notice.clone() {
                toast.set(Some(Toast {
                    message,
                    tone: BannerTone::Success,
                }));
                session.dispatch(SessionAction::Notify(None));
            }
            || ()
        });
    }

    let actions = SectionActions {
        token: token.clone(),
        on_changed: {
            let toast = toast.clone();
            let reload = reload.clone();
            Callback::from(move |message: String| {
                toast.set(Some(Toast {
                    message,
                    tone: BannerTone::Success,
                }));
                reload.set(*reload + 1);
            })
        },
        on_error,
    };

    let on_info = {
        let toast = toast.clone();
        Callback::from(move |message: String| {
            toast.set(Some(Toast {
                message,
                tone: BannerTone::Info,
            }));
        })
    };

    let navigate = {
        let tab = tab.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |next: Tab| {
            tab.set(next);
            menu_open.set(false);
        })
    };

    let logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::SignOut);
            session.dispatch(SessionAction::Notify(Some("Logged out successfully".to_string())));
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Landing);
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let nav_links = Tab::ALL.into_iter().map(|item| {
        let navigate = navigate.clone();
        let active = *tab == item;
        html! {
            <button
                type="button"
                class={classes!(
                    "flex", "items-center", "gap-2", "rounded-lg", "px-3", "py-2", "text-sm", "font-medium",
                    if active { "bg-violet-600 text-white" } else { "hover:bg-slate-100 dark:hover:bg-slate-800" }
                )}
                onclick={Callback::from(move |_: MouseEvent| navigate.emit(item))}
            >
                <i class={classes!("fas", item.icon())} aria-hidden="true"></i>
                { item.label() }
            </button>
        }
    });

    let content = match (*data).clone() {
        None => html! { <LoadingSpinner label="Loading your network..." /> },
        Some(data) => match *tab {
            Tab::Overview => {
                let on_navigate = {
                    let navigate = navigate.clone();
                    Callback::from(move |kind: EntityKind| navigate.emit(Tab::Collection(kind)))
                };
                html! { <DashboardOverview {data} actions={actions.clone()} {on_info} {on_navigate} /> }
            },
            Tab::Collection(EntityKind::Hosts) => html! {
                <HostsSection hosts={data.hosts} actions={actions.clone()} />
            },
            Tab::Collection(EntityKind::Shows) => html! {
                <ShowsSection shows={data.shows} hosts={data.hosts} actions={actions.clone()} />
            },
            Tab::Collection(EntityKind::Episodes) => html! {
                <EpisodesSection episodes={data.episodes} shows={data.shows} actions={actions.clone()} />
            },
            Tab::Collection(EntityKind::Advertisers) => html! {
                <AdvertisersSection advertisers={data.advertisers} actions={actions.clone()} />
            },
        },
    };

    html! {
        <div class="flex flex-1 flex-col">
            <nav class="sticky top-0 z-30 border-b border-slate-200 bg-white/90 backdrop-blur dark:border-slate-800 dark:bg-slate-900/90">
                <div class="mx-auto flex max-w-7xl flex-wrap items-center justify-between gap-3 px-4 py-3">
                    <div class="flex items-center gap-2 text-lg font-bold">
                        <i class="fas fa-microphone-lines text-violet-500" aria-hidden="true"></i>
                        <span>{ "PodcastHub" }</span>
                    </div>
                    <button type="button" class="rounded-lg p-2 md:hidden" aria-label="Menu" onclick={toggle_menu}>
                        <i class={classes!("fas", if *menu_open { "fa-xmark" } else { "fa-bars" })} aria-hidden="true"></i>
                    </button>
                    <div class={classes!(
                        "w-full", "flex-col", "gap-1", "md:flex", "md:w-auto", "md:flex-row",
                        if *menu_open { "flex" } else { "hidden" }
                    )}>
                        { for nav_links }
                    </div>
                    <div class="flex items-center gap-2">
                        if let Some(user) = session.session.user.as_ref() {
                            <span class="hidden text-sm text-slate-500 lg:inline">{ user.name.clone() }</span>
                        }
                        <ThemeToggle />
                        <button
                            type="button"
                            class="rounded-lg p-2 hover:bg-slate-100 dark:hover:bg-slate-800"
                            aria-label="Log out"
                            onclick={logout}
                        >
                            <i class="fas fa-right-from-bracket" aria-hidden="true"></i>
                        </button>
                    </div>
                </div>
            </nav>

            <div class="fixed left-1/2 top-20 z-[60] flex w-full -translate-x-1/2 flex-col items-center px-4">
                if let Some(Toast { message, tone }) = (*toast).clone() {
                    <ErrorBanner {message} {tone} on_close={dismiss_toast} />
                }
            </div>

            <main class="mx-auto w-full max-w-7xl flex-1 px-4 py-8">
                { content }
            </main>
        </div>
    }
}
