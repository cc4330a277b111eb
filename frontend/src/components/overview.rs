use podnet_shared::api::EntityKind;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    advertisers::AdvertisersSection, episodes::EpisodesSection, hosts::HostsSection,
    shows::ShowsSection, stats_card::StatsCard,
};
use crate::{api, api::DashboardData, hooks::SectionActions};

fn stat_icon(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Hosts => "fa-users",
        EntityKind::Shows => "fa-podcast",
        EntityKind::Episodes => "fa-microphone",
        EntityKind::Advertisers => "fa-briefcase",
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardOverviewProps {
    pub data: DashboardData,
    pub actions: SectionActions,
    /// Neutral messages, e.g. when seeding was skipped.
    pub on_info: Callback<String>,
    /// Switches the dashboard to the tab of a collection.
    pub on_navigate: Callback<EntityKind>,
}

#[function_component(DashboardOverview)]
pub fn dashboard_overview(props: &DashboardOverviewProps) -> Html {
    let busy = use_state(|| false);
    let popular = &props.data.popular;

    let view_all = |kind: EntityKind| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: ()| on_navigate.emit(kind))
    };

    let clear_all = {
        let actions = props.actions.clone();
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .and_then(|win| {
                    win.confirm_with_message(
                        "Are you sure you want to delete ALL your data? This cannot be undone!",
                    )
                    .ok()
                })
                .unwrap_or(false);
            if !confirmed || *busy {
                return;
            }
            busy.set(true);
            let actions = actions.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let result = api::clear_all(&actions.token).await;
                busy.set(false);
                match result {
                    Ok(response) => actions
                        .on_changed
                        .emit(format!("Deleted {}!", response.deleted.summary())),
                    Err(err) => actions.on_error.emit(err),
                }
            });
        })
    };

    let load_defaults = {
        let actions = props.actions.clone();
        let on_info = props.on_info.clone();
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            if *busy {
                return;
            }
            busy.set(true);
            let actions = actions.clone();
            let on_info = on_info.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let result = api::initialize_defaults(&actions.token, true).await;
                busy.set(false);
                match result {
                    Ok(response) => match (response.initialized, response.counts) {
                        (true, Some(counts)) => actions
                            .on_changed
                            .emit(format!("Initialized {}!", counts.summary())),
                        (true, None) => actions
                            .on_changed
                            .emit("Default data initialized".to_string()),
                        (false, _) => on_info.emit(response.message.unwrap_or_default()),
                    },
                    Err(err) => actions.on_error.emit(err),
                }
            });
        })
    };

    let stats = popular.stats().into_iter().map(|stat| {
        let on_navigate = props.on_navigate.clone();
        let kind = stat.kind;
        html! {
            <StatsCard
                icon={stat_icon(stat.kind)}
                label={stat.label}
                value={stat.count}
                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(kind))}
            />
        }
    });

    html! {
        <div class="space-y-10">
            <header class="flex flex-wrap items-end justify-between gap-4">
                <div>
                    <h1 class="flex items-center gap-3 text-3xl font-bold">
                        <i class="fas fa-chart-line text-violet-500" aria-hidden="true"></i>
                        { "Dashboard Overview" }
                    </h1>
                    <p class="mt-1 text-slate-500 dark:text-slate-400">{ "Your podcast network at a glance" }</p>
                </div>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="rounded-lg border border-red-300 px-4 py-2 text-sm font-medium text-red-600 hover:bg-red-50 disabled:opacity-60 dark:border-red-800 dark:hover:bg-red-950"
                        disabled={*busy}
                        onclick={clear_all}
                    >
                        <i class="fas fa-trash mr-2" aria-hidden="true"></i>{ "Clear All Data" }
                    </button>
                    <button
                        type="button"
                        class="rounded-lg bg-violet-600 px-4 py-2 text-sm font-medium text-white hover:bg-violet-700 disabled:opacity-60"
                        disabled={*busy}
                        onclick={load_defaults.clone()}
                    >
                        <i class="fas fa-wand-magic-sparkles mr-2" aria-hidden="true"></i>{ "Load Default Podcasts" }
                    </button>
                </div>
            </header>

            if popular.needs_seed() {
                <div class="flex flex-wrap items-center justify-between gap-4 rounded-2xl border border-dashed border-violet-300 bg-violet-50 p-6 dark:border-violet-800 dark:bg-violet-950/40">
                    <div>
                        <h2 class="text-lg font-semibold">{ "Your network is empty" }</h2>
                        <p class="text-sm text-slate-600 dark:text-slate-400">
                            { "Load a starter catalogue of hosts, shows, episodes and advertisers to explore the dashboard." }
                        </p>
                    </div>
                    <button
                        type="button"
                        class="rounded-lg bg-violet-600 px-4 py-2 text-sm font-medium text-white hover:bg-violet-700 disabled:opacity-60"
                        disabled={*busy}
                        onclick={load_defaults}
                    >
                        { "Load defaults" }
                    </button>
                </div>
            }

            <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-4">
                { for stats }
            </div>

            <HostsSection
                hosts={popular.hosts.clone()}
                actions={props.actions.clone()}
                title="Popular Hosts"
                limit={Some(EntityKind::Hosts.overview_limit())}
                on_view_all={view_all(EntityKind::Hosts)}
            />
            <ShowsSection
                shows={popular.shows.clone()}
                hosts={props.data.hosts.clone()}
                actions={props.actions.clone()}
                title="Popular Shows"
                limit={Some(EntityKind::Shows.overview_limit())}
                on_view_all={view_all(EntityKind::Shows)}
            />
            <EpisodesSection
                episodes={popular.episodes.clone()}
                shows={props.data.shows.clone()}
                actions={props.actions.clone()}
                title="Popular Episodes"
                limit={Some(EntityKind::Episodes.overview_limit())}
                on_view_all={view_all(EntityKind::Episodes)}
            />
            <AdvertisersSection
                advertisers={popular.advertisers.clone()}
                actions={props.actions.clone()}
                title="Top Advertisers"
                limit={Some(EntityKind::Advertisers.overview_limit())}
                on_view_all={view_all(EntityKind::Advertisers)}
            />
        </div>
    }
}
