use anyhow::Result;
use podnet_shared::{
    api::EntityKind,
    initials::derive_initials,
    models::{Advertiser, Episode, Host, Show},
    overview::{
        excerpt, format_budget, host_name, limit_items, playable_episodes, show_title, Overview,
    },
};
use serde::Serialize;

use super::{print_json, AppState};

pub async fn popular(state: &mut AppState, kind: Option<EntityKind>) -> Result<()> {
    state.require_login()?;
    match kind {
        Some(EntityKind::Hosts) => {
            let result = state.client.popular::<Host>().await;
            print_json(&state.checked(result)?)
        },
        Some(EntityKind::Shows) => {
            let result = state.client.popular::<Show>().await;
            print_json(&state.checked(result)?)
        },
        Some(EntityKind::Episodes) => {
            let result = state.client.popular::<Episode>().await;
            print_json(&state.checked(result)?)
        },
        Some(EntityKind::Advertisers) => {
            let result = state.client.popular::<Advertiser>().await;
            print_json(&state.checked(result)?)
        },
        None => {
            let overview = fetch_popular(state).await?;
            print_json(&PopularLists {
                hosts: &overview.hosts,
                shows: &overview.shows,
                episodes: &overview.episodes,
                advertisers: &overview.advertisers,
            })
        },
    }
}

#[derive(Serialize)]
struct PopularLists<'a> {
    hosts: &'a [Host],
    shows: &'a [Show],
    episodes: &'a [Episode],
    advertisers: &'a [Advertiser],
}

async fn fetch_popular(state: &mut AppState) -> Result<Overview> {
    let client = &state.client;
    let result = futures::try_join!(
        client.popular::<Host>(),
        client.popular::<Show>(),
        client.popular::<Episode>(),
        client.popular::<Advertiser>(),
    );
    let (hosts, shows, episodes, advertisers) = state.checked(result)?;

    Ok(Overview {
        hosts,
        shows,
        episodes,
        advertisers,
    })
}

#[derive(Serialize)]
struct StatLine {
    label: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct Section<T> {
    items: Vec<T>,
    has_more: bool,
}

impl<T> Section<T> {
    fn build<S>(source: &[S], kind: EntityKind, line: impl Fn(&S) -> T) -> Self {
        let window = limit_items(source, Some(kind.overview_limit()));
        Self {
            items: window.visible.iter().map(line).collect(),
            has_more: window.has_more,
        }
    }
}

#[derive(Serialize)]
struct HostLine {
    id: String,
    initials: String,
    name: String,
    bio: String,
}

#[derive(Serialize)]
struct ShowLine {
    id: String,
    title: String,
    host: String,
    category: String,
    status: &'static str,
}

#[derive(Serialize)]
struct EpisodeLine {
    id: String,
    heading: String,
    show: String,
    duration: String,
    status: &'static str,
    watch_url: Option<String>,
}

#[derive(Serialize)]
struct AdvertiserLine {
    id: String,
    company_name: String,
    contact_person: String,
    budget: String,
    status: &'static str,
}

#[derive(Serialize)]
struct OverviewReport {
    stats: Vec<StatLine>,
    needs_seed: bool,
    hosts: Section<HostLine>,
    shows: Section<ShowLine>,
    episodes: Section<EpisodeLine>,
    advertisers: Section<AdvertiserLine>,
}

pub async fn overview(state: &mut AppState) -> Result<()> {
    state.require_login()?;
    let client = &state.client;
    let result = futures::try_join!(client.list::<Host>(), client.list::<Show>());
    let (all_hosts, all_shows) = state.checked(result)?;
    let popular = fetch_popular(state).await?;
    let episodes = playable_episodes(&popular.episodes);

    let report = OverviewReport {
        stats: popular
            .stats()
            .iter()
            .map(|stat| StatLine {
                label: stat.label,
                count: stat.count,
            })
            .collect(),
        needs_seed: popular.needs_seed(),
        hosts: Section::build(&popular.hosts, EntityKind::Hosts, |host| HostLine {
            id: host.id.clone(),
            initials: derive_initials(&host.name),
            name: host.name.clone(),
            bio: excerpt(&host.bio),
        }),
        shows: Section::build(&popular.shows, EntityKind::Shows, |show| ShowLine {
            id: show.id.clone(),
            title: show.title.clone(),
            host: host_name(&all_hosts, &show.host_id).to_string(),
            category: show.category.clone(),
            status: show.status.label(),
        }),
        episodes: Section::build(&episodes, EntityKind::Episodes, |episode| EpisodeLine {
            id: episode.id.clone(),
            heading: format!("Ep. {}: {}", episode.episode_number, episode.title),
            show: show_title(&all_shows, &episode.show_id).to_string(),
            duration: format!("{} min", episode.duration_minutes),
            status: episode.status.label(),
            watch_url: episode.watch_url(),
        }),
        advertisers: Section::build(
            &popular.advertisers,
            EntityKind::Advertisers,
            |advertiser| AdvertiserLine {
                id: advertiser.id.clone(),
                company_name: advertiser.company_name.clone(),
                contact_person: advertiser.contact_person.clone(),
                budget: format_budget(advertiser.budget),
                status: advertiser.status.label(),
            },
        ),
    };

    if report.needs_seed {
        tracing::info!("no popular hosts or shows yet; `pn-cli init-defaults` loads a starter catalogue");
    }
    print_json(&report)
}
