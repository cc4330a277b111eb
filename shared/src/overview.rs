//! Display rules for the dashboard overview and the entity lists.

use crate::{
    api::EntityKind,
    models::{Advertiser, Episode, Host, Show},
};

/// Fallback label when a referenced host or show is missing.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Length of card description excerpts.
pub const EXCERPT_CHARS: usize = 80;

/// The four ranked lists returned by the API's popular endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overview {
    /// Popular hosts.
    pub hosts: Vec<Host>,
    /// Popular shows.
    pub shows: Vec<Show>,
    /// Popular episodes.
    pub episodes: Vec<Episode>,
    /// Popular advertisers.
    pub advertisers: Vec<Advertiser>,
}

/// One headline counter of the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    /// Collection counted.
    pub kind: EntityKind,
    /// Caption under the number.
    pub label: &'static str,
    /// Number of items.
    pub count: usize,
}

impl Overview {
    /// Headline counters, one per collection.
    pub fn stats(&self) -> [Stat; 4] {
        [
            Stat {
                kind: EntityKind::Hosts,
                label: "Popular Hosts",
                count: self.hosts.len(),
            },
            Stat {
                kind: EntityKind::Shows,
                label: "Active Shows",
                count: self.shows.len(),
            },
            Stat {
                kind: EntityKind::Episodes,
                label: "Recent Episodes",
                count: self.episodes.len(),
            },
            Stat {
                kind: EntityKind::Advertisers,
                label: "Top Advertisers",
                count: self.advertisers.len(),
            },
        ]
    }

    /// Whether the account looks empty enough to offer loading the default
    /// catalogue.
    pub fn needs_seed(&self) -> bool {
        self.hosts.is_empty() && self.shows.is_empty()
    }
}

/// Visible part of a list plus whether a "View all" link applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListWindow<'a, T> {
    /// Items to render.
    pub visible: &'a [T],
    /// Whether more items exist than are shown.
    pub has_more: bool,
}

/// Caps `items` at `limit`; `None` shows everything.
pub fn limit_items<T>(items: &[T], limit: Option<usize>) -> ListWindow<'_, T> {
    match limit {
        Some(limit) if items.len() > limit => ListWindow {
            visible: &items[..limit],
            has_more: true,
        },
        _ => ListWindow {
            visible: items,
            has_more: false,
        },
    }
}

/// Episodes whose video link is a playable YouTube reference, in their
/// original order. Episodes with other links stay stored but are not listed.
pub fn playable_episodes(episodes: &[Episode]) -> Vec<Episode> {
    episodes
        .iter()
        .filter(|episode| episode.has_playable_video())
        .cloned()
        .collect()
}

/// First [`EXCERPT_CHARS`] characters of `text` followed by `...`.
pub fn excerpt(text: &str) -> String {
    let head: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{head}...")
}

/// Name of the host with `host_id`, or [`UNKNOWN_LABEL`].
pub fn host_name<'a>(hosts: &'a [Host], host_id: &str) -> &'a str {
    hosts
        .iter()
        .find(|host| host.id == host_id)
        .map_or(UNKNOWN_LABEL, |host| host.name.as_str())
}

/// Title of the show with `show_id`, or [`UNKNOWN_LABEL`].
pub fn show_title<'a>(shows: &'a [Show], show_id: &str) -> &'a str {
    shows
        .iter()
        .find(|show| show.id == show_id)
        .map_or(UNKNOWN_LABEL, |show| show.title.as_str())
}

/// Budget as `$1,234,567.5`: grouped thousands and at most two fraction
/// digits.
pub fn format_budget(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }

    let rounded = format!("{:.2}", amount.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && rounded != "0.00" { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EpisodeStatus;

    fn episode(id: &str, video_url: Option<&str>) -> Episode {
        Episode {
            id: id.to_string(),
            show_id: "s".to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            episode_number: 1,
            duration_minutes: 30,
            audio_url: None,
            video_url: video_url.map(str::to_string),
            thumbnail_url: None,
            status: EpisodeStatus::Published,
            published_at: None,
            user_id: None,
        }
    }

    fn host(id: &str, name: &str) -> Host {
        Host {
            id: id.to_string(),
            name: name.to_string(),
            bio: String::new(),
            email: String::new(),
            image_url: None,
            created_at: None,
            user_id: None,
        }
    }

    #[test]
    fn playable_filter_keeps_order_and_drops_invalid_links() {
        let episodes = vec![
            episode("a", Some("https://youtu.be/dQw4w9WgXcQ")),
            episode("b", None),
            episode("c", Some("https://vimeo.com/1")),
            episode("d", Some("https://www.youtube.com/watch?v=9bZkp7q19f0")),
        ];
        let ids: Vec<_> = playable_episodes(&episodes).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["a", "d"]);
    }

    #[test]
    fn limit_reports_overflow() {
        let items = [1, 2, 3, 4];
        let window = limit_items(&items, Some(3));
        assert_eq!(window.visible, &[1, 2, 3]);
        assert!(window.has_more);

        let window = limit_items(&items, Some(4));
        assert_eq!(window.visible.len(), 4);
        assert!(!window.has_more);

        assert!(!limit_items(&items, None).has_more);
    }

    #[test]
    fn stats_and_seed_hint() {
        let mut overview = Overview::default();
        assert!(overview.needs_seed());
        overview.hosts.push(host("h", "Raj Shamani"));
        assert!(!overview.needs_seed());

        let stats = overview.stats();
        assert_eq!(stats[0].count, 1);
        assert_eq!(stats[1].label, "Active Shows");
        assert_eq!(stats[3].kind, EntityKind::Advertisers);
    }

    #[test]
    fn excerpt_truncates_by_characters() {
        assert_eq!(excerpt("short"), "short...");
        let long = "é".repeat(100);
        assert_eq!(excerpt(&long).chars().count(), EXCERPT_CHARS + 3);
    }

    #[test]
    fn lookups_fall_back_to_unknown() {
        let hosts = vec![host("h1", "Nikhil Kamath")];
        assert_eq!(host_name(&hosts, "h1"), "Nikhil Kamath");
        assert_eq!(host_name(&hosts, "missing"), "Unknown");
        assert_eq!(show_title(&[], "s1"), "Unknown");
    }

    #[test]
    fn budgets_are_grouped() {
        assert_eq!(format_budget(0.0), "$0");
        assert_eq!(format_budget(999.0), "$999");
        assert_eq!(format_budget(1000.0), "$1,000");
        assert_eq!(format_budget(1234567.5), "$1,234,567.5");
        assert_eq!(format_budget(250000.456), "$250,000.46");
        assert_eq!(format_budget(-1500.0), "-$1,500");
    }
}
