//! Entity shapes exchanged with the podcast-network API.
//!
//! These records are owned by the remote service; the dashboard only reads
//! them, turns them into form records and sends payloads back.

use std::{fmt, str::FromStr};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{api::EntityKind, forms::EntityForm, youtube};

/// Error returned when a status string is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} status `{value}`")]
pub struct UnknownStatus {
    /// Which status family was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $family:literal, default = $default:ident,
        { $($variant:ident => $wire:literal, $label:literal;)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire value as sent to and received from the API.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Human readable label for selects and badges.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownStatus;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(UnknownStatus {
                        kind: $family,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

status_enum! {
    /// Production state of a show.
    ShowStatus, "show", default = Active,
    {
        Active => "active", "Active";
        Paused => "paused", "Paused";
        Completed => "completed", "Completed";
    }
}

status_enum! {
    /// Publication state of an episode.
    EpisodeStatus, "episode", default = Draft,
    {
        Draft => "draft", "Draft";
        Published => "published", "Published";
        Archived => "archived", "Archived";
    }
}

status_enum! {
    /// Relationship state of an advertiser.
    AdvertiserStatus, "advertiser", default = Active,
    {
        Active => "active", "Active";
        Inactive => "inactive", "Inactive";
        Pending => "pending", "Pending";
    }
}

/// Authenticated dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
}

/// Podcast host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name, also the source of the avatar initials.
    pub name: String,
    /// Free-text biography.
    pub bio: String,
    /// Contact email.
    pub email: String,
    /// Absolute or backend-relative portrait URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Creation timestamp as sent by the API.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Owning user.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Podcast show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Server-assigned identifier.
    pub id: String,
    /// Show title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Identifier of the presenting host.
    pub host_id: String,
    /// Free-text category.
    pub category: String,
    /// Cover art URL.
    #[serde(default)]
    pub cover_image_url: Option<String>,
    /// Production state.
    #[serde(default)]
    pub status: ShowStatus,
    /// Creation timestamp as sent by the API.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Owning user.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Episode of a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Server-assigned identifier.
    pub id: String,
    /// Identifier of the parent show.
    pub show_id: String,
    /// Episode title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Position within the show.
    pub episode_number: i64,
    /// Running time in minutes.
    pub duration_minutes: i64,
    /// Audio file URL.
    #[serde(default)]
    pub audio_url: Option<String>,
    /// Video link; only YouTube links are playable.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Publication state.
    #[serde(default)]
    pub status: EpisodeStatus,
    /// Publication timestamp as sent by the API.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Owning user.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Episode {
    /// Whether the episode carries a video link that passes YouTube
    /// validation. Invalid links are kept on the record but never played.
    pub fn has_playable_video(&self) -> bool {
        youtube::is_valid_optional_reference(self.video_url.as_deref())
    }

    /// Canonical watch URL for the episode's video, if any.
    pub fn watch_url(&self) -> Option<String> {
        self.video_url.as_deref().and_then(youtube::extract_watch_url)
    }
}

/// Sponsor buying ad slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advertiser {
    /// Server-assigned identifier.
    pub id: String,
    /// Company name.
    pub company_name: String,
    /// Name of the contact person.
    pub contact_person: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Campaign budget.
    pub budget: f64,
    /// Relationship state.
    #[serde(default)]
    pub status: AdvertiserStatus,
    /// Creation timestamp as sent by the API.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Owning user.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Behaviour shared by the four managed record types.
pub trait Entity: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Collection this record belongs to.
    const KIND: EntityKind;

    /// Editable form record for this entity.
    type Form: EntityForm<Entity = Self>;

    /// Server-assigned identifier.
    fn id(&self) -> &str;

    /// Headline shown on cards and in confirmations.
    fn title(&self) -> &str;
}

impl Entity for Host {
    const KIND: EntityKind = EntityKind::Hosts;

    type Form = crate::forms::HostForm;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }
}

impl Entity for Show {
    const KIND: EntityKind = EntityKind::Shows;

    type Form = crate::forms::ShowForm;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Entity for Episode {
    const KIND: EntityKind = EntityKind::Episodes;

    type Form = crate::forms::EpisodeForm;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Entity for Advertiser {
    const KIND: EntityKind = EntityKind::Advertisers;

    type Form = crate::forms::AdvertiserForm;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.company_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_use_lowercase_wire_values() {
        assert_eq!(serde_json::to_string(&ShowStatus::Paused).unwrap(), "\"paused\"");
        assert_eq!(
            serde_json::from_str::<EpisodeStatus>("\"archived\"").unwrap(),
            EpisodeStatus::Archived
        );
        assert_eq!("Pending".parse::<AdvertiserStatus>(), Ok(AdvertiserStatus::Pending));
        assert_eq!(EpisodeStatus::default(), EpisodeStatus::Draft);
        assert_eq!(ShowStatus::ALL.len(), 3);
    }

    #[test]
    fn unknown_status_is_rejected_with_context() {
        let err = "live".parse::<ShowStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown show status `live`");
    }

    #[test]
    fn episode_parses_with_missing_optionals() {
        let episode: Episode = serde_json::from_value(serde_json::json!({
            "id": "ep-1",
            "show_id": "show-1",
            "title": "Pilot",
            "description": "First one",
            "episode_number": 1,
            "duration_minutes": 45,
            "status": "published"
        }))
        .unwrap();

        assert_eq!(episode.video_url, None);
        assert!(!episode.has_playable_video());
        assert_eq!(episode.watch_url(), None);
    }

    #[test]
    fn episode_with_invalid_video_is_kept_but_not_playable() {
        let mut episode: Episode = serde_json::from_value(serde_json::json!({
            "id": "ep-2",
            "show_id": "show-1",
            "title": "Bonus",
            "description": "",
            "episode_number": 2,
            "duration_minutes": 12,
            "video_url": "https://vimeo.com/1234"
        }))
        .unwrap();
        assert_eq!(episode.status, EpisodeStatus::Draft);
        assert!(!episode.has_playable_video());

        episode.video_url = Some("https://youtu.be/dQw4w9WgXcQ?si=abc".to_string());
        assert!(episode.has_playable_video());
        assert_eq!(
            episode.watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
    }

    #[test]
    fn entity_kinds_line_up() {
        assert_eq!(Host::KIND, EntityKind::Hosts);
        assert_eq!(Advertiser::KIND.collection(), "advertisers");
    }
}
