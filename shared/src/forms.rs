//! Typed form records for the create/edit dialogs.
//!
//! Every dialog edits an all-text record (the values of its inputs). Opening
//! an edit dialog converts the stored entity into that record; submitting it
//! converts the record into the JSON payload sent to the API. Numeric fields
//! are coerced with [`crate::coerce`] and never block submission.

use serde::Serialize;

use crate::{
    coerce::{parse_float, parse_int, Coerced},
    models::{
        Advertiser, AdvertiserStatus, Entity, Episode, EpisodeStatus, Host, Show, ShowStatus,
    },
};

/// Conversion between a stored entity and its editable form record.
pub trait EntityForm: Clone + PartialEq + Default + 'static {
    /// Entity edited by this form.
    type Entity: Entity;
    /// Body sent on create and update.
    type Payload: Serialize + 'static;

    /// Form state for editing an existing entity.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Payload ready for submission.
    fn to_payload(&self) -> Self::Payload;
}

/// Form state for editing `entity`. Numbers become their decimal text and
/// missing optional values become empty strings.
pub fn to_form_state<E: Entity>(entity: &E) -> E::Form {
    <E::Form as EntityForm>::from_entity(entity)
}

/// Submission payload for a filled-in form.
pub fn to_submission_payload<F: EntityForm>(form: &F) -> F::Payload {
    form.to_payload()
}

fn text_or_empty(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Host dialog fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostForm {
    /// Display name.
    pub name: String,
    /// Biography.
    pub bio: String,
    /// Contact email.
    pub email: String,
    /// Portrait URL, possibly replaced by an upload.
    pub image_url: String,
}

/// Host create/update body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostPayload {
    /// Display name.
    pub name: String,
    /// Biography.
    pub bio: String,
    /// Contact email.
    pub email: String,
    /// Portrait URL; empty when none was chosen.
    pub image_url: String,
}

impl EntityForm for HostForm {
    type Entity = Host;
    type Payload = HostPayload;

    fn from_entity(host: &Host) -> Self {
        Self {
            name: host.name.clone(),
            bio: host.bio.clone(),
            email: host.email.clone(),
            image_url: text_or_empty(host.image_url.as_ref()),
        }
    }

    fn to_payload(&self) -> HostPayload {
        HostPayload {
            name: self.name.clone(),
            bio: self.bio.clone(),
            email: self.email.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Show dialog fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowForm {
    /// Show title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Selected host id.
    pub host_id: String,
    /// Category.
    pub category: String,
    /// Cover art URL.
    pub cover_image_url: String,
    /// Selected status value.
    pub status: String,
}

impl Default for ShowForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            host_id: String::new(),
            category: String::new(),
            cover_image_url: String::new(),
            status: ShowStatus::default().as_str().to_string(),
        }
    }
}

/// Show create/update body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowPayload {
    /// Show title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Presenting host id.
    pub host_id: String,
    /// Category.
    pub category: String,
    /// Cover art URL.
    pub cover_image_url: String,
    /// Status value as selected.
    pub status: String,
}

impl EntityForm for ShowForm {
    type Entity = Show;
    type Payload = ShowPayload;

    fn from_entity(show: &Show) -> Self {
        Self {
            title: show.title.clone(),
            description: show.description.clone(),
            host_id: show.host_id.clone(),
            category: show.category.clone(),
            cover_image_url: text_or_empty(show.cover_image_url.as_ref()),
            status: show.status.as_str().to_string(),
        }
    }

    fn to_payload(&self) -> ShowPayload {
        ShowPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            host_id: self.host_id.clone(),
            category: self.category.clone(),
            cover_image_url: self.cover_image_url.clone(),
            status: self.status.clone(),
        }
    }
}

/// Episode dialog fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeForm {
    /// Selected show id.
    pub show_id: String,
    /// Episode title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Episode number as typed.
    pub episode_number: String,
    /// Duration in minutes as typed.
    pub duration_minutes: String,
    /// Audio URL.
    pub audio_url: String,
    /// Video link; validity is only hinted, never enforced.
    pub video_url: String,
    /// Thumbnail URL.
    pub thumbnail_url: String,
    /// Selected status value.
    pub status: String,
}

impl Default for EpisodeForm {
    fn default() -> Self {
        Self {
            show_id: String::new(),
            title: String::new(),
            description: String::new(),
            episode_number: String::new(),
            duration_minutes: String::new(),
            audio_url: String::new(),
            video_url: String::new(),
            thumbnail_url: String::new(),
            status: EpisodeStatus::default().as_str().to_string(),
        }
    }
}

impl EpisodeForm {
    /// Hint for the video field: `None` while empty, otherwise whether the
    /// link is a playable YouTube reference.
    pub fn video_hint(&self) -> Option<bool> {
        (!self.video_url.is_empty()).then(|| crate::youtube::is_valid_reference(&self.video_url))
    }
}

/// Episode create/update body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodePayload {
    /// Parent show id.
    pub show_id: String,
    /// Episode title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Coerced episode number.
    pub episode_number: Coerced<i64>,
    /// Coerced duration in minutes.
    pub duration_minutes: Coerced<i64>,
    /// Audio URL.
    pub audio_url: String,
    /// Video link, forwarded even when it is not a valid YouTube link.
    pub video_url: String,
    /// Thumbnail URL.
    pub thumbnail_url: String,
    /// Status value as selected.
    pub status: String,
}

impl EntityForm for EpisodeForm {
    type Entity = Episode;
    type Payload = EpisodePayload;

    fn from_entity(episode: &Episode) -> Self {
        Self {
            show_id: episode.show_id.clone(),
            title: episode.title.clone(),
            description: episode.description.clone(),
            episode_number: episode.episode_number.to_string(),
            duration_minutes: episode.duration_minutes.to_string(),
            audio_url: text_or_empty(episode.audio_url.as_ref()),
            video_url: text_or_empty(episode.video_url.as_ref()),
            thumbnail_url: text_or_empty(episode.thumbnail_url.as_ref()),
            status: episode.status.as_str().to_string(),
        }
    }

    fn to_payload(&self) -> EpisodePayload {
        EpisodePayload {
            show_id: self.show_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            episode_number: parse_int(&self.episode_number),
            duration_minutes: parse_int(&self.duration_minutes),
            audio_url: self.audio_url.clone(),
            video_url: self.video_url.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            status: self.status.clone(),
        }
    }
}

/// Advertiser dialog fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertiserForm {
    /// Company name.
    pub company_name: String,
    /// Contact person.
    pub contact_person: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Budget as typed.
    pub budget: String,
    /// Selected status value.
    pub status: String,
}

impl Default for AdvertiserForm {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            budget: String::new(),
            status: AdvertiserStatus::default().as_str().to_string(),
        }
    }
}

/// Advertiser create/update body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvertiserPayload {
    /// Company name.
    pub company_name: String,
    /// Contact person.
    pub contact_person: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Coerced budget.
    pub budget: Coerced<f64>,
    /// Status value as selected.
    pub status: String,
}

impl EntityForm for AdvertiserForm {
    type Entity = Advertiser;
    type Payload = AdvertiserPayload;

    fn from_entity(advertiser: &Advertiser) -> Self {
        Self {
            company_name: advertiser.company_name.clone(),
            contact_person: advertiser.contact_person.clone(),
            email: advertiser.email.clone(),
            phone: advertiser.phone.clone(),
            budget: advertiser.budget.to_string(),
            status: advertiser.status.as_str().to_string(),
        }
    }

    fn to_payload(&self) -> AdvertiserPayload {
        AdvertiserPayload {
            company_name: self.company_name.clone(),
            contact_person: self.contact_person.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            budget: parse_float(&self.budget),
            status: self.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn episode() -> Episode {
        Episode {
            id: "ep-1".to_string(),
            show_id: "show-1".to_string(),
            title: "The Ranveer Show #1".to_string(),
            description: "Fitness and mindset".to_string(),
            episode_number: 12,
            duration_minutes: 45,
            audio_url: None,
            video_url: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
            thumbnail_url: None,
            status: EpisodeStatus::Published,
            published_at: Some("2025-01-01T00:00:00Z".to_string()),
            user_id: Some("user-1".to_string()),
        }
    }

    fn advertiser(budget: f64) -> Advertiser {
        Advertiser {
            id: "ad-1".to_string(),
            company_name: "Zerodha".to_string(),
            contact_person: "Nithin".to_string(),
            email: "ads@zerodha.com".to_string(),
            phone: "+91 00000 00000".to_string(),
            budget,
            status: AdvertiserStatus::Pending,
            created_at: None,
            user_id: None,
        }
    }

    #[test]
    fn episode_form_state_stringifies_numbers_and_blanks_missing_urls() {
        let form = to_form_state(&episode());
        assert_eq!(form.episode_number, "12");
        assert_eq!(form.duration_minutes, "45");
        assert_eq!(form.audio_url, "");
        assert_eq!(form.thumbnail_url, "");
        assert_eq!(form.video_url, "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(form.status, "published");
    }

    #[test]
    fn numeric_fields_round_trip() {
        let original = episode();
        let payload = to_submission_payload(&to_form_state(&original));
        assert_eq!(payload.episode_number, Coerced::Value(original.episode_number));
        assert_eq!(payload.duration_minutes, Coerced::Value(original.duration_minutes));

        for budget in [0.0, 5000.0, 1234.56, 0.1, 2.5e9, 1e-7] {
            let payload = to_submission_payload(&to_form_state(&advertiser(budget)));
            assert_eq!(payload.budget, Coerced::Value(budget), "{budget}");
        }
    }

    #[test]
    fn malformed_numbers_are_forwarded_as_null() {
        let form = EpisodeForm {
            episode_number: "three".to_string(),
            duration_minutes: "".to_string(),
            ..to_form_state(&episode())
        };
        let payload = serde_json::to_value(to_submission_payload(&form)).unwrap();
        assert_eq!(payload["episode_number"], json!(null));
        assert_eq!(payload["duration_minutes"], json!(null));
        assert_eq!(payload["title"], json!("The Ranveer Show #1"));

        let form = AdvertiserForm {
            budget: "lots".to_string(),
            ..AdvertiserForm::default()
        };
        assert!(form.to_payload().budget.is_nan());
    }

    #[test]
    fn invalid_video_link_does_not_block_submission() {
        let form = EpisodeForm {
            video_url: "https://vimeo.com/1234".to_string(),
            ..to_form_state(&episode())
        };
        assert_eq!(form.video_hint(), Some(false));
        assert_eq!(form.to_payload().video_url, "https://vimeo.com/1234");
        assert_eq!(EpisodeForm::default().video_hint(), None);
        assert_eq!(to_form_state(&episode()).video_hint(), Some(true));
    }

    #[test]
    fn defaults_match_empty_dialogs() {
        assert_eq!(ShowForm::default().status, "active");
        assert_eq!(EpisodeForm::default().status, "draft");
        assert_eq!(AdvertiserForm::default().status, "active");
        assert_eq!(HostForm::default().image_url, "");
    }

    #[test]
    fn text_fields_pass_through_unchanged() {
        let host = Host {
            id: "h-1".to_string(),
            name: "  Raj Shamani ".to_string(),
            bio: "Figuring Out".to_string(),
            email: "raj@example.com".to_string(),
            image_url: None,
            created_at: None,
            user_id: None,
        };
        let payload = to_submission_payload(&to_form_state(&host));
        assert_eq!(payload.name, "  Raj Shamani ");
        assert_eq!(payload.image_url, "");

        let show = Show {
            id: "s-1".to_string(),
            title: "WTF".to_string(),
            description: "Conversations".to_string(),
            host_id: "h-2".to_string(),
            category: "Business".to_string(),
            cover_image_url: Some("https://img.example/wtf.png".to_string()),
            status: ShowStatus::Paused,
            created_at: None,
            user_id: None,
        };
        let payload = serde_json::to_value(to_submission_payload(&to_form_state(&show))).unwrap();
        assert_eq!(
            payload,
            json!({
                "title": "WTF",
                "description": "Conversations",
                "host_id": "h-2",
                "category": "Business",
                "cover_image_url": "https://img.example/wtf.png",
                "status": "paused"
            })
        );
    }
}
