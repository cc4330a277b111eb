use anyhow::Result;
use podnet_shared::{
    coerce::{parse_float, parse_int},
    forms::{to_form_state, to_submission_payload, AdvertiserForm, EpisodeForm, HostForm, ShowForm},
    models::{Advertiser, Entity, Episode, Host, Show},
};
use tracing::{info, warn};

use super::{data, print_json, AppState};
use crate::cli::{
    AdvertiserCommands, AdvertiserFields, EpisodeCommands, EpisodeFields, HostCommands,
    HostFields, ShowCommands, ShowFields,
};

/// Flag set that edits one kind of form record.
trait ApplyFields {
    type Entity: Entity;

    /// Overwrites the fields given on the command line.
    fn apply(self, form: &mut <Self::Entity as Entity>::Form);

    /// Warns about values that will be sent but are probably not intended.
    fn review(_form: &<Self::Entity as Entity>::Form) {}
}

fn set(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl ApplyFields for HostFields {
    type Entity = Host;

    fn apply(self, form: &mut HostForm) {
        set(&mut form.name, self.name);
        set(&mut form.bio, self.bio);
        set(&mut form.email, self.email);
        set(&mut form.image_url, self.image_url);
    }
}

impl ApplyFields for ShowFields {
    type Entity = Show;

    fn apply(self, form: &mut ShowForm) {
        set(&mut form.title, self.title);
        set(&mut form.description, self.description);
        set(&mut form.host_id, self.host_id);
        set(&mut form.category, self.category);
        set(&mut form.cover_image_url, self.cover_image_url);
        set(&mut form.status, self.status);
    }
}

impl ApplyFields for EpisodeFields {
    type Entity = Episode;

    fn apply(self, form: &mut EpisodeForm) {
        set(&mut form.show_id, self.show_id);
        set(&mut form.title, self.title);
        set(&mut form.description, self.description);
        set(&mut form.episode_number, self.episode_number);
        set(&mut form.duration_minutes, self.duration_minutes);
        set(&mut form.audio_url, self.audio_url);
        set(&mut form.video_url, self.video_url);
        set(&mut form.thumbnail_url, self.thumbnail_url);
        set(&mut form.status, self.status);
    }

    fn review(form: &EpisodeForm) {
        if form.video_hint() == Some(false) {
            warn!(
                video_url = %form.video_url,
                "not a YouTube link; the episode is saved but will not be listed as playable"
            );
        }
        if parse_int(&form.episode_number).is_nan() {
            warn!(value = %form.episode_number, "episode number is not a number; sent as null");
        }
        if parse_int(&form.duration_minutes).is_nan() {
            warn!(value = %form.duration_minutes, "duration is not a number; sent as null");
        }
    }
}

impl ApplyFields for AdvertiserFields {
    type Entity = Advertiser;

    fn apply(self, form: &mut AdvertiserForm) {
        set(&mut form.company_name, self.company_name);
        set(&mut form.contact_person, self.contact_person);
        set(&mut form.email, self.email);
        set(&mut form.phone, self.phone);
        set(&mut form.budget, self.budget);
        set(&mut form.status, self.status);
    }

    fn review(form: &AdvertiserForm) {
        if parse_float(&form.budget).is_nan() {
            warn!(value = %form.budget, "budget is not a number; sent as null");
        }
    }
}

async fn list<E: Entity>(state: &mut AppState) -> Result<()> {
    state.require_login()?;
    let result = state.client.list::<E>().await;
    let items = state.checked(result)?;
    print_json(&items)
}

async fn get<E: Entity>(state: &mut AppState, id: &str) -> Result<()> {
    state.require_login()?;
    let result = state.client.get::<E>(id).await;
    let item = state.checked(result)?;
    print_json(&item)
}

async fn create<F: ApplyFields>(state: &mut AppState, fields: F) -> Result<()> {
    state.require_login()?;
    let mut form = <<F::Entity as Entity>::Form as Default>::default();
    fields.apply(&mut form);
    F::review(&form);

    let payload = to_submission_payload(&form);
    let result = state.client.create::<F::Entity>(&payload).await;
    let created = state.checked(result)?;
    info!(kind = <F::Entity as Entity>::KIND.singular(), id = created.id(), "created");
    print_json(&created)
}

async fn update<F: ApplyFields>(state: &mut AppState, id: &str, fields: F) -> Result<()> {
    state.require_login()?;
    let result = state.client.get::<F::Entity>(id).await;
    let current = state.checked(result)?;

    let mut form = to_form_state(&current);
    fields.apply(&mut form);
    F::review(&form);

    let payload = to_submission_payload(&form);
    let result = state.client.update::<F::Entity>(id, &payload).await;
    let updated = state.checked(result)?;
    info!(kind = <F::Entity as Entity>::KIND.singular(), id = updated.id(), "updated");
    print_json(&updated)
}

async fn delete<E: Entity>(state: &mut AppState, id: &str) -> Result<()> {
    state.require_login()?;
    let result = state.client.delete(E::KIND, id).await;
    let response = state.checked(result)?;
    info!(kind = E::KIND.singular(), id, "deleted");
    print_json(&response)
}

/// Uploads `--image-file` first so the stored URL lands in the form.
async fn with_uploaded_image(state: &mut AppState, mut fields: HostFields) -> Result<HostFields> {
    if let Some(path) = fields.image_file.take() {
        state.require_login()?;
        let uploaded = data::upload(state, &path).await?;
        fields.image_url = Some(uploaded.resolved);
    }
    Ok(fields)
}

pub async fn run_hosts(state: &mut AppState, command: HostCommands) -> Result<()> {
    match command {
        HostCommands::List => list::<Host>(state).await,
        HostCommands::Get {
            id,
        } => get::<Host>(state, &id).await,
        HostCommands::Create {
            fields,
        } => {
            let fields = with_uploaded_image(state, fields).await?;
            create(state, fields).await
        },
        HostCommands::Update {
            id,
            fields,
        } => {
            let fields = with_uploaded_image(state, fields).await?;
            update(state, &id, fields).await
        },
        HostCommands::Delete {
            id,
        } => delete::<Host>(state, &id).await,
    }
}

pub async fn run_shows(state: &mut AppState, command: ShowCommands) -> Result<()> {
    match command {
        ShowCommands::List => list::<Show>(state).await,
        ShowCommands::Get {
            id,
        } => get::<Show>(state, &id).await,
        ShowCommands::Create {
            fields,
        } => create(state, fields).await,
        ShowCommands::Update {
            id,
            fields,
        } => update(state, &id, fields).await,
        ShowCommands::Delete {
            id,
        } => delete::<Show>(state, &id).await,
    }
}

pub async fn run_episodes(state: &mut AppState, command: EpisodeCommands) -> Result<()> {
    match command {
        EpisodeCommands::List {
            show_id: None,
        } => list::<Episode>(state).await,
        EpisodeCommands::List {
            show_id: Some(show_id),
        } => {
            state.require_login()?;
            let result = state.client.list_episodes_of_show(&show_id).await;
            let episodes = state.checked(result)?;
            print_json(&episodes)
        },
        EpisodeCommands::Get {
            id,
        } => get::<Episode>(state, &id).await,
        EpisodeCommands::Create {
            fields,
        } => create(state, fields).await,
        EpisodeCommands::Update {
            id,
            fields,
        } => update(state, &id, fields).await,
        EpisodeCommands::Delete {
            id,
        } => delete::<Episode>(state, &id).await,
    }
}

pub async fn run_advertisers(state: &mut AppState, command: AdvertiserCommands) -> Result<()> {
    match command {
        AdvertiserCommands::List => list::<Advertiser>(state).await,
        AdvertiserCommands::Get {
            id,
        } => get::<Advertiser>(state, &id).await,
        AdvertiserCommands::Create {
            fields,
        } => create(state, fields).await,
        AdvertiserCommands::Update {
            id,
            fields,
        } => update(state, &id, fields).await,
        AdvertiserCommands::Delete {
            id,
        } => delete::<Advertiser>(state, &id).await,
    }
}
