use podnet_shared::{
    forms::EpisodeForm,
    models::{Episode, EpisodeStatus, Show},
    overview::{limit_items, playable_episodes, show_title},
};
use yew::prelude::*;

use super::{
    form_fields::{InputKind, SelectField, TextField},
    modal::Modal,
    section::{
        status_options, CardActions, EmptyState, SectionHeader, StatusBadge, CARD_CLASSES,
        GRID_CLASSES, SUBMIT_CLASSES,
    },
    video_button::{VideoButton, VideoHint},
};
use crate::hooks::{field_setter, use_entity_editor, SectionActions};

#[derive(Properties, PartialEq)]
pub struct EpisodesSectionProps {
    /// Every episode; only those with a playable video are listed.
    pub episodes: Vec<Episode>,
    pub shows: Vec<Show>,
    pub actions: SectionActions,
    #[prop_or(AttrValue::Static("Podcast Episodes"))]
    pub title: AttrValue,
    #[prop_or_default]
    pub limit: Option<usize>,
    #[prop_or_default]
    pub on_view_all: Option<Callback<()>>,
}

#[function_component(EpisodesSection)]
pub fn episodes_section(props: &EpisodesSectionProps) -> Html {
    let editor = use_entity_editor::<Episode>(props.actions.clone());
    let playable = use_memo(props.episodes.clone(), |episodes| playable_episodes(episodes));
    let window = limit_items(playable.as_slice(), props.limit);

    let view_all = props
        .on_view_all
        .clone()
        .filter(|_| window.has_more)
        .map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));

    let cards = window.visible.iter().map(|episode| {
        let on_edit = {
            let open_edit = editor.open_edit.clone();
            let episode = episode.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(episode.clone()))
        };
        let on_delete = {
            let remove = editor.remove.clone();
            let episode = episode.clone();
            Callback::from(move |_: MouseEvent| remove.emit(episode.clone()))
        };
        let thumbnail = episode
            .thumbnail_url
            .clone()
            .filter(|url| !url.is_empty());

        html! {
            <article key={episode.id.clone()} class={CARD_CLASSES}>
                <div class="flex aspect-video items-center justify-center overflow-hidden rounded-xl bg-slate-100 dark:bg-slate-800">
                    if let Some(src) = thumbnail {
                        <img {src} alt={episode.title.clone()} class="h-full w-full object-cover" />
                    } else {
                        <i class="fas fa-microphone fa-2x text-slate-400" aria-hidden="true"></i>
                    }
                </div>
                <div class="flex items-start justify-between gap-3">
                    <h3 class="text-lg font-semibold">
                        { format!("Ep. {}: {}", episode.episode_number, episode.title) }
                    </h3>
                    <CardActions {on_edit} {on_delete} />
                </div>
                <p class="text-sm text-slate-500">{ show_title(&props.shows, &episode.show_id).to_string() }</p>
                <p class="text-sm text-slate-600 dark:text-slate-400">{ episode.description.clone() }</p>
                <div class="flex flex-wrap items-center gap-3 text-sm">
                    <span><i class="fas fa-clock mr-1" aria-hidden="true"></i>
                        { format!("{} minutes", episode.duration_minutes) }
                    </span>
                    <StatusBadge status={episode.status.as_str()} label={episode.status.label()} />
                </div>
                <VideoButton video_url={episode.video_url.clone()} />
            </article>
        }
    });

    let dialog = if editor.mode.is_open() {
        let form: &EpisodeForm = &editor.form;
        let heading = if editor.mode.is_edit() { "Edit Episode" } else { "Add New Episode" };
        let show_options: Vec<(String, String)> = props
            .shows
            .iter()
            .map(|show| (show.id.clone(), show.title.clone()))
            .collect();
        let video_hint = html! {
            <>
                <VideoHint valid={form.video_hint()} />
                <p class="text-xs text-slate-500">
                    { "Supported formats: youtube.com/watch?v=..., youtu.be/..., youtube.com/embed/..." }
                </p>
            </>
        };
        html! {
            <Modal title={heading} on_close={editor.close.clone()}>
                <form class="space-y-4" onsubmit={editor.submit.clone()}>
                    <SelectField
                        id="episode-show"
                        label="Show"
                        value={form.show_id.clone()}
                        options={show_options}
                        placeholder="Select a show"
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut EpisodeForm, v| f.show_id = v)}
                    />
                    <TextField
                        id="episode-title"
                        label="Title"
                        value={form.title.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut EpisodeForm, v| f.title = v)}
                    />
                    <TextField
                        id="episode-description"
                        label="Description"
                        multiline=true
                        value={form.description.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut EpisodeForm, v| f.description = v)}
                    />
                    <div class="grid grid-cols-2 gap-4">
                        <TextField
                            id="episode-number"
                            label="Episode Number"
                            kind={InputKind::Integer}
                            value={form.episode_number.clone()}
                            required=true
                            on_change={field_setter(&editor.form, |f: &mut EpisodeForm, v| f.episode_number = v)}
                        />
                        <TextField
                            id="episode-duration"
                            label="Duration (minutes)"
                            kind={InputKind::Integer}
                            value={form.duration_minutes.clone()}
                            required=true
                            on_change={field_setter(&editor.form, |f: &mut EpisodeForm, v| f.duration_minutes = v)}
                        />
                    </div>
                    <TextField
                        id="episode-audio"
                        label="Audio URL"
                        kind={InputKind::Link}
                        value={form.audio_url.clone()}
                        on_change={field_setter(&editor.form, |f: &mut EpisodeForm, v| f.audio_url = v)}
                    />
                    <TextField
                        id="episode-video"
                        label="YouTube Video URL (Required for display)"
                        kind={InputKind::Link}
                        value={form.video_url.clone()}
                        placeholder="https://youtube.com/watch?v=dQw4w9WgXcQ or https://youtu.be/dQw4w9WgXcQ"
                        hint={video_hint}
                        on_change={field_setter(&editor.form, |f: &mut EpisodeForm, v| f.video_url = v)}
                    />
                    <TextField
                        id="episode-thumbnail"
                        label="Thumbnail URL"
                        kind={InputKind::Link}
                        value={form.thumbnail_url.clone()}
                        on_change={field_setter(&editor.form, |f: &mut EpisodeForm, v| f.thumbnail_url = v)}
                    />
                    <SelectField
                        id="episode-status"
                        label="Status"
                        value={form.status.clone()}
                        options={status_options(EpisodeStatus::ALL, EpisodeStatus::as_str, EpisodeStatus::label)}
                        on_change={field_setter(&editor.form, |f: &mut EpisodeForm, v| f.status = v)}
                    />
                    <button type="submit" class={SUBMIT_CLASSES} disabled={editor.saving}>
                        { if editor.mode.is_edit() { "Update" } else { "Create" } }
                    </button>
                </form>
            </Modal>
        }
    } else {
        Html::default()
    };

    html! {
        <section>
            <SectionHeader
                title={props.title.clone()}
                icon="fa-microphone"
                add_label="Add Episode"
                on_add={editor.open_create.clone()}
                on_view_all={view_all}
            />
            <div class={GRID_CLASSES}>
                if window.visible.is_empty() {
                    <EmptyState
                        icon="fa-video"
                        message="No episodes with valid YouTube videos found"
                        detail="Only episodes with YouTube video links are displayed"
                    />
                } else {
                    { for cards }
                }
            </div>
            { dialog }
        </section>
    }
}
