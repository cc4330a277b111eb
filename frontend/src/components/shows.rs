use podnet_shared::{
    forms::ShowForm,
    models::{Host, Show, ShowStatus},
    overview::{excerpt, host_name, limit_items},
};
use yew::prelude::*;

use super::{
    form_fields::{InputKind, SelectField, TextField},
    modal::Modal,
    section::{
        status_options, CardActions, EmptyState, SectionHeader, StatusBadge, CARD_CLASSES,
        GRID_CLASSES, SUBMIT_CLASSES,
    },
};
use crate::hooks::{field_setter, use_entity_editor, SectionActions};

#[derive(Properties, PartialEq)]
pub struct ShowsSectionProps {
    pub shows: Vec<Show>,
    /// Every host, for the host select and the "Host:" line.
    pub hosts: Vec<Host>,
    pub actions: SectionActions,
    #[prop_or(AttrValue::Static("Podcast Shows"))]
    pub title: AttrValue,
    #[prop_or_default]
    pub limit: Option<usize>,
    #[prop_or_default]
    pub on_view_all: Option<Callback<()>>,
}

#[function_component(ShowsSection)]
pub fn shows_section(props: &ShowsSectionProps) -> Html {
    let editor = use_entity_editor::<Show>(props.actions.clone());
    let window = limit_items(&props.shows, props.limit);
    let compact = props.limit.is_some();

    let view_all = props
        .on_view_all
        .clone()
        .filter(|_| window.has_more)
        .map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));

    let cards = window.visible.iter().map(|show| {
        let on_edit = {
            let open_edit = editor.open_edit.clone();
            let show = show.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(show.clone()))
        };
        let on_delete = {
            let remove = editor.remove.clone();
            let show = show.clone();
            Callback::from(move |_: MouseEvent| remove.emit(show.clone()))
        };
        let description = if compact {
            excerpt(&show.description)
        } else {
            show.description.clone()
        };

        html! {
            <article key={show.id.clone()} class={CARD_CLASSES}>
                <div class="flex items-start justify-between gap-3">
                    <span class="flex h-12 w-12 items-center justify-center rounded-xl bg-fuchsia-100 text-fuchsia-600 dark:bg-fuchsia-900/40 dark:text-fuchsia-300">
                        <i class="fas fa-podcast fa-lg" aria-hidden="true"></i>
                    </span>
                    <CardActions {on_edit} {on_delete} />
                </div>
                <h3 class="text-lg font-semibold">{ show.title.clone() }</h3>
                <p class="text-sm text-slate-600 dark:text-slate-400">{ description }</p>
                <p class="text-sm">
                    <span class="text-slate-500">{ "Host: " }</span>
                    { host_name(&props.hosts, &show.host_id).to_string() }
                </p>
                <div class="flex flex-wrap items-center gap-2">
                    <span class="rounded-full bg-violet-100 px-2.5 py-0.5 text-xs font-medium text-violet-700 dark:bg-violet-900/40 dark:text-violet-300">
                        { show.category.clone() }
                    </span>
                    <StatusBadge status={show.status.as_str()} label={show.status.label()} />
                </div>
            </article>
        }
    });

    let dialog = if editor.mode.is_open() {
        let form: &ShowForm = &editor.form;
        let heading = if editor.mode.is_edit() { "Edit Show" } else { "Add New Show" };
        let host_options: Vec<(String, String)> = props
            .hosts
            .iter()
            .map(|host| (host.id.clone(), host.name.clone()))
            .collect();
        html! {
            <Modal title={heading} on_close={editor.close.clone()}>
                <form class="space-y-4" onsubmit={editor.submit.clone()}>
                    <TextField
                        id="show-title"
                        label="Title"
                        value={form.title.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut ShowForm, v| f.title = v)}
                    />
                    <TextField
                        id="show-description"
                        label="Description"
                        multiline=true
                        value={form.description.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut ShowForm, v| f.description = v)}
                    />
                    <SelectField
                        id="show-host"
                        label="Host"
                        value={form.host_id.clone()}
                        options={host_options}
                        placeholder="Select a host"
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut ShowForm, v| f.host_id = v)}
                    />
                    <TextField
                        id="show-category"
                        label="Category"
                        value={form.category.clone()}
                        required=true
                        placeholder="e.g. Business, Technology"
                        on_change={field_setter(&editor.form, |f: &mut ShowForm, v| f.category = v)}
                    />
                    <TextField
                        id="show-cover"
                        label="Cover Image URL"
                        kind={InputKind::Link}
                        value={form.cover_image_url.clone()}
                        on_change={field_setter(&editor.form, |f: &mut ShowForm, v| f.cover_image_url = v)}
                    />
                    <SelectField
                        id="show-status"
                        label="Status"
                        value={form.status.clone()}
                        options={status_options(ShowStatus::ALL, ShowStatus::as_str, ShowStatus::label)}
                        on_change={field_setter(&editor.form, |f: &mut ShowForm, v| f.status = v)}
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
                icon="fa-podcast"
                add_label="Add Show"
                on_add={editor.open_create.clone()}
                on_view_all={view_all}
            />
            <div class={GRID_CLASSES}>
                if window.visible.is_empty() {
                    <EmptyState icon="fa-podcast" message="No shows yet" />
                } else {
                    { for cards }
                }
            </div>
            { dialog }
        </section>
    }
}
