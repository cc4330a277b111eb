use podnet_shared::{
    forms::HostForm,
    models::Host,
    overview::{excerpt, limit_items},
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{
    form_fields::{InputKind, TextField},
    host_avatar::HostAvatar,
    modal::Modal,
    section::{CardActions, EmptyState, SectionHeader, CARD_CLASSES, GRID_CLASSES, SUBMIT_CLASSES},
};
use crate::{
    api,
    config::api_config,
    hooks::{field_setter, use_entity_editor, FormAction, SectionActions},
};

const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

#[derive(Properties, PartialEq)]
pub struct HostsSectionProps {
    pub hosts: Vec<Host>,
    pub actions: SectionActions,
    #[prop_or(AttrValue::Static("Podcast Hosts"))]
    pub title: AttrValue,
    /// Cards shown before "View All"; `None` lists everything.
    #[prop_or_default]
    pub limit: Option<usize>,
    #[prop_or_default]
    pub on_view_all: Option<Callback<()>>,
}

#[function_component(HostsSection)]
pub fn hosts_section(props: &HostsSectionProps) -> Html {
    let editor = use_entity_editor::<Host>(props.actions.clone());
    let uploading = use_state(|| false);
    let upload_error = use_state(|| None::<String>);
    let window = limit_items(&props.hosts, props.limit);
    let compact = props.limit.is_some();

    let on_image = {
        let form = editor.form.clone();
        let uploading = uploading.clone();
        let upload_error = upload_error.clone();
        let actions = props.actions.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if !file.type_().starts_with("image/") {
                upload_error.set(Some("Please select an image file".to_string()));
                return;
            }
            if file.size() > MAX_IMAGE_BYTES {
                upload_error.set(Some("Image size must be less than 5MB".to_string()));
                return;
            }

            upload_error.set(None);
            uploading.set(true);
            let form = form.clone();
            let uploading = uploading.clone();
            let actions = actions.clone();
            spawn_local(async move {
                let result = api::upload_host_image(&actions.token, &file).await;
                uploading.set(false);
                match result {
                    Ok(uploaded) => {
                        let url = api_config()
                            .resolve_image_url(Some(&uploaded.url))
                            .unwrap_or(uploaded.url);
                        form.dispatch(FormAction::Set(|f: &mut HostForm, v| f.image_url = v, url));
                    },
                    Err(err) => actions.on_error.emit(err),
                }
            });
        })
    };

    let view_all = props
        .on_view_all
        .clone()
        .filter(|_| window.has_more)
        .map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));

    let cards = window.visible.iter().map(|host| {
        let on_edit = {
            let open_edit = editor.open_edit.clone();
            let host = host.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(host.clone()))
        };
        let on_delete = {
            let remove = editor.remove.clone();
            let host = host.clone();
            Callback::from(move |_: MouseEvent| remove.emit(host.clone()))
        };
        let bio = if compact { excerpt(&host.bio) } else { host.bio.clone() };

        html! {
            <article key={host.id.clone()} class={CARD_CLASSES}>
                <div class="flex items-start justify-between gap-3">
                    <HostAvatar name={host.name.clone()} image_url={host.image_url.clone()} />
                    <CardActions {on_edit} {on_delete} />
                </div>
                <h3 class="text-lg font-semibold">{ host.name.clone() }</h3>
                <p class="text-sm text-slate-600 dark:text-slate-400">{ bio }</p>
                <p class="text-sm text-violet-600 dark:text-violet-400">
                    <i class="fas fa-envelope mr-2" aria-hidden="true"></i>{ host.email.clone() }
                </p>
            </article>
        }
    });

    let dialog = if editor.mode.is_open() {
        let form: &HostForm = &editor.form;
        let heading = if editor.mode.is_edit() { "Edit Host" } else { "Add New Host" };
        let preview = api_config().resolve_image_url(Some(&form.image_url));
        html! {
            <Modal title={heading} on_close={editor.close.clone()}>
                <form class="space-y-4" onsubmit={editor.submit.clone()}>
                    <TextField
                        id="host-name"
                        label="Name"
                        value={form.name.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut HostForm, v| f.name = v)}
                    />
                    <TextField
                        id="host-bio"
                        label="Bio"
                        multiline=true
                        value={form.bio.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut HostForm, v| f.bio = v)}
                    />
                    <TextField
                        id="host-email"
                        label="Email"
                        kind={InputKind::Email}
                        value={form.email.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut HostForm, v| f.email = v)}
                    />
                    <div class="space-y-2">
                        <label for="host-image" class="block text-sm font-medium">{ "Profile Image" }</label>
                        if let Some(src) = preview {
                            <img {src} alt="Preview" class="h-20 w-20 rounded-full object-cover" />
                        }
                        <input
                            id="host-image"
                            type="file"
                            accept="image/*"
                            class="block w-full text-sm"
                            disabled={*uploading}
                            onchange={on_image}
                        />
                        if *uploading {
                            <p class="text-xs text-slate-500">{ "Uploading..." }</p>
                        }
                        if let Some(message) = (*upload_error).clone() {
                            <p class="text-xs text-red-600">{ message }</p>
                        }
                    </div>
                    <TextField
                        id="host-image-url"
                        label="Or paste an image URL"
                        kind={InputKind::Link}
                        value={form.image_url.clone()}
                        on_change={field_setter(&editor.form, |f: &mut HostForm, v| f.image_url = v)}
                    />
                    <button type="submit" class={SUBMIT_CLASSES} disabled={editor.saving || *uploading}>
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
                icon="fa-user"
                add_label="Add Host"
                on_add={editor.open_create.clone()}
                on_view_all={view_all}
            />
            <div class={GRID_CLASSES}>
                if window.visible.is_empty() {
                    <EmptyState icon="fa-user" message="No hosts yet" />
                } else {
                    { for cards }
                }
            </div>
            { dialog }
        </section>
    }
}
