use podnet_shared::{
    forms::AdvertiserForm,
    models::{Advertiser, AdvertiserStatus},
    overview::{format_budget, limit_items},
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
pub struct AdvertisersSectionProps {
    pub advertisers: Vec<Advertiser>,
    pub actions: SectionActions,
    #[prop_or(AttrValue::Static("Advertisers"))]
    pub title: AttrValue,
    #[prop_or_default]
    pub limit: Option<usize>,
    #[prop_or_default]
    pub on_view_all: Option<Callback<()>>,
}

#[function_component(AdvertisersSection)]
pub fn advertisers_section(props: &AdvertisersSectionProps) -> Html {
    let editor = use_entity_editor::<Advertiser>(props.actions.clone());
    let window = limit_items(&props.advertisers, props.limit);

    let view_all = props
        .on_view_all
        .clone()
        .filter(|_| window.has_more)
        .map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));

    let cards = window.visible.iter().map(|advertiser| {
        let on_edit = {
            let open_edit = editor.open_edit.clone();
            let advertiser = advertiser.clone();
            Callback::from(move |_: MouseEvent| open_edit.emit(advertiser.clone()))
        };
        let on_delete = {
            let remove = editor.remove.clone();
            let advertiser = advertiser.clone();
            Callback::from(move |_: MouseEvent| remove.emit(advertiser.clone()))
        };

        html! {
            <article key={advertiser.id.clone()} class={CARD_CLASSES}>
                <div class="flex items-start justify-between gap-3">
                    <span class="flex h-12 w-12 items-center justify-center rounded-xl bg-amber-100 text-amber-600 dark:bg-amber-900/40 dark:text-amber-300">
                        <i class="fas fa-building fa-lg" aria-hidden="true"></i>
                    </span>
                    <CardActions {on_edit} {on_delete} />
                </div>
                <h3 class="text-lg font-semibold">{ advertiser.company_name.clone() }</h3>
                <p class="text-sm">
                    <i class="fas fa-user mr-2 text-slate-400" aria-hidden="true"></i>
                    { advertiser.contact_person.clone() }
                </p>
                <p class="text-sm">
                    <i class="fas fa-envelope mr-2 text-slate-400" aria-hidden="true"></i>
                    { advertiser.email.clone() }
                </p>
                <p class="text-sm">
                    <i class="fas fa-phone mr-2 text-slate-400" aria-hidden="true"></i>
                    { advertiser.phone.clone() }
                </p>
                <div class="flex items-center justify-between">
                    <strong class="text-lg text-emerald-600 dark:text-emerald-400">
                        { format_budget(advertiser.budget) }
                    </strong>
                    <StatusBadge status={advertiser.status.as_str()} label={advertiser.status.label()} />
                </div>
            </article>
        }
    });

    let dialog = if editor.mode.is_open() {
        let form: &AdvertiserForm = &editor.form;
        let heading = if editor.mode.is_edit() { "Edit Advertiser" } else { "Add New Advertiser" };
        html! {
            <Modal title={heading} on_close={editor.close.clone()}>
                <form class="space-y-4" onsubmit={editor.submit.clone()}>
                    <TextField
                        id="advertiser-company"
                        label="Company Name"
                        value={form.company_name.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut AdvertiserForm, v| f.company_name = v)}
                    />
                    <TextField
                        id="advertiser-contact"
                        label="Contact Person"
                        value={form.contact_person.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut AdvertiserForm, v| f.contact_person = v)}
                    />
                    <TextField
                        id="advertiser-email"
                        label="Email"
                        kind={InputKind::Email}
                        value={form.email.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut AdvertiserForm, v| f.email = v)}
                    />
                    <TextField
                        id="advertiser-phone"
                        label="Phone"
                        kind={InputKind::Tel}
                        value={form.phone.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut AdvertiserForm, v| f.phone = v)}
                    />
                    <TextField
                        id="advertiser-budget"
                        label="Budget ($)"
                        kind={InputKind::Decimal}
                        value={form.budget.clone()}
                        required=true
                        on_change={field_setter(&editor.form, |f: &mut AdvertiserForm, v| f.budget = v)}
                    />
                    <SelectField
                        id="advertiser-status"
                        label="Status"
                        value={form.status.clone()}
                        options={status_options(AdvertiserStatus::ALL, AdvertiserStatus::as_str, AdvertiserStatus::label)}
                        on_change={field_setter(&editor.form, |f: &mut AdvertiserForm, v| f.status = v)}
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
                icon="fa-handshake"
                add_label="Add Advertiser"
                on_add={editor.open_create.clone()}
                on_view_all={view_all}
            />
            <div class={GRID_CLASSES}>
                if window.visible.is_empty() {
                    <EmptyState icon="fa-handshake" message="No advertisers yet" />
                } else {
                    { for cards }
                }
            </div>
            { dialog }
        </section>
    }
}
