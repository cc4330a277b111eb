use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub add_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_add: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub on_view_all: Option<Callback<MouseEvent>>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="mb-5 flex flex-wrap items-center justify-between gap-3">
            <h2 class="flex items-center gap-2 text-xl font-semibold">
                <i class={classes!("fas", props.icon.to_string(), "text-violet-500")} aria-hidden="true"></i>
                { props.title.clone() }
            </h2>
            <div class="flex items-center gap-2">
                if let Some(onclick) = props.on_view_all.clone() {
                    <button type="button" class="text-sm font-medium text-violet-600 hover:underline dark:text-violet-400" {onclick}>
                        { "View All" }<i class="fas fa-arrow-right ml-1" aria-hidden="true"></i>
                    </button>
                }
                if let Some(onclick) = props.on_add.clone() {
                    <button type="button" class="inline-flex items-center gap-2 rounded-lg bg-violet-600 px-4 py-2 text-sm font-medium text-white hover:bg-violet-700" {onclick}>
                        <i class="fas fa-plus" aria-hidden="true"></i>
                        { props.add_label.clone().unwrap_or(AttrValue::Static("Add")) }
                    </button>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardActionsProps {
    pub on_edit: Callback<MouseEvent>,
    pub on_delete: Callback<MouseEvent>,
}

#[function_component(CardActions)]
pub fn card_actions(props: &CardActionsProps) -> Html {
    html! {
        <div class="flex gap-1">
            <button
                type="button"
                class="rounded-lg p-2 text-slate-500 hover:bg-slate-100 hover:text-violet-600 dark:hover:bg-slate-800"
                aria-label="Edit"
                onclick={props.on_edit.clone()}
            >
                <i class="fas fa-pen" aria-hidden="true"></i>
            </button>
            <button
                type="button"
                class="rounded-lg p-2 text-slate-500 hover:bg-red-50 hover:text-red-600 dark:hover:bg-red-950"
                aria-label="Delete"
                onclick={props.on_delete.clone()}
            >
                <i class="fas fa-trash" aria-hidden="true"></i>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    /// Wire value, e.g. `published`.
    pub status: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let palette = match props.status.as_str() {
        "active" | "published" => "bg-emerald-100 text-emerald-700 dark:bg-emerald-900/40 dark:text-emerald-300",
        "paused" | "pending" | "draft" => "bg-amber-100 text-amber-700 dark:bg-amber-900/40 dark:text-amber-300",
        _ => "bg-slate-200 text-slate-700 dark:bg-slate-800 dark:text-slate-300",
    };
    html! {
        <span class={classes!("inline-block", "rounded-full", "px-2.5", "py-0.5", "text-xs", "font-medium", palette)}>
            { props.label.clone() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub icon: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="col-span-full flex flex-col items-center gap-2 p-8 text-center text-slate-500">
            <i class={classes!("fas", props.icon.to_string(), "fa-3x", "mb-2")} aria-hidden="true"></i>
            <p>{ props.message.clone() }</p>
            if let Some(detail) = props.detail.clone() {
                <p class="text-sm">{ detail }</p>
            }
        </div>
    }
}

pub const CARD_CLASSES: &str = "flex flex-col gap-3 rounded-2xl border border-slate-200 bg-white p-5 \
                                shadow-sm dark:border-slate-800 dark:bg-slate-900";

pub const GRID_CLASSES: &str = "grid gap-5 sm:grid-cols-2 xl:grid-cols-3";

pub const SUBMIT_CLASSES: &str = "w-full rounded-lg bg-violet-600 px-4 py-2 font-medium text-white \
                                  hover:bg-violet-700 disabled:opacity-60";

/// `(value, label)` pairs for a status select.
pub fn status_options<S: Copy>(
    all: &[S],
    value: fn(S) -> &'static str,
    label: fn(S) -> &'static str,
) -> Vec<(String, String)> {
    all.iter()
        .map(|status| (value(*status).to_string(), label(*status).to_string()))
        .collect()
}
