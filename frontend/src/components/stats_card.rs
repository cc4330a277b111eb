use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub icon: AttrValue,
    pub label: AttrValue,
    pub value: usize,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    let content = html! {
        <>
            <span class="flex h-12 w-12 items-center justify-center rounded-xl bg-violet-100 text-violet-600 dark:bg-violet-900/40 dark:text-violet-300" aria-hidden="true">
                <i class={classes!("fas", props.icon.to_string())}></i>
            </span>
            <div class="text-left">
                <strong class="block text-2xl font-bold">{ props.value }</strong>
                <span class="text-sm text-slate-500 dark:text-slate-400">{ props.label.clone() }</span>
            </div>
        </>
    };

    let card = classes!(
        "flex",
        "items-center",
        "gap-4",
        "rounded-2xl",
        "border",
        "border-slate-200",
        "bg-white",
        "p-5",
        "dark:border-slate-800",
        "dark:bg-slate-900"
    );

    if let Some(onclick) = props.onclick.clone() {
        html! {
            <button type="button" class={classes!(card, "hover:border-violet-400", "transition-colors")} {onclick}>
                { content }
            </button>
        }
    } else {
        html! {
            <div class={card} role="status">
                { content }
            </div>
        }
    }
}
