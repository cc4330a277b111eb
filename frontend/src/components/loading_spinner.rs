use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(false)]
    pub fullscreen: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let label = props.label.clone().unwrap_or_else(|| AttrValue::from("Loading..."));

    let spinner = html! {
        <div
            class={classes!("flex", "flex-col", "items-center", "justify-center", "gap-3", "p-6")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                class={classes!(
                    "h-10",
                    "w-10",
                    "rounded-full",
                    "border-4",
                    "border-violet-200",
                    "border-t-violet-600",
                    "animate-spin"
                )}
            />
            <span class="text-sm text-slate-500 dark:text-slate-400">{ label }</span>
        </div>
    };

    if props.fullscreen {
        html! {
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/30 dark:bg-black/60">
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
