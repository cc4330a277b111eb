use yew::{prelude::*, use_effect_with};
use yew_hooks::prelude::use_timeout;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Error,
    Success,
    Info,
}

impl BannerTone {
    fn icon(self) -> &'static str {
        match self {
            BannerTone::Error => "fa-triangle-exclamation",
            BannerTone::Success => "fa-circle-check",
            BannerTone::Info => "fa-circle-info",
        }
    }

    fn palette(self) -> Classes {
        match self {
            BannerTone::Error => classes!(
                "bg-red-50",
                "text-red-800",
                "dark:bg-red-950/80",
                "dark:text-red-200"
            ),
            BannerTone::Success => classes!(
                "bg-emerald-50",
                "text-emerald-800",
                "dark:bg-emerald-950/80",
                "dark:text-emerald-200"
            ),
            BannerTone::Info => classes!(
                "bg-sky-50",
                "text-sky-800",
                "dark:bg-sky-950/80",
                "dark:text-sky-200"
            ),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or(BannerTone::Error)]
    pub tone: BannerTone,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

/// Dismissable message strip. Fades after three seconds unless
/// `auto_dismiss` is off.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 3000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with((*is_open, props.auto_dismiss, props.message.clone()), move |(visible, auto_dismiss, _)| {
            if *auto_dismiss && *visible {
                auto_timeout.reset();
            } else {
                auto_timeout.cancel();
            }
        });
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let wrapper_classes = classes!(
        "flex",
        "items-start",
        "gap-3",
        "rounded-xl",
        "px-4",
        "py-3",
        "text-sm",
        "shadow-lg",
        "w-full",
        "max-w-xl",
        props.tone.palette()
    );

    let role = if props.tone == BannerTone::Error { "alert" } else { "status" };

    html! {
        <div class={wrapper_classes} {role}>
            <i class={classes!("fas", props.tone.icon(), "mt-0.5")} aria-hidden="true"></i>
            <p class="flex-1">{ props.message.clone() }</p>
            <button
                type="button"
                class="ml-2 inline-flex h-6 w-6 items-center justify-center rounded-full hover:bg-black/10 dark:hover:bg-white/15"
                aria-label="Dismiss"
                onclick={move |_| dismiss.emit(())}
            >
                {"×"}
            </button>
        </div>
    }
}
