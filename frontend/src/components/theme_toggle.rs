use yew::prelude::*;

use crate::session_context::{use_session, SessionAction};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ThemeToggleProps {
        class,
    } = props;
    let session = use_session();
    let dark_mode = session.session.dark_mode;

    let onclick = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::ToggleDarkMode))
    };

    let label = if dark_mode { "Switch to light mode" } else { "Switch to dark mode" };
    let icon_class = if dark_mode { "fa-sun" } else { "fa-moon" };

    let button_class = classes!(
        "group",
        "inline-flex",
        "h-10",
        "w-10",
        "items-center",
        "justify-center",
        "rounded-full",
        "border",
        "border-slate-200",
        "dark:border-slate-700",
        "bg-transparent",
        "hover:bg-slate-100",
        "dark:hover:bg-slate-800",
        "transition-colors",
        class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={dark_mode.to_string()}
        >
            <i
                class={classes!("fas", icon_class, "group-hover:text-violet-500")}
                aria-hidden="true"
            ></i>
            <span class="sr-only">{ label }</span>
        </button>
    }
}
