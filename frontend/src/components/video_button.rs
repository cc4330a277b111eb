use podnet_shared::youtube::extract_watch_url;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoButtonProps {
    #[prop_or_default]
    pub video_url: Option<String>,
}

/// "Watch on YouTube" link for playable references; renders nothing for
/// anything else.
#[function_component(VideoButton)]
pub fn video_button(props: &VideoButtonProps) -> Html {
    let Some(href) = props.video_url.as_deref().and_then(extract_watch_url) else {
        return Html::default();
    };

    html! {
        <a
            {href}
            target="_blank"
            rel="noopener noreferrer"
            class="inline-flex items-center gap-2 rounded-lg bg-red-600 px-3 py-1.5 text-sm font-medium text-white hover:bg-red-700"
        >
            <i class="fab fa-youtube" aria-hidden="true"></i>
            { "Watch on YouTube" }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoHintProps {
    /// `None` while the field is empty.
    pub valid: Option<bool>,
}

#[function_component(VideoHint)]
pub fn video_hint(props: &VideoHintProps) -> Html {
    match props.valid {
        None => Html::default(),
        Some(true) => html! {
            <p class="text-xs text-emerald-600 dark:text-emerald-400">
                <i class="fas fa-check mr-1" aria-hidden="true"></i>{ "Valid YouTube URL" }
            </p>
        },
        Some(false) => html! {
            <p class="text-xs text-amber-600 dark:text-amber-400">
                <i class="fas fa-triangle-exclamation mr-1" aria-hidden="true"></i>
                { "Please enter a valid YouTube URL" }
            </p>
        },
    }
}
