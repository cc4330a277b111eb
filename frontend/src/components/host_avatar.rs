use podnet_shared::initials::derive_initials;
use yew::prelude::*;

use crate::config::api_config;

#[derive(Properties, PartialEq)]
pub struct HostAvatarProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub image_url: Option<String>,
    #[prop_or(AttrValue::Static("h-14 w-14 text-lg"))]
    pub size: AttrValue,
}

/// Portrait of a host, or its initials when there is no usable image.
#[function_component(HostAvatar)]
pub fn host_avatar(props: &HostAvatarProps) -> Html {
    let failed = use_state(|| false);
    let src = api_config().resolve_image_url(props.image_url.as_deref());

    {
        let failed = failed.clone();
        use_effect_with(src.clone(), move |_| {
            failed.set(false);
        });
    }

    let frame = classes!(
        "flex",
        "shrink-0",
        "items-center",
        "justify-center",
        "overflow-hidden",
        "rounded-full",
        props.size.to_string()
    );

    match src {
        Some(src) if !*failed => {
            let onerror = {
                let failed = failed.clone();
                Callback::from(move |_: Event| failed.set(true))
            };
            html! {
                <div class={frame}>
                    <img {src} alt={props.name.clone()} class="h-full w-full object-cover" {onerror} />
                </div>
            }
        },
        _ => html! {
            <div
                class={classes!(frame, "bg-gradient-to-br", "from-violet-500", "to-fuchsia-500", "font-semibold", "text-white")}
                aria-label={props.name.clone()}
            >
                { derive_initials(&props.name) }
            </div>
        },
    }
}
