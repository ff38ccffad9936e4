use crate::config::FrontendConfig;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: Option<String>,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
    /// Load eagerly; for the first cards above the fold.
    #[prop_or_default]
    pub priority: bool,
}

/// Image that fades in once loaded and shows a placeholder when missing or broken.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let loaded = use_state(|| false);
    let failed = use_state(|| false);

    {
        let loaded = loaded.clone();
        let failed = failed.clone();
        use_effect_with(props.src.clone(), move |_| {
            loaded.set(false);
            failed.set(false);
            || ()
        });
    }

    let src = props
        .src
        .as_deref()
        .filter(|src| !src.trim().is_empty())
        .map(|src| FrontendConfig::new().media_url(src));

    let body = match src {
        Some(src) if !*failed => {
            let onload = {
                let loaded = loaded.clone();
                Callback::from(move |_: Event| loaded.set(true))
            };
            let onerror = {
                let failed = failed.clone();
                Callback::from(move |_: Event| failed.set(true))
            };
            let visibility = if *loaded {
                "opacity-100 scale-100"
            } else {
                "opacity-0 scale-105"
            };
            html! {
                <img
                    {src}
                    alt={props.alt.clone()}
                    loading={if props.priority { "eager" } else { "lazy" }}
                    {onload}
                    {onerror}
                    class={classes!("w-full", "h-full", "object-cover", "transition-all", "duration-700", visibility)}
                />
            }
        }
        _ => html! {
            <div class="w-full h-full flex items-center justify-center text-slate-300">
                <Icon icon_id={IconId::HeroiconsOutlinePhoto} class="w-10 h-10" />
            </div>
        },
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "bg-slate-100", props.class.clone())}>
            { body }
        </div>
    }
}
