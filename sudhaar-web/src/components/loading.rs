use i18nrs::yew::use_translation;
use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Caption under the spinner; defaults to the translated "Loading".
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let (i18n, ..) = use_translation();
    let message = props
        .message
        .clone()
        .unwrap_or_else(|| i18n.t("loading.text"));

    html! {
        <div class="min-h-[300px] flex flex-col items-center justify-center text-slate-400 py-12 animate-fadeIn">
            <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-10 h-10 animate-spin text-blue-600 mb-4" />
            <p class="font-bold text-slate-600">{ message }</p>
        </div>
    }
}
