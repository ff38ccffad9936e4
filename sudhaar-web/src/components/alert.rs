use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub message: String,
    #[prop_or(AlertKind::Error)]
    pub kind: AlertKind,
    #[prop_or_default]
    pub title: Option<String>,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let (class, icon) = match props.kind {
        AlertKind::Error => ("alert-error", IconId::HeroiconsOutlineExclamationCircle),
        AlertKind::Success => ("alert-success", IconId::HeroiconsOutlineCheckCircle),
        AlertKind::Info => ("alert-info", IconId::HeroiconsOutlineInformationCircle),
    };
    html! {
        <div role="alert" class={classes!("alert", "alert-soft", "text-sm", "font-medium", class)}>
            <Icon icon_id={icon} class="h-5 w-5 shrink-0" />
            <div class="flex-1">
                if let Some(title) = &props.title {
                    <p class="font-bold">{ title }</p>
                }
                <p>{ &props.message }</p>
            </div>
        </div>
    }
}
