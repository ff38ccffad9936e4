use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
    pub icon: IconId,
    #[prop_or_default]
    pub description: Option<String>,
    #[prop_or("text-primary".to_string())]
    pub accent: String,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat bg-white rounded-2xl border border-slate-200 shadow-sm">
            <div class={classes!("stat-figure", props.accent.clone())}>
                <Icon icon_id={props.icon} class="w-8 h-8" />
            </div>
            <div class="stat-title text-xs font-bold uppercase tracking-widest">{ &props.title }</div>
            <div class={classes!("stat-value", "text-2xl", "font-black", props.accent.clone())}>{ &props.value }</div>
            if let Some(description) = &props.description {
                <div class="stat-desc">{ description }</div>
            }
        </div>
    }
}
