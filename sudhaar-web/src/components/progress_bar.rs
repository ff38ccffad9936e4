use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Fill, clamped to 0..=100.
    pub percent: u32,
    #[prop_or("progress-primary".to_string())]
    pub tone: String,
    #[prop_or_default]
    pub show_label: bool,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let percent = props.percent.min(100);
    html! {
        <div class="flex items-center gap-3 w-full">
            <progress class={classes!("progress", "w-full", props.tone.clone())} value={percent.to_string()} max="100"></progress>
            if props.show_label {
                <span class="text-xs font-bold text-slate-600 w-10 text-right">{ format!("{percent}%") }</span>
            }
        </div>
    }
}
