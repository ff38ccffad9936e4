use crate::browser;
use crate::components::image::FallbackImage;
use shared::models::Issue;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Executor shown for a resolved issue and its avatar letter.
pub fn executor(issue: &Issue) -> (String, char) {
    let name = issue
        .author_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("Municipal Dept")
        .to_string();
    let initial = name
        .chars()
        .next()
        .map_or('A', |c| c.to_ascii_uppercase());
    (name, initial)
}

#[derive(Properties, PartialEq)]
pub struct TransparencyDetailModalProps {
    pub issue: Option<Issue>,
    pub on_close: Callback<()>,
}

/// Resolution story of a completed issue.
#[function_component(TransparencyDetailModal)]
pub fn transparency_detail_modal(props: &TransparencyDetailModalProps) -> Html {
    {
        let open = props.issue.is_some();
        use_effect_with(open, move |open| {
            browser::lock_body_scroll(*open);
            move || browser::lock_body_scroll(false)
        });
    }

    let Some(issue) = &props.issue else {
        return html! {};
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let (executed_by, initial) = executor(issue);
    let when = issue.time_text.clone().unwrap_or_else(|| "Recently".to_string());
    let story = if issue.body().trim().is_empty() {
        "This issue has been successfully resolved."
    } else {
        issue.body()
    };

    html! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4">
            <div onclick={close.clone()} class="absolute inset-0 bg-slate-900/60 backdrop-blur-sm cursor-pointer" />
            <div class="relative w-full max-w-5xl bg-white rounded-3xl shadow-2xl overflow-hidden flex flex-col max-h-[90vh]">
                <div class="p-6 border-b border-slate-100 flex justify-between items-center bg-slate-50/50">
                    <div>
                        <h2 class="text-xl font-black text-slate-900 line-clamp-1">{ &issue.title }</h2>
                        <div class="flex items-center gap-3 mt-1 text-sm text-slate-500">
                            <span class="flex items-center gap-1 text-emerald-600 font-bold bg-emerald-50 px-2 py-0.5 rounded border border-emerald-100">
                                <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-4 h-4" />
                                {"Resolved"}
                            </span>
                            <span class="flex items-center gap-1">
                                <Icon icon_id={IconId::HeroiconsOutlineCalendar} class="w-4 h-4" />
                                { when }
                            </span>
                            <span class="flex items-center gap-1">
                                <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4" />
                                { &issue.location }
                            </span>
                        </div>
                    </div>
                    <button onclick={close} aria-label="Close" class="btn btn-ghost btn-circle btn-sm">
                        <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-5 h-5" />
                    </button>
                </div>

                <div class="overflow-y-auto p-6 lg:p-8">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-12">
                        <div class="space-y-6">
                            <div>
                                <h3 class="font-bold text-slate-900 mb-3 text-xs uppercase tracking-wide">{"Verification Evidence"}</h3>
                                <div class="relative rounded-2xl overflow-hidden h-64 border border-slate-200 shadow-sm">
                                    <FallbackImage src={issue.best_image().map(str::to_string)} alt={issue.title.clone()} class="h-64 w-full" />
                                    <div class="absolute top-4 left-4 bg-emerald-600 text-white text-[10px] font-bold px-3 py-1 rounded-full shadow-lg">
                                        {"COMPLETED WORK"}
                                    </div>
                                </div>
                            </div>
                            <div class="bg-blue-50 p-5 rounded-2xl border border-blue-100">
                                <p class="text-slate-700 italic text-sm leading-relaxed">
                                    {"\"This issue was verified as resolved by the municipal team. The community has confirmed the fix.\""}
                                </p>
                                <p class="text-blue-600 font-bold text-xs mt-3">{"Sudhaar Verification Team"}</p>
                            </div>
                        </div>

                        <div class="space-y-8">
                            <div>
                                <h3 class="font-bold text-slate-900 mb-3 text-xs uppercase tracking-wide">{"Resolution Story"}</h3>
                                <p class="text-slate-600 leading-relaxed text-sm">{ story }</p>
                                <p class="text-slate-500 text-sm mt-2">
                                    {"Work began immediately after funding approval and was completed within the expected timeline."}
                                </p>
                            </div>
                            <div>
                                <h3 class="font-bold text-slate-900 mb-3 text-xs uppercase tracking-wide flex items-center gap-2">
                                    <Icon icon_id={IconId::HeroiconsOutlineBuildingOffice2} class="w-4 h-4 text-purple-600" />
                                    {"Executed By"}
                                </h3>
                                <div class="flex items-center gap-3 bg-slate-50 p-3 rounded-xl border border-slate-200">
                                    <div class="w-10 h-10 bg-white rounded-lg flex items-center justify-center font-bold text-purple-600 border border-slate-100 shadow-sm text-lg">
                                        { initial }
                                    </div>
                                    <div>
                                        <p class="font-bold text-slate-900 text-sm">{ executed_by }</p>
                                        <p class="text-xs text-slate-500">{"Verified Contractor / Department"}</p>
                                    </div>
                                </div>
                            </div>
                            if !issue.timeline.is_empty() {
                                <div>
                                    <h3 class="font-bold text-slate-900 mb-3 text-xs uppercase tracking-wide">{"Timeline"}</h3>
                                    <ul class="timeline timeline-vertical timeline-compact">
                                        { for issue.timeline.iter().map(|entry| html! {
                                            <li>
                                                <div class="timeline-middle">
                                                    <Icon icon_id={IconId::HeroiconsSolidCheckCircle} class="w-4 h-4 text-emerald-500" />
                                                </div>
                                                <div class="timeline-end mb-4">
                                                    <p class="text-sm font-bold text-slate-800">{ &entry.status }</p>
                                                    <p class="text-xs text-slate-500">{ &entry.description }</p>
                                                </div>
                                                <hr />
                                            </li>
                                        }) }
                                    </ul>
                                </div>
                            }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::executor;
    use shared::models::Issue;

    #[test]
    fn executor_falls_back_to_municipal_department() {
        assert_eq!(executor(&Issue::default()), ("Municipal Dept".to_string(), 'M'));
        let issue = Issue {
            author_name: Some("ahmed".into()),
            ..Issue::default()
        };
        assert_eq!(executor(&issue), ("ahmed".to_string(), 'A'));
    }
}
