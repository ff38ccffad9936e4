use crate::components::image::FallbackImage;
use crate::components::status_badge::StatusBadge;
use shared::models::{Issue, IssueId};
use shared::time::format_display_date;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct IssueCardProps {
    pub issue: Issue,
    /// A vote for this issue is in flight.
    #[prop_or_default]
    pub voting: bool,
    #[prop_or_default]
    pub priority: bool,
    pub on_open: Callback<IssueId>,
    pub on_vote: Callback<IssueId>,
}

/// Feed tile for one issue: photo, status, author, and the vote toggle.
#[function_component(IssueCard)]
pub fn issue_card(props: &IssueCardProps) -> Html {
    let issue = &props.issue;
    let id = issue.id;

    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id))
    };
    let on_vote = {
        let on_vote = props.on_vote.clone();
        let voting = props.voting;
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            if !voting {
                on_vote.emit(id);
            }
        })
    };

    let author = issue.best_author().to_string();
    let initial = author
        .chars()
        .next()
        .map_or_else(|| "U".to_string(), |c| c.to_uppercase().collect());
    let vote_class = if issue.user_has_upvoted {
        "bg-red-50 text-red-600"
    } else {
        "bg-slate-50 text-slate-600 hover:bg-slate-100"
    };

    html! {
        <article {onclick} class="group cursor-pointer flex flex-col h-full bg-white rounded-3xl border border-slate-200 shadow-sm hover:shadow-xl hover:-translate-y-1 transition-all overflow-hidden">
            <div class="relative aspect-[4/3] bg-slate-100 overflow-hidden">
                <FallbackImage
                    src={issue.best_image().map(str::to_string)}
                    alt={issue.title.clone()}
                    class="h-full w-full group-hover:scale-105 transition-transform"
                    priority={props.priority}
                />
                <div class="absolute top-3 left-3"><StatusBadge status={issue.status.clone()} /></div>
            </div>
            <div class="flex flex-col flex-1 p-5">
                <div class="flex items-center gap-2 mb-3">
                    <div class="h-6 w-6 rounded-full bg-slate-900 text-white flex items-center justify-center text-[10px] font-bold">
                        { initial }
                    </div>
                    <span class="text-xs font-bold text-slate-700">{ author }</span>
                    <span class="text-xs text-slate-400">{ format!("• {}", format_display_date(issue.created_at.as_deref())) }</span>
                </div>
                <h3 class="font-bold text-lg leading-tight text-slate-900 mb-2 group-hover:text-blue-600 transition-colors">{ &issue.title }</h3>
                <p class="text-sm text-slate-500 line-clamp-2 mb-4 flex-1">{ issue.body() }</p>
                <div class="pt-4 border-t border-slate-100 flex items-center justify-between mt-auto">
                    <span class="text-xs text-slate-400 font-medium flex items-center gap-1">
                        <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="h-3 w-3" />
                        { &issue.location }
                    </span>
                    <button
                        onclick={on_vote}
                        disabled={props.voting}
                        class={classes!("flex", "items-center", "gap-1.5", "px-3", "py-1.5", "rounded-lg", "text-xs", "font-bold", "transition-colors", "disabled:opacity-50", vote_class)}
                    >
                        if props.voting {
                            <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="h-3.5 w-3.5 animate-spin" />
                        } else if issue.user_has_upvoted {
                            <Icon icon_id={IconId::HeroiconsSolidHeart} class="h-3.5 w-3.5" />
                        } else {
                            <Icon icon_id={IconId::HeroiconsOutlineHeart} class="h-3.5 w-3.5" />
                        }
                        { issue.upvotes }
                    </button>
                </div>
            </div>
        </article>
    }
}
