use crate::api::SudhaarClient;
use crate::components::{IssueCard, IssueDetailModal, Loading, ReportModal};
use crate::models::feed_state::{FeedState, vote_handler};
use gloo_timers::callback::Interval;
use shared::feed::{FeedAction, FeedOrdering, PAGE_SIZE};
use shared::models::{Issue, IssueId, IssueQuery};
use std::rc::Rc;
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Banner lines rotated above the feed.
pub const QUOTES: [(&str, IconId, &str); 4] = [
    ("Every report makes Narowal better", IconId::HeroiconsOutlineHeart, "from-pink-500 to-rose-500"),
    ("Your voice drives real change", IconId::HeroiconsOutlineSparkles, "from-blue-500 to-cyan-500"),
    ("Together, we build transparency", IconId::HeroiconsOutlineUsers, "from-purple-500 to-indigo-500"),
    ("Small actions, big impact", IconId::HeroiconsOutlineBolt, "from-yellow-500 to-orange-500"),
];

const QUOTE_PERIOD_MS: u32 = 5_000;

/// Index of the banner line on show. Ticks advance from the current value so a
/// long-lived timer never reads a stale index.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct QuoteRotation {
    index: usize,
}

/// Move to the next banner line.
struct Advance;

impl Reducible for QuoteRotation {
    type Action = Advance;

    fn reduce(self: Rc<Self>, _: Advance) -> Rc<Self> {
        Rc::new(Self {
            index: (self.index + 1) % QUOTES.len(),
        })
    }
}

/// Citizen home: the open-issue feed with voting, details and reporting.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let feed = use_reducer(FeedState::default);
    let ordering = use_state(FeedOrdering::default);
    let reload = use_state(|| 0_u32);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let report_open = use_state(|| false);
    let quote = use_reducer(QuoteRotation::default);

    {
        let feed = feed.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((*ordering, *reload), move |(ordering, _)| {
            let query = IssueQuery::feed(ordering.as_query());
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match SudhaarClient::shared().list_issues(&query).await {
                    Ok(issues) => feed.dispatch(FeedAction::Replace(issues)),
                    Err(err) => {
                        log(&format!("Failed to load issues: {err}"));
                        error.set(Some("Sync failed. Check connection.".to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    {
        let quote = quote.dispatcher();
        use_effect_with((), move |()| {
            let interval = Interval::new(QUOTE_PERIOD_MS, move || quote.dispatch(Advance));
            move || drop(interval)
        });
    }

    let select_ordering = |target: FeedOrdering| {
        let ordering = ordering.clone();
        let feed = feed.clone();
        Callback::from(move |_: MouseEvent| {
            if *ordering != target {
                feed.dispatch(FeedAction::ResetPaging);
                ordering.set(target);
            }
        })
    };
    let open_report = {
        let report_open = report_open.clone();
        Callback::from(move |_: MouseEvent| report_open.set(true))
    };
    let close_report = {
        let report_open = report_open.clone();
        Callback::from(move |()| report_open.set(false))
    };
    let refresh = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };
    let on_open = {
        let feed = feed.clone();
        Callback::from(move |id: IssueId| feed.dispatch(FeedAction::Select(id)))
    };
    let on_close_detail = {
        let feed = feed.clone();
        let refresh = refresh.clone();
        Callback::from(move |()| {
            feed.dispatch(FeedAction::ClearSelection);
            refresh.emit(());
        })
    };
    let on_updated = {
        let feed = feed.clone();
        Callback::from(move |issue: Issue| feed.dispatch(FeedAction::Update(issue)))
    };
    let show_more = {
        let feed = feed.clone();
        Callback::from(move |_: MouseEvent| feed.dispatch(FeedAction::ShowMore))
    };
    let on_vote = vote_handler(&feed);

    let (quote_text, quote_icon, quote_gradient) = QUOTES[quote.index % QUOTES.len()];
    let visible = feed.visible();
    let selected = feed.selected().cloned();
    let selected_voting = selected.as_ref().is_some_and(|issue| feed.is_voting(issue.id));

    let body = if *loading && feed.total() == 0 {
        html! { <Loading message={Some("Syncing Data...".to_string())} /> }
    } else if let Some(message) = &*error {
        html! {
            <div class="min-h-[300px] flex flex-col items-center justify-center text-center bg-white rounded-2xl border border-red-100 p-12">
                <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-10 h-10 text-red-400 mb-4" />
                <p class="font-bold text-slate-700">{ message }</p>
                <button class="btn btn-outline btn-sm mt-4" onclick={{ let refresh = refresh.clone(); Callback::from(move |_: MouseEvent| refresh.emit(())) }}>
                    {"Retry"}
                </button>
            </div>
        }
    } else if visible.is_empty() {
        html! {
            <div class="min-h-[400px] flex flex-col items-center justify-center bg-white rounded-2xl border-2 border-dashed border-slate-200 p-12">
                <Icon icon_id={IconId::HeroiconsOutlineCamera} class="h-12 w-12 text-slate-300 mb-4" />
                <h3 class="text-xl font-black text-slate-800">{"No Reports Yet"}</h3>
                <p class="text-slate-500 mt-2 mb-6">{"Be the first to report an issue in this category."}</p>
                <button onclick={open_report.clone()} class="btn btn-primary">{"Report Now"}</button>
            </div>
        }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for visible.iter().enumerate().map(|(index, issue)| html! {
                    <IssueCard
                        key={issue.id}
                        issue={issue.clone()}
                        voting={feed.is_voting(issue.id)}
                        priority={index < 4}
                        on_open={on_open.clone()}
                        on_vote={on_vote.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-slate-50 font-sans text-slate-900 pb-20">
            <div class="relative bg-[#0B1121] pt-12 pb-16 px-4 overflow-hidden rounded-b-[2.5rem] shadow-2xl">
                <div class="max-w-7xl mx-auto relative z-10 flex flex-col lg:flex-row items-center justify-between gap-8 lg:gap-16">
                    <div class="flex-1 text-center lg:text-left space-y-4">
                        <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-blue-900/30 border border-blue-500/30 text-blue-300 text-[10px] font-bold tracking-wider uppercase">
                            <span class="h-2 w-2 rounded-full bg-blue-500 animate-pulse"></span>
                            {"Live System Active"}
                        </div>
                        <h1 class="text-4xl lg:text-6xl font-black text-white tracking-tighter leading-none">
                            {"Sudhaar"}<br />
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-emerald-400">{"Narowal."}</span>
                        </h1>
                        <p class="text-slate-400 text-base lg:text-lg font-medium max-w-xl mx-auto lg:mx-0 leading-relaxed">
                            {"The official civic engagement portal. Report issues, track municipal progress, and build a better district together."}
                        </p>
                    </div>
                    <div class="w-full max-w-sm bg-white/5 backdrop-blur-xl border border-white/10 rounded-2xl p-5 shadow-2xl">
                        <button onclick={open_report.clone()} class="btn w-full bg-white hover:bg-blue-50 text-slate-900 font-black mb-5 gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineCamera} class="w-5 h-5 text-blue-600" />
                            {"Report New Issue"}
                        </button>
                        <div class="grid grid-cols-2 gap-3">
                            <div class="bg-slate-900/50 p-3 rounded-xl border border-white/5 text-center">
                                <Icon icon_id={IconId::HeroiconsOutlineSignal} class="w-5 h-5 text-emerald-400 mx-auto mb-1.5" />
                                <div class="text-xl font-black text-white">{ feed.total() }</div>
                                <div class="text-[10px] text-slate-400 font-bold uppercase tracking-widest">{"Active Cases"}</div>
                            </div>
                            <div class="bg-slate-900/50 p-3 rounded-xl border border-white/5 text-center">
                                <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-5 h-5 text-blue-400 mx-auto mb-1.5" />
                                <div class="text-xl font-black text-white">{ feed.average_upvotes() }</div>
                                <div class="text-[10px] text-slate-400 font-bold uppercase tracking-widest">{"Avg Votes"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 -mt-10 relative z-20">
                <div class="mb-8 relative overflow-hidden rounded-2xl bg-white border border-slate-200 shadow-xl shadow-slate-200/40">
                    <div class={classes!("absolute", "top-0", "left-0", "w-1.5", "h-full", "bg-gradient-to-b", quote_gradient)} />
                    <div class="p-5 flex items-center gap-5">
                        <div class="p-3 bg-slate-50 rounded-xl">
                            <Icon icon_id={quote_icon} class="w-6 h-6 text-slate-700" />
                        </div>
                        <div>
                            <p class="text-lg font-bold text-slate-800">{ format!("\"{quote_text}\"") }</p>
                            <p class="text-xs font-bold text-slate-400 uppercase tracking-widest mt-1">{"Community Update"}</p>
                        </div>
                    </div>
                </div>

                <div class="flex flex-col sm:flex-row items-center justify-between gap-4 mb-8">
                    <div class="flex bg-white p-1.5 rounded-2xl shadow-sm border border-slate-200">
                        { for FeedOrdering::iter().map(|option| {
                            let active = *ordering == option;
                            html! {
                                <button onclick={select_ordering(option)} class={classes!(
                                    "px-5", "py-2.5", "rounded-xl", "text-xs", "font-bold", "transition-all",
                                    if active { "bg-slate-900 text-white shadow-md" } else { "text-slate-500 hover:bg-slate-50" }
                                )}>
                                    { option.to_string() }
                                </button>
                            }
                        }) }
                    </div>
                    <div class="flex items-center gap-2 text-xs font-bold text-slate-400 uppercase tracking-widest">
                        <Icon icon_id={IconId::HeroiconsOutlineFunnel} class="w-4 h-4" />
                        { format!("Showing {} Reports", feed.total()) }
                    </div>
                </div>

                { body }

                if visible.len() >= PAGE_SIZE {
                    <div class="my-8 rounded-2xl bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900 p-8 shadow-2xl">
                        <div class="flex flex-col md:flex-row items-center gap-8">
                            <div class="w-20 h-20 rounded-2xl bg-gradient-to-br from-blue-500 to-teal-500 flex items-center justify-center">
                                <Icon icon_id={IconId::HeroiconsOutlineTrophy} class="w-10 h-10 text-white" />
                            </div>
                            <div class="flex-1 text-center md:text-left">
                                <h3 class="text-2xl font-black text-white mb-2">{"Community Impact"}</h3>
                                <p class="text-slate-300 mb-4">{"Your reports are directly contributing to a cleaner Narowal."}</p>
                                <div class="flex flex-wrap gap-3 justify-center md:justify-start">
                                    <span class="badge badge-ghost gap-2 text-white bg-white/10 border-0 py-3">
                                        <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-4 h-4 text-green-400" />
                                        {"Action Taken"}
                                    </span>
                                    <span class="badge badge-ghost gap-2 text-white bg-white/10 border-0 py-3">
                                        <Icon icon_id={IconId::HeroiconsOutlineFlag} class="w-4 h-4 text-yellow-400" />
                                        {"Verified"}
                                    </span>
                                </div>
                            </div>
                            <button onclick={open_report} class="btn bg-white text-slate-900 border-0 hover:bg-blue-50">{"Join the Movement"}</button>
                        </div>
                    </div>
                }

                if feed.has_more() {
                    <div class="mt-8 text-center pb-12">
                        <button onclick={show_more} class="btn btn-outline rounded-full px-8">{"Load More Issues"}</button>
                    </div>
                }
            </main>

            <IssueDetailModal
                issue={selected}
                voting={selected_voting}
                on_vote={on_vote}
                on_close={on_close_detail}
                on_updated={Some(on_updated)}
            />
            <ReportModal open={*report_open} on_close={close_report} on_success={Some(refresh)} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_rotation_cycles_from_current_index() {
        let mut rotation = Rc::new(QuoteRotation::default());
        let mut seen = Vec::new();
        for _ in 0..QUOTES.len() + 1 {
            rotation = rotation.reduce(Advance);
            seen.push(rotation.index);
        }
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }
}
