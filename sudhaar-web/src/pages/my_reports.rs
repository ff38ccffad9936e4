use crate::api::SudhaarClient;
use crate::components::form::bind_input;
use crate::components::{
    Alert, FallbackImage, IssueDetailModal, ReportModal, StatCard, StatusBadge,
};
use crate::models::feed_state::{FeedState, vote_handler};
use shared::feed::FeedAction;
use shared::filters::{ReportStats, StatusFilter, filter_reports};
use shared::models::{Issue, IssueId, IssueQuery};
use shared::time::format_display_date;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

fn filter_tone(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "text-slate-600",
        StatusFilter::Pending => "text-amber-600",
        StatusFilter::Verified => "text-teal-600",
        StatusFilter::InProgress => "text-blue-600",
        StatusFilter::Resolved => "text-emerald-600",
        StatusFilter::Critical => "text-red-600",
    }
}

/// The signed-in user's own reports.
#[function_component(MyReportsPage)]
pub fn my_reports_page() -> Html {
    let feed = use_reducer(FeedState::default);
    let reload = use_state(|| 0_u32);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let search = use_state(String::new);
    let status = use_state(StatusFilter::default);
    let filter_open = use_state(|| false);
    let report_open = use_state(|| false);

    {
        let feed = feed.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match SudhaarClient::shared().list_issues(&IssueQuery::mine()).await {
                    Ok(issues) => feed.dispatch(FeedAction::Replace(issues)),
                    Err(err) if err.is_network() => {
                        log(&format!("Reports unavailable: {err}"));
                        error.set(Some("Failed to load your reports. Check connection.".to_string()));
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };
    let open_report = {
        let report_open = report_open.clone();
        Callback::from(move |_: MouseEvent| report_open.set(true))
    };
    let close_report = {
        let report_open = report_open.clone();
        Callback::from(move |()| report_open.set(false))
    };
    let toggle_filter = {
        let filter_open = filter_open.clone();
        Callback::from(move |_: MouseEvent| filter_open.set(!*filter_open))
    };
    let on_close_detail = {
        let feed = feed.clone();
        Callback::from(move |()| feed.dispatch(FeedAction::ClearSelection))
    };
    let on_updated = {
        let feed = feed.clone();
        Callback::from(move |issue: Issue| feed.dispatch(FeedAction::Update(issue)))
    };
    let on_vote = vote_handler(&feed);

    let reports = feed.all();
    let stats = ReportStats::from_reports(reports);
    let filtered = filter_reports(reports, &search, *status);
    let narrowed = !search.trim().is_empty() || *status != StatusFilter::All;
    let selected = feed.selected().cloned();
    let selected_voting = selected.as_ref().is_some_and(|issue| feed.is_voting(issue.id));
    let plural = if reports.len() == 1 { "" } else { "s" };

    let card = |issue: &Issue| {
        let open = {
            let feed = feed.clone();
            let id: IssueId = issue.id;
            Callback::from(move |_: MouseEvent| feed.dispatch(FeedAction::Select(id)))
        };
        html! {
            <div key={issue.id} onclick={open} class="bg-white rounded-3xl border-2 border-slate-200 cursor-pointer hover:border-blue-300 hover:shadow-xl transition-all overflow-hidden group flex flex-col h-full">
                <div class="h-48 bg-slate-100 overflow-hidden relative shrink-0">
                    <FallbackImage src={issue.best_image().map(str::to_string)} alt={issue.title.clone()} class="w-full h-48" />
                    <div class="absolute top-4 right-4 z-10">
                        <StatusBadge status={issue.status.clone()} />
                    </div>
                </div>
                <div class="p-6 flex flex-col flex-1">
                    <h3 class="font-bold text-xl text-slate-900 mb-3 line-clamp-2 group-hover:text-blue-600 transition-colors leading-tight">
                        { &issue.title }
                    </h3>
                    <div class="space-y-3 mb-4 flex-1">
                        <div class="flex items-start gap-2 text-sm text-slate-500">
                            <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="h-4 w-4 text-slate-400 flex-shrink-0 mt-0.5" />
                            <span class="line-clamp-1 font-medium">{ &issue.location }</span>
                        </div>
                        if issue.created_at.is_some() {
                            <div class="flex items-center gap-2 text-sm text-slate-400">
                                <Icon icon_id={IconId::HeroiconsOutlineCalendar} class="h-4 w-4" />
                                <span class="font-medium">{ format_display_date(issue.created_at.as_deref()) }</span>
                            </div>
                        }
                    </div>
                    <div class="pt-4 border-t border-slate-100 mt-auto">
                        <span class="text-sm font-bold text-blue-600 group-hover:underline flex items-center gap-1">
                            {"View Details"}
                            <Icon icon_id={IconId::HeroiconsOutlineChevronRight} class="h-4 w-4" />
                        </span>
                    </div>
                </div>
            </div>
        }
    };

    let body = if *loading {
        html! {
            <div class="min-h-[500px] flex flex-col items-center justify-center text-slate-400">
                <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="h-16 w-16 animate-spin text-blue-600" />
                <p class="font-bold text-lg mt-6 animate-pulse text-slate-600">{"Loading your reports..."}</p>
                <p class="text-sm text-slate-400 mt-2">{"Connecting to secure server"}</p>
            </div>
        }
    } else if filtered.is_empty() {
        html! {
            <div class="min-h-[500px] flex flex-col items-center justify-center text-slate-400 border-2 border-dashed border-slate-200 rounded-3xl bg-white/50">
                <div class="bg-slate-100 p-8 rounded-full mb-6">
                    <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="h-16 w-16 text-slate-400" />
                </div>
                <h2 class="text-2xl font-bold text-slate-700 mb-2">
                    { if narrowed { "No reports found" } else { "No reports yet" } }
                </h2>
                <p class="font-medium text-slate-500 mb-8 text-center max-w-md">
                    { if narrowed {
                        "Try adjusting your search or filter criteria"
                    } else {
                        "You haven't reported any issues yet. Be the first to make a change."
                    } }
                </p>
                if !narrowed {
                    <button onclick={open_report.clone()} class="btn btn-primary btn-lg gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlinePlus} class="h-5 w-5" />
                        {"Report Your First Issue"}
                    </button>
                }
            </div>
        }
    } else {
        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for filtered.iter().map(|issue| card(*issue)) }
                </div>
                <div class="mt-12 text-center pb-12">
                    <span class="badge badge-ghost font-bold text-slate-500 py-3">
                        { format!("Showing {} of {} report{plural}", filtered.len(), reports.len()) }
                    </span>
                </div>
            </>
        }
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 via-blue-50/30 to-slate-50 font-sans pb-20 pt-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-start md:items-end mb-10 gap-4">
                    <div>
                        <div class="flex items-center gap-3 mb-2">
                            <div class="p-2.5 bg-blue-600 rounded-xl shadow-lg shadow-blue-200">
                                <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="h-6 w-6 text-white" />
                            </div>
                            <h1 class="text-4xl md:text-5xl font-black text-slate-900 tracking-tight">{"My Reports"}</h1>
                        </div>
                        <p class="text-slate-500 font-medium ml-1">{"Track and manage all your submitted issues"}</p>
                    </div>
                    <div class="flex gap-3 w-full md:w-auto">
                        <button
                            onclick={{ let refresh = refresh.clone(); Callback::from(move |_: MouseEvent| refresh.emit(())) }}
                            disabled={*loading}
                            class="btn btn-outline flex-1 md:flex-none gap-2"
                        >
                            <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class={classes!("w-5", "h-5", (*loading).then_some("animate-spin"))} />
                            <span class="hidden sm:inline">{"Refresh"}</span>
                        </button>
                        <button onclick={open_report} class="btn btn-primary flex-1 md:flex-none gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-5 h-5" />
                            {"New Report"}
                        </button>
                    </div>
                </div>

                if !*loading && !reports.is_empty() {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
                        <StatCard title="Total" value={stats.total.to_string()} icon={IconId::HeroiconsOutlineDocumentText} accent="text-slate-900" />
                        <StatCard title="Verified" value={stats.verified.to_string()} icon={IconId::HeroiconsOutlineShieldCheck} accent="text-teal-700" />
                        <StatCard title="Progress" value={stats.in_progress.to_string()} icon={IconId::HeroiconsOutlineArrowTrendingUp} accent="text-blue-700" />
                        <StatCard title="Resolved" value={stats.resolved.to_string()} icon={IconId::HeroiconsOutlineCheckCircle} accent="text-emerald-700" />
                    </div>

                    <div class="bg-white p-3 rounded-2xl border-2 border-slate-200 mb-8 flex flex-col md:flex-row gap-3 shadow-sm relative z-30">
                        <label class="input input-bordered flex-1 flex items-center gap-3">
                            <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="h-5 w-5 text-slate-400" />
                            <input type="text" class="grow" placeholder="Search by title or location..." value={(*search).clone()} oninput={bind_input(&search)} />
                        </label>
                        <div class="relative min-w-[220px]">
                            <button onclick={toggle_filter} class={classes!(
                                "btn", "w-full", "justify-between",
                                if *filter_open { "btn-outline btn-primary" } else { "btn-ghost bg-slate-50" }
                            )}>
                                <span class="flex items-center gap-2">
                                    <Icon icon_id={IconId::HeroiconsOutlineFunnel} class="h-4 w-4" />
                                    { status.label() }
                                </span>
                                <Icon icon_id={IconId::HeroiconsOutlineChevronDown} class={classes!("h-4", "w-4", "transition-transform", (*filter_open).then_some("rotate-180"))} />
                            </button>
                            if *filter_open {
                                <ul class="menu absolute top-full right-0 mt-2 w-full bg-white border border-slate-100 rounded-xl shadow-xl z-50 p-1">
                                    { for StatusFilter::OPTIONS.into_iter().map(|option| {
                                        let pick = {
                                            let status = status.clone();
                                            let filter_open = filter_open.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                status.set(option);
                                                filter_open.set(false);
                                            })
                                        };
                                        html! {
                                            <li key={option.key()}>
                                                <button onclick={pick} class={classes!("flex", "justify-between", "font-bold", (*status == option).then_some("active"))}>
                                                    <span class={filter_tone(option)}>{ option.label() }</span>
                                                    if *status == option {
                                                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="h-4 w-4" />
                                                    }
                                                </button>
                                            </li>
                                        }
                                    }) }
                                </ul>
                            }
                        </div>
                    </div>
                }

                if let Some(message) = &*error {
                    <div class="mb-6">
                        <Alert title={Some("Error Loading Reports".to_string())} message={message.clone()} />
                    </div>
                }

                { body }
            </div>

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
    fn every_filter_has_a_tone() {
        for option in StatusFilter::OPTIONS {
            assert!(filter_tone(option).starts_with("text-"));
        }
    }
}
