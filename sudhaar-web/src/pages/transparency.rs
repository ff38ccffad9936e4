use crate::api::SudhaarClient;
use crate::components::{FallbackImage, ProgressBar, TransparencyDetailModal};
use crate::routes::MainRoute;
use shared::filters::{Side, resolved_milestones};
use shared::models::{Campaign, CampaignQuery, Issue, IssueQuery, IssueStats, TransparencySummary};
use shared::time::issue_age;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

const FEATURED: usize = 4;
const FUNDED_PROJECTS: usize = 4;
const MILESTONE_ICONS: [IconId; 3] = [
    IconId::HeroiconsOutlineWrenchScrewdriver,
    IconId::HeroiconsOutlineCalendar,
    IconId::HeroiconsOutlineCheck,
];

/// Everything the public ledger shows. Each part loads independently.
#[derive(Debug, Clone, Default, PartialEq)]
struct Ledger {
    stats: IssueStats,
    resolved: Vec<Issue>,
    summary: TransparencySummary,
    campaigns: Vec<Campaign>,
    failures: usize,
}

/// Resolution rate with at most one decimal place.
fn rate_label(rate: f64) -> String {
    let rounded = (rate * 10.0).round() / 10.0;
    format!("{rounded}%")
}

#[derive(Properties, PartialEq)]
struct LedgerStatProps {
    icon: IconId,
    title: &'static str,
    value: String,
    tone: &'static str,
    loading: bool,
}

#[function_component(LedgerStat)]
fn ledger_stat(props: &LedgerStatProps) -> Html {
    html! {
        <div class={classes!("bg-white", "p-8", "rounded-2xl", "shadow-sm", "hover:shadow-xl", "transition-all", "border-l-[6px]", props.tone)}
            role="article" aria-label={format!("{}: {}", props.title, props.value)}>
            <div class="flex items-center gap-3 mb-3">
                <div class="p-2 rounded-lg bg-slate-50" aria-hidden="true">
                    <Icon icon_id={props.icon} class="w-6 h-6" />
                </div>
                <h3 class="font-bold text-slate-700 text-sm uppercase tracking-wide">{ props.title }</h3>
            </div>
            if props.loading {
                <div class="h-10 bg-slate-200 rounded animate-pulse" />
            } else {
                <p class="text-4xl font-black">{ &props.value }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ResolvedCardProps {
    issue: Issue,
    on_details: Callback<Issue>,
}

#[function_component(ResolvedCard)]
fn resolved_card(props: &ResolvedCardProps) -> Html {
    let issue = &props.issue;
    let onclick = {
        let on_details = props.on_details.clone();
        let issue = issue.clone();
        Callback::from(move |_: MouseEvent| on_details.emit(issue.clone()))
    };
    let when = issue_age(
        issue.time_text.as_deref(),
        issue.created_at.as_deref(),
        chrono::Utc::now(),
    );

    html! {
        <article class="group bg-white rounded-2xl border border-slate-100 shadow-sm hover:shadow-xl hover:border-blue-200 transition-all overflow-hidden flex flex-col h-full">
            <div class="h-48 overflow-hidden relative bg-slate-100">
                <FallbackImage src={issue.best_image().map(str::to_string)} alt={format!("{} - resolved issue", issue.title)} class="w-full h-48" />
                <div class="absolute top-3 right-3 bg-emerald-500 text-white text-xs font-bold px-3 py-1 rounded-full shadow-lg flex items-center gap-1 z-10" role="status">
                    <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-3 h-3" />
                    {"Resolved"}
                </div>
            </div>
            <div class="p-6 flex flex-col flex-1">
                <h4 class="font-bold text-lg text-slate-900 mb-2 group-hover:text-blue-600 transition-colors line-clamp-2">{ &issue.title }</h4>
                <p class="text-sm text-slate-500 mb-1">
                    <span class="font-semibold text-slate-700">{"Category: "}</span>{ issue.category.as_str() }
                </p>
                <p class="text-sm text-slate-500 mb-4">
                    <span class="font-semibold text-slate-700">{"By: "}</span>{ issue.best_author() }
                </p>
                <div class="mt-auto pt-4 border-t border-slate-100 flex items-center justify-between">
                    <time class="text-xs font-bold text-emerald-600">{ when }</time>
                    <button {onclick} class="btn btn-xs btn-soft btn-primary gap-1" aria-label={format!("View details for {}", issue.title)}>
                        <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-3.5 h-3.5" />
                        {"Details"}
                    </button>
                </div>
            </div>
        </article>
    }
}

fn funding_item(campaign: &Campaign) -> Html {
    let percent = campaign.raised_amount.percent_of(campaign.goal_amount);
    let tone = if percent >= 100 { "progress-success" } else { "progress-primary" };
    html! {
        <li key={campaign.id} class="bg-slate-50 p-5 rounded-2xl flex flex-col">
            <h4 class="font-bold text-slate-900 mb-2">{ &campaign.title }</h4>
            <ProgressBar {percent} tone={tone.to_string()} />
            <div class="flex justify-between mt-2 text-xs text-slate-500 font-medium">
                <span>{ format!("{percent}% Funded") }</span>
                <span>{ format!("Goal: {}", campaign.goal_amount.grouped()) }</span>
            </div>
        </li>
    }
}

/// Public ledger: issue outcomes, proof of resolution and fund flow.
#[function_component(TransparencyPage)]
pub fn transparency_page() -> Html {
    let navigator = use_navigator();
    let ledger = use_state(Ledger::default);
    let loading = use_state(|| true);
    let reload = use_state(|| 0_u32);
    let selected = use_state(|| None::<Issue>);

    {
        let ledger = ledger.clone();
        let loading = loading.clone();
        use_effect_with(*reload, move |_| {
            loading.set(true);
            spawn_local(async move {
                let client = SudhaarClient::shared();
                let resolved_query = IssueQuery {
                    ordering: Some("-created_at".to_string()),
                    ..IssueQuery::resolved()
                };
                let campaign_query = CampaignQuery {
                    is_verified: Some(true),
                    ..CampaignQuery::active()
                };
                let (stats, resolved, summary, campaigns) = futures::join!(
                    client.issue_stats(),
                    client.list_issues(&resolved_query),
                    client.transparency_summary(),
                    client.list_campaigns(&campaign_query),
                );

                let mut next = Ledger::default();
                match stats {
                    Ok(stats) => next.stats = stats,
                    Err(err) => {
                        log(&format!("Issue stats unavailable: {err}"));
                        next.failures += 1;
                    }
                }
                match resolved {
                    Ok(issues) => next.resolved = issues,
                    Err(err) => {
                        log(&format!("Resolved issues unavailable: {err}"));
                        next.failures += 1;
                    }
                }
                match summary {
                    Ok(summary) => next.summary = summary,
                    Err(err) => {
                        log(&format!("Financial data unavailable: {err}"));
                        next.failures += 1;
                    }
                }
                match campaigns {
                    Ok(mut list) => {
                        list.truncate(FUNDED_PROJECTS);
                        next.campaigns = list;
                    }
                    Err(err) => {
                        log(&format!("Campaigns unavailable: {err}"));
                        next.failures += 1;
                    }
                }
                ledger.set(next);
                loading.set(false);
            });
            || ()
        });
    }

    let retry = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(*reload + 1))
    };
    let to_archive = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&MainRoute::Archive);
        }
    });
    let on_details = {
        let selected = selected.clone();
        Callback::from(move |issue: Issue| selected.set(Some(issue)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    let busy = *loading;
    let stats = &ledger.stats;
    let summary = ledger.summary;
    let milestones = resolved_milestones(&ledger.resolved);

    let gallery = if busy {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                { for (0..FEATURED).map(|i| html! {
                    <div key={i} class="bg-white rounded-2xl border border-slate-100 shadow-sm animate-pulse">
                        <div class="h-48 bg-slate-200" />
                        <div class="p-6"><div class="h-6 bg-slate-200 rounded mb-2" /><div class="h-4 bg-slate-200 rounded" /></div>
                    </div>
                }) }
            </div>
        }
    } else if ledger.resolved.is_empty() {
        html! { <div class="text-center py-12 text-slate-400"><p>{"No resolved issues to display yet."}</p></div> }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                { for ledger.resolved.iter().take(FEATURED).map(|issue| html! {
                    <ResolvedCard key={issue.id} issue={issue.clone()} on_details={on_details.clone()} />
                }) }
            </div>
        }
    };

    let funding = if busy {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                { for (0..FUNDED_PROJECTS).map(|i| html! {
                    <div key={i} class="bg-slate-50 p-5 rounded-2xl animate-pulse">
                        <div class="h-4 bg-slate-200 rounded mb-2" /><div class="h-2 bg-slate-200 rounded" />
                    </div>
                }) }
            </div>
        }
    } else if ledger.campaigns.is_empty() {
        html! { <div class="text-center py-8 text-slate-400"><p>{"No active campaigns at the moment."}</p></div> }
    } else {
        html! {
            <ul class="grid grid-cols-1 md:grid-cols-2 gap-6 list-none">
                { for ledger.campaigns.iter().map(funding_item) }
            </ul>
        }
    };

    let timeline = if busy {
        html! {
            <div class="space-y-8">
                { for (0..3).map(|i| html! {
                    <div key={i} class="bg-white p-6 rounded-2xl shadow-sm animate-pulse">
                        <div class="h-6 bg-slate-200 rounded mb-2" /><div class="h-4 bg-slate-200 rounded w-24" />
                    </div>
                }) }
            </div>
        }
    } else if milestones.is_empty() {
        html! { <div class="text-center py-8 text-slate-400"><p>{"No recent milestones to display."}</p></div> }
    } else {
        html! {
            <div class="space-y-8">
                { for milestones.iter().enumerate().map(|(index, milestone)| {
                    let left = milestone.side == Side::Left;
                    html! {
                        <div key={milestone.issue_id} class={classes!(
                            "relative", "w-full", "md:w-1/2", "p-4",
                            if left { "md:pr-12 md:text-right md:left-0" } else { "md:pl-12 md:text-left md:left-1/2" }
                        )}>
                            <div class={classes!(
                                "hidden", "md:flex", "absolute", "top-6", "w-10", "h-10", "bg-blue-600", "rounded-full",
                                "items-center", "justify-center", "text-white", "shadow-lg", "z-10", "border-4", "border-white",
                                if left { "-right-5" } else { "-left-5" }
                            )}>
                                <Icon icon_id={MILESTONE_ICONS[index % MILESTONE_ICONS.len()]} class="w-4 h-4" />
                            </div>
                            <article class="bg-white p-6 rounded-2xl shadow-sm border-t-4 border-blue-600 hover:shadow-md transition-shadow">
                                <h4 class="font-bold text-slate-900 text-lg mb-1">{ &milestone.title }</h4>
                                <p class="text-sm text-slate-500 font-medium mb-2">{ &milestone.resolver }</p>
                                <time class="badge badge-ghost font-bold">{ &milestone.date }</time>
                            </article>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-slate-50/50 font-sans pb-20">
            <header class="bg-slate-900 pt-12 pb-24 px-6 text-center relative overflow-hidden rounded-b-[3rem] shadow-2xl mb-12">
                <div class="relative z-10 max-w-4xl mx-auto">
                    <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-blue-900/50 border border-blue-700/50 text-blue-200 text-xs font-bold mb-6">
                        <Icon icon_id={IconId::HeroiconsOutlineShieldCheck} class="w-3.5 h-3.5" />
                        {"Official Public Ledger"}
                    </div>
                    <h1 class="text-4xl md:text-5xl font-black text-white mb-6 tracking-tight">
                        {"Sudhaar "}
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-emerald-400">{"Transparency"}</span>
                        {" Dashboard"}
                    </h1>
                    <p class="text-slate-400 text-lg md:text-xl max-w-2xl mx-auto leading-relaxed">
                        {"Empowering the community through verifiable data. Every rupee donated and every issue resolved is tracked here in real-time."}
                    </p>
                </div>
            </header>

            if !busy && ledger.failures > 0 {
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 -mt-16 relative z-20 mb-20">
                    <div role="alert" class="alert alert-error alert-soft text-sm font-medium">
                        <Icon icon_id={IconId::HeroiconsOutlineXCircle} class="w-5 h-5" />
                        <div class="flex-1">
                            <p>{"Some data could not be loaded. Please try refreshing."}</p>
                            <button onclick={retry} class="mt-2 text-xs font-bold underline hover:no-underline">{"Try Again"}</button>
                        </div>
                    </div>
                </div>
            }

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-20 -mt-16 relative z-20">
                <section aria-label="Key Statistics">
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        <LedgerStat icon={IconId::HeroiconsOutlineExclamationCircle} title="Total Reported" value={super::grouped_count(stats.total_reported)} tone="border-slate-500 text-slate-700" loading={busy} />
                        <LedgerStat icon={IconId::HeroiconsOutlineCheckCircle} title="Issues Resolved" value={super::grouped_count(stats.issues_resolved)} tone="border-emerald-500 text-emerald-700" loading={busy} />
                        <LedgerStat icon={IconId::HeroiconsOutlineSignal} title="Resolution Rate" value={rate_label(stats.resolution_rate)} tone="border-blue-600 text-blue-700" loading={busy} />
                        <LedgerStat icon={IconId::HeroiconsOutlineArrowTrendingUp} title="Active Issues" value={super::grouped_count(stats.active_issues)} tone="border-amber-500 text-amber-700" loading={busy} />
                    </div>
                </section>

                <section>
                    <div class="flex items-center justify-between mb-10 flex-wrap gap-4">
                        <div>
                            <h2 class="text-3xl font-black text-slate-900">{"Proof of Resolution"}</h2>
                            <p class="text-slate-500 mt-2">{"Visual evidence of completed civic works."}</p>
                        </div>
                        <button onclick={to_archive} class="btn btn-link gap-2 font-bold">
                            {"View All Archive"}
                            <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-4 h-4" />
                        </button>
                    </div>
                    { gallery }
                </section>

                <section class="relative overflow-hidden bg-slate-900 rounded-3xl p-8 md:p-12 text-center text-white">
                    <div class="relative z-10 max-w-3xl mx-auto">
                        <div class="inline-flex items-center gap-2 bg-white/10 border border-white/20 text-blue-200 px-3 py-1 rounded-full text-xs font-bold uppercase tracking-wider mb-6">
                            <Icon icon_id={IconId::HeroiconsOutlineBuildingOffice2} class="w-3.5 h-3.5" />
                            {"Authorized Partners"}
                        </div>
                        <h2 class="text-3xl md:text-4xl font-black mb-6 leading-tight">{"Verified NGOs & Municipal Departments"}</h2>
                        <p class="text-lg text-slate-300 leading-relaxed mb-8">
                            {"The financial data displayed below reflects funds managed directly by our "}
                            <span class="text-white font-bold">{"Registered NGOs"}</span>
                            {" and "}
                            <span class="text-white font-bold">{"Municipal Departments"}</span>
                            {". Rest assured, 100% of your donations are securely routed to the specific campaigns run by these organizations."}
                        </p>
                        <div class="flex flex-wrap justify-center gap-4 text-sm font-semibold text-slate-400">
                            <div class="flex items-center gap-2 bg-white/5 px-4 py-2 rounded-lg border border-white/10">
                                <Icon icon_id={IconId::HeroiconsOutlineBuildingLibrary} class="w-4 h-4 text-emerald-400" />
                                {"Government Audited"}
                            </div>
                            <div class="flex items-center gap-2 bg-white/5 px-4 py-2 rounded-lg border border-white/10">
                                <Icon icon_id={IconId::HeroiconsOutlineShieldCheck} class="w-4 h-4 text-blue-400" />
                                {"Secure Routing"}
                            </div>
                        </div>
                    </div>
                </section>

                <section class="bg-white rounded-3xl shadow-lg p-8">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-8">
                        <div class="bg-emerald-50 p-5 rounded-2xl">
                            <p class="text-xs font-bold text-emerald-700 uppercase tracking-widest">{"Total Donated"}</p>
                            <p class="text-2xl font-black text-slate-900 mt-1">{ summary.total_funds_donated.to_string() }</p>
                        </div>
                        <div class="bg-blue-50 p-5 rounded-2xl">
                            <p class="text-xs font-bold text-blue-700 uppercase tracking-widest">{"Funds Utilized"}</p>
                            <p class="text-2xl font-black text-slate-900 mt-1">{ summary.funds_utilized.to_string() }</p>
                            <p class="text-xs text-slate-500 mt-1">{ format!("{}% of donations spent", summary.utilization_percent()) }</p>
                        </div>
                        <div class="bg-amber-50 p-5 rounded-2xl">
                            <p class="text-xs font-bold text-amber-700 uppercase tracking-widest">{"Available Balance"}</p>
                            <p class="text-2xl font-black text-slate-900 mt-1">{ summary.available_balance.to_string() }</p>
                        </div>
                    </div>
                    <h3 class="text-xl font-bold text-slate-900 mb-6 flex items-center gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineSignal} class="w-6 h-6 text-blue-600" />
                        {"Active Project Funding"}
                    </h3>
                    { funding }
                    <p class="text-center text-xs text-slate-400 mt-8 flex items-center justify-center gap-1 border-t border-slate-100 pt-6">
                        <Icon icon_id={IconId::HeroiconsOutlineShieldCheck} class="w-3 h-3" />
                        {"All financial data is verified and audited regularly."}
                    </p>
                </section>

                <section class="pb-12">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl font-black text-slate-900">{"Recent Milestones"}</h2>
                    </div>
                    <div class="relative max-w-4xl mx-auto">
                        <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-0.5 bg-slate-200 -ml-[1px]" aria-hidden="true" />
                        { timeline }
                    </div>
                </section>
            </main>

            <TransparencyDetailModal issue={(*selected).clone()} {on_close} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_label_keeps_one_decimal() {
        assert_eq!(rate_label(50.0), "50%");
        assert_eq!(rate_label(66.666), "66.7%");
        assert_eq!(rate_label(0.0), "0%");
    }
}
