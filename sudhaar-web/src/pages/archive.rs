use crate::api::SudhaarClient;
use crate::components::form::bind_input;
use crate::components::{Alert, FallbackImage, TransparencyDetailModal};
use crate::routes::MainRoute;
use chrono::Utc;
use shared::filters::{ALL_CATEGORIES, filter_archive, unique_categories};
use shared::models::{Issue, IssueQuery};
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

#[derive(Properties, PartialEq)]
struct ArchiveCardProps {
    issue: Issue,
    on_open: Callback<Issue>,
}

#[function_component(ArchiveCard)]
fn archive_card(props: &ArchiveCardProps) -> Html {
    let issue = &props.issue;
    let onclick = {
        let on_open = props.on_open.clone();
        let issue = issue.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(issue.clone()))
    };
    let age = issue_age(issue.time_text.as_deref(), issue.created_at.as_deref(), Utc::now());

    html! {
        <div {onclick} class="group bg-white rounded-2xl border border-slate-200 overflow-hidden cursor-pointer hover:shadow-lg hover:border-emerald-300 transition-all duration-300 hover:-translate-y-1">
            <div class="h-48 overflow-hidden relative">
                <FallbackImage src={issue.best_image().map(str::to_string)} alt={issue.title.clone()} class="w-full h-48 grayscale-[20%] group-hover:grayscale-0" />
                <div class="absolute top-3 right-3 z-10 bg-emerald-100 text-emerald-800 text-[10px] font-bold px-2 py-1 rounded-md border border-emerald-200 shadow-sm flex items-center gap-1">
                    <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-2.5 h-2.5" />
                    {"VERIFIED RESOLVED"}
                </div>
            </div>
            <div class="p-5">
                <div class="flex items-center gap-2 mb-2">
                    <span class="inline-flex items-center gap-1 px-2 py-0.5 rounded bg-slate-100 text-slate-500 text-[10px] font-bold uppercase tracking-wide">
                        <Icon icon_id={IconId::HeroiconsOutlineTag} class="w-2.5 h-2.5" />
                        { issue.category.as_str() }
                    </span>
                    <span class="inline-flex items-center gap-1 px-2 py-0.5 rounded bg-slate-100 text-slate-500 text-[10px] font-bold uppercase tracking-wide">
                        <Icon icon_id={IconId::HeroiconsOutlineCalendar} class="w-2.5 h-2.5" />
                        { age }
                    </span>
                </div>
                <h3 class="font-bold text-slate-900 leading-tight mb-2 group-hover:text-emerald-700 transition-colors">{ &issue.title }</h3>
                <p class="text-xs text-slate-500 line-clamp-2 mb-4">{ issue.body() }</p>
                <div class="pt-4 border-t border-slate-100 flex items-center justify-between text-xs text-slate-400">
                    <span class="flex items-center gap-1">
                        <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-3 h-3" />
                        { &issue.location }
                    </span>
                    <span class="font-medium text-slate-600">{ format!("By: {}", issue.best_author()) }</span>
                </div>
            </div>
        </div>
    }
}

/// Permanent record of resolved issues with search and category chips.
#[function_component(ArchivePage)]
pub fn archive_page() -> Html {
    let navigator = use_navigator();
    let issues = use_state(Vec::<Issue>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let search = use_state(String::new);
    let category = use_state(|| ALL_CATEGORIES.to_string());
    let selected = use_state(|| None::<Issue>);

    {
        let issues = issues.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let query = IssueQuery {
                    ordering: Some("-created_at".to_string()),
                    ..IssueQuery::resolved()
                };
                match SudhaarClient::shared().list_issues(&query).await {
                    Ok(list) => issues.set(list),
                    Err(err) if err.is_network() => {
                        log(&format!("Error loading resolved issues: {err}"));
                        error.set(Some("Failed to load resolved issues. Please try again.".to_string()));
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&MainRoute::Transparency);
        }
    });
    let clear = {
        let search = search.clone();
        let category = category.clone();
        Callback::from(move |_: MouseEvent| {
            search.set(String::new());
            category.set(ALL_CATEGORIES.to_string());
        })
    };
    let on_open = {
        let selected = selected.clone();
        Callback::from(move |issue: Issue| selected.set(Some(issue)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    let chips = unique_categories(issues.iter().map(|issue| issue.category.as_str().to_string()));
    let filtered = filter_archive(&issues, &search, &category);
    let narrowed = !search.trim().is_empty() || *category != ALL_CATEGORIES;

    let grid = if *loading {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                { for (0..8).map(|i| html! {
                    <div key={i} class="bg-white rounded-2xl border border-slate-200 shadow-sm animate-pulse">
                        <div class="h-48 bg-slate-200"></div>
                        <div class="p-5">
                            <div class="h-4 bg-slate-200 rounded mb-2"></div>
                            <div class="h-3 bg-slate-200 rounded"></div>
                        </div>
                    </div>
                }) }
            </div>
        }
    } else if filtered.is_empty() {
        html! {
            <div class="text-center py-20 bg-white rounded-3xl border border-dashed border-slate-200">
                <div class="w-16 h-16 bg-slate-50 rounded-full flex items-center justify-center mx-auto mb-4 text-slate-300">
                    <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-6 h-6" />
                </div>
                <h3 class="text-lg font-bold text-slate-900">{"No records found"}</h3>
                <p class="text-slate-500 text-sm">
                    { if narrowed { "Try adjusting your search or filters." } else { "No resolved issues in the archive yet." } }
                </p>
                if narrowed {
                    <button onclick={clear} class="mt-4 btn btn-link text-emerald-600 font-bold">{"Clear Filters"}</button>
                }
            </div>
        }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                { for filtered.iter().map(|issue| html! {
                    <ArchiveCard key={issue.id} issue={(*issue).clone()} on_open={on_open.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-slate-50 font-sans pb-20 pt-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-10">
                    <button onclick={back} class="flex items-center gap-2 text-slate-400 hover:text-slate-700 font-bold text-sm mb-3 transition-colors">
                        <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
                        {"Back to Transparency"}
                    </button>
                    <h1 class="text-3xl font-black text-slate-900">{"Resolved Archive"}</h1>
                    <p class="text-slate-500 mt-1">
                        if *loading {
                            {"Loading resolved issues..."}
                        } else {
                            { format!("A permanent public record of {} successfully resolved civic issues.", issues.len()) }
                        }
                    </p>
                </div>

                <div class="bg-white p-4 rounded-2xl shadow-sm border border-slate-200 mb-8 flex flex-col md:flex-row gap-4 items-center">
                    <label class="input input-bordered input-sm h-10 w-full md:w-96 flex items-center gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="h-4 w-4 text-slate-400" />
                        <input type="text" class="grow" placeholder="Search by title or location..." value={(*search).clone()} oninput={bind_input(&search)} />
                    </label>
                    <div class="flex items-center gap-2 overflow-x-auto w-full pb-1 md:pb-0">
                        <Icon icon_id={IconId::HeroiconsOutlineFunnel} class="w-4 h-4 text-slate-400 mr-2 shrink-0" />
                        { for chips.into_iter().map(|chip| {
                            let active = *category == chip;
                            let pick = {
                                let category = category.clone();
                                let chip = chip.clone();
                                Callback::from(move |_: MouseEvent| category.set(chip.clone()))
                            };
                            html! {
                                <button key={chip.clone()} onclick={pick} class={classes!(
                                    "px-4", "py-2", "rounded-full", "text-xs", "font-bold", "whitespace-nowrap", "transition-all", "border", "capitalize",
                                    if active { "bg-emerald-600 text-white border-emerald-600 shadow-md" } else { "bg-white text-slate-600 border-slate-200 hover:border-emerald-300 hover:text-emerald-600" }
                                )}>
                                    { chip }
                                </button>
                            }
                        }) }
                    </div>
                </div>

                if let Some(message) = &*error {
                    <div class="mb-4">
                        <Alert message={message.clone()} />
                    </div>
                }

                { grid }
            </div>

            <TransparencyDetailModal issue={(*selected).clone()} {on_close} />
        </div>
    }
}
