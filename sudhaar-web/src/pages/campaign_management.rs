use crate::api::SudhaarClient;
use crate::browser;
use crate::components::form::bind_input;
use crate::components::{Alert, FallbackImage, ProgressBar};
use crate::routes::MainRoute;
use shared::filters::filter_managed;
use shared::models::{Campaign, CampaignQuery};
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

/// Table of the organisation's campaigns with search and delete.
#[function_component(CampaignManagementPage)]
pub fn campaign_management_page() -> Html {
    let navigator = use_navigator();
    let campaigns = use_state(Vec::<Campaign>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let search = use_state(String::new);
    let deleting = use_state(|| None::<i64>);

    {
        let campaigns = campaigns.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match SudhaarClient::shared()
                    .list_campaigns(&CampaignQuery::default())
                    .await
                {
                    Ok(list) => campaigns.set(list),
                    Err(err) => {
                        log(&format!("Fetch Error: {err}"));
                        error.set(Some("Failed to load campaigns".to_string()));
                        campaigns.set(Vec::new());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_delete = {
        let campaigns = campaigns.clone();
        let deleting = deleting.clone();
        Callback::from(move |id: i64| {
            if !browser::confirm("Are you sure you want to delete this campaign?") {
                return;
            }
            deleting.set(Some(id));
            let campaigns = campaigns.clone();
            let deleting = deleting.clone();
            spawn_local(async move {
                match SudhaarClient::shared().delete_campaign(id).await {
                    Ok(()) => {
                        let remaining = campaigns
                            .iter()
                            .filter(|campaign| campaign.id != id)
                            .cloned()
                            .collect();
                        campaigns.set(remaining);
                    }
                    Err(err) if err.is_network() => {
                        log(&format!("Delete Error: {err}"));
                        browser::alert("Network error occurred while deleting.");
                    }
                    Err(err) => browser::alert(&format!("Error: {}", err.user_message())),
                }
                deleting.set(None);
            });
        })
    };
    let to_create = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::NgoDashboard);
            }
        })
    };

    let filtered = filter_managed(&campaigns, &search);
    let rows = filtered.iter().map(|campaign| {
        let id = campaign.id;
        let open = {
            let navigator = navigator.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = &navigator {
                    navigator.push(&MainRoute::CampaignDetails { id });
                }
            })
        };
        let delete = {
            let on_delete = on_delete.clone();
            Callback::from(move |event: MouseEvent| {
                event.stop_propagation();
                on_delete.emit(id);
            })
        };
        let busy = *deleting == Some(id);
        html! {
            <tr key={id} onclick={open} class="hover:bg-blue-50/30 transition-all cursor-pointer">
                <td class="px-8 py-6">
                    <div class="flex items-center gap-5">
                        <div class="w-14 h-14 rounded-2xl bg-slate-100 overflow-hidden border-2 border-white shadow-sm">
                            <FallbackImage src={campaign.best_image()} alt={campaign.title.clone()} class="w-14 h-14" />
                        </div>
                        <div>
                            <div class="font-bold text-slate-900 text-lg">{ &campaign.title }</div>
                            <div class="text-xs text-slate-500 uppercase font-bold">{ campaign.category_label() }</div>
                        </div>
                    </div>
                </td>
                <td class="px-8 py-6">
                    if campaign.is_verified {
                        <span class="badge badge-success badge-soft gap-2 font-black uppercase">
                            <span class="w-2 h-2 rounded-full bg-emerald-600 animate-pulse"></span>{"Live"}
                        </span>
                    } else {
                        <span class="badge badge-warning badge-soft gap-2 font-black uppercase">
                            <span class="w-2 h-2 rounded-full bg-amber-600"></span>{"Pending"}
                        </span>
                    }
                </td>
                <td class="px-8 py-6">
                    <div class="w-48 space-y-2">
                        <div class="flex justify-between items-end">
                            <span class="text-lg font-black text-slate-900">{ format!("{}%", campaign.progress_percentage) }</span>
                            <span class="text-xs font-bold text-slate-400">{ format!("Rs {}", campaign.raised_amount.grouped()) }</span>
                        </div>
                        <ProgressBar percent={campaign.progress_percentage} />
                    </div>
                </td>
                <td class="px-8 py-6 text-right">
                    <button onclick={delete} disabled={busy} title="Delete Campaign" class="btn btn-ghost btn-square hover:text-red-600">
                        if busy {
                            <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-5 h-5 animate-spin" />
                        } else {
                            <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-5 h-5" />
                        }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <div class="p-8 space-y-8 bg-slate-50 min-h-screen">
            <div class="flex flex-col md:flex-row md:items-center justify-between gap-6">
                <div class="space-y-1">
                    <h1 class="text-4xl font-black text-slate-900">{"Campaign Manager"}</h1>
                    <p class="text-slate-500 font-medium">{"Manage your fundraising campaigns"}</p>
                </div>
                <button onclick={to_create} class="btn btn-primary btn-lg gap-2">
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-5 h-5" />
                    {"Create Campaign"}
                </button>
            </div>

            <div class="bg-white p-4 rounded-3xl shadow-sm border border-slate-100">
                <label class="input input-bordered w-full flex items-center gap-3">
                    <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-5 h-5 text-slate-400" />
                    <input type="text" class="grow" placeholder="Search campaigns..." value={(*search).clone()} oninput={bind_input(&search)} />
                </label>
            </div>

            if let Some(message) = &*error {
                <Alert message={message.clone()} />
            }

            <div class="bg-white rounded-3xl border border-slate-100 shadow-xl overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="table w-full">
                        <thead>
                            <tr class="bg-slate-50">
                                <th class="px-8 py-5 text-xs font-black text-slate-400 uppercase">{"Campaign"}</th>
                                <th class="px-8 py-5 text-xs font-black text-slate-400 uppercase">{"Status"}</th>
                                <th class="px-8 py-5 text-xs font-black text-slate-400 uppercase">{"Progress"}</th>
                                <th class="px-8 py-5 text-xs font-black text-slate-400 uppercase text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>{ for rows }</tbody>
                    </table>
                </div>

                if *loading {
                    <div class="p-24 flex flex-col items-center justify-center gap-4">
                        <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="h-16 w-16 animate-spin text-blue-600" />
                        <p class="text-slate-900 font-black text-lg">{"Loading campaigns..."}</p>
                    </div>
                } else if filtered.is_empty() {
                    <div class="p-24 text-center">
                        <div class="w-20 h-20 bg-slate-50 rounded-full flex items-center justify-center mx-auto mb-6">
                            <Icon icon_id={IconId::HeroiconsOutlineFlag} class="w-10 h-10 text-slate-300" />
                        </div>
                        <h3 class="text-xl font-black text-slate-900 mb-1">{"No campaigns found"}</h3>
                        <p class="text-slate-400 font-medium">
                            if search.is_empty() {
                                {"Create your first campaign to get started"}
                            } else {
                                { format!("No results for \"{}\"", *search) }
                            }
                        </p>
                    </div>
                }
            </div>
        </div>
    }
}
