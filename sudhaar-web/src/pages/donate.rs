use crate::api::SudhaarClient;
use crate::components::form::bind_input;
use crate::components::{Alert, CampaignModal, FallbackImage, ProgressBar};
use shared::filters::{ALL_CATEGORIES, filter_campaigns, unique_categories};
use shared::models::{Campaign, CampaignQuery};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Properties, PartialEq)]
struct DonationTileProps {
    campaign: Campaign,
    index: usize,
    on_open: Callback<usize>,
}

#[function_component(DonationTile)]
fn donation_tile(props: &DonationTileProps) -> Html {
    let campaign = &props.campaign;
    let onclick = {
        let on_open = props.on_open.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_open.emit(index))
    };
    let percent = campaign.raised_amount.percent_of(campaign.goal_amount);

    html! {
        <div {onclick} class="group bg-white rounded-3xl border border-slate-100 shadow-sm hover:shadow-xl hover:-translate-y-1 transition-all duration-300 cursor-pointer overflow-hidden flex flex-col">
            <div class="h-48 overflow-hidden relative">
                <FallbackImage src={campaign.best_image()} alt={campaign.title.clone()} class="w-full h-48" />
                <div class="absolute top-3 left-3 z-10 bg-white/90 backdrop-blur-md px-3 py-1 rounded-full text-xs font-bold text-slate-700 shadow-sm flex items-center gap-1">
                    if campaign.is_verified {
                        <Icon icon_id={IconId::HeroiconsOutlineBuildingOffice2} class="w-3 h-3 text-blue-500" />
                    }
                    { campaign.ngo_display_name() }
                </div>
                <div class="absolute top-3 right-3 z-10 bg-emerald-500 text-white px-3 py-1 rounded-full text-xs font-bold shadow-sm">
                    { campaign.category_label() }
                </div>
            </div>
            <div class="p-6 flex flex-col flex-1">
                <h3 class="text-xl font-bold text-slate-900 mb-2 leading-tight group-hover:text-emerald-600 transition-colors">
                    { &campaign.title }
                </h3>
                <p class="text-slate-500 text-sm line-clamp-2 mb-6 flex-1">{ &campaign.description }</p>
                <div class="mb-4">
                    <div class="flex justify-between text-xs font-bold text-slate-700 mb-2">
                        <span>{ format!("{percent}% Funded") }</span>
                        <span>{ campaign.goal_amount.to_string() }</span>
                    </div>
                    <ProgressBar {percent} tone="progress-success" />
                </div>
                <div class="flex items-center justify-between pt-4 border-t border-slate-50">
                    <div class="flex items-center gap-1 text-xs font-bold text-slate-500">
                        <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-4 h-4" />
                        { format!("{} Donors", campaign.donor_count) }
                    </div>
                    <span class="flex items-center gap-2 text-emerald-600 font-bold text-sm group-hover:translate-x-1 transition-transform">
                        {"Donate Now"}
                        <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-4 h-4" />
                    </span>
                </div>
            </div>
        </div>
    }
}

/// Browse active campaigns and donate through the payment modal.
#[function_component(DonatePage)]
pub fn donate_page() -> Html {
    let campaigns = use_state(Vec::<Campaign>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let search = use_state(String::new);
    let category = use_state(|| ALL_CATEGORIES.to_string());
    let selected = use_state(|| None::<usize>);
    let reload = use_state(|| 0_u32);

    {
        let campaigns = campaigns.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match SudhaarClient::shared()
                    .list_campaigns(&CampaignQuery::active())
                    .await
                {
                    Ok(list) => campaigns.set(list),
                    Err(err) if err.is_network() => {
                        log(&format!("Error loading campaigns: {err}"));
                        error.set(Some("Failed to load campaigns.".to_string()));
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_open = {
        let selected = selected.clone();
        Callback::from(move |index: usize| selected.set(Some(index)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };
    let on_donated = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };

    let chips = unique_categories(campaigns.iter().map(Campaign::category_label));
    let filtered = filter_campaigns(&campaigns, &search, &category);
    let index = (*selected).unwrap_or_default();
    let open_campaign = (*selected).and_then(|index| campaigns.get(index).cloned());

    let grid = if *loading {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for (0..3).map(|i| html! {
                    <div key={i} class="bg-white rounded-3xl border border-slate-100 shadow-sm animate-pulse h-96" />
                }) }
            </div>
        }
    } else if filtered.is_empty() {
        html! {
            <div class="text-center py-20 bg-white rounded-3xl border border-dashed border-slate-200">
                <div class="w-16 h-16 bg-slate-50 rounded-full flex items-center justify-center mx-auto mb-4">
                    <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-6 h-6 text-slate-300" />
                </div>
                <p class="text-slate-500 font-medium">{"No campaigns found."}</p>
            </div>
        }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for filtered.iter().map(|campaign| {
                    let position = campaigns
                        .iter()
                        .position(|candidate| candidate.id == campaign.id)
                        .unwrap_or_default();
                    html! {
                        <DonationTile
                            key={campaign.id}
                            campaign={(*campaign).clone()}
                            index={position}
                            on_open={on_open.clone()}
                        />
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-slate-50 font-sans pb-20">
            <div class="bg-slate-900 pt-16 pb-24 px-6 text-center rounded-b-[2.5rem] shadow-2xl relative overflow-hidden">
                <div class="relative z-10 max-w-3xl mx-auto">
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-emerald-500/20 border border-emerald-500/30 text-emerald-300 text-xs font-bold uppercase tracking-wider mb-6">
                        <Icon icon_id={IconId::HeroiconsOutlineBuildingOffice2} class="w-3.5 h-3.5" />
                        {"Partnered NGOs"}
                    </div>
                    <h1 class="text-4xl md:text-5xl font-black text-white mb-6 tracking-tight">
                        {"Fund Real Change."}<br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-emerald-400 to-blue-400">
                            {"Directly & Transparently."}
                        </span>
                    </h1>
                    <p class="text-slate-400 text-lg leading-relaxed mb-8">
                        {"Browse verified campaigns from trusted NGOs. Funds go directly to their official bank accounts."}
                    </p>
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 -mt-12 relative z-20">
                <div class="bg-white p-2 rounded-2xl shadow-xl flex flex-col md:flex-row items-center gap-2 mb-8 border border-slate-100">
                    <label class="input input-ghost bg-slate-50 flex-1 w-full flex items-center gap-3">
                        <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="h-5 w-5 text-slate-400" />
                        <input type="text" class="grow" placeholder="Search causes or NGOs..." value={(*search).clone()} oninput={bind_input(&search)} />
                    </label>
                    <div class="flex items-center gap-2 w-full md:w-auto overflow-x-auto p-1">
                        { for chips.into_iter().map(|chip| {
                            let active = *category == chip;
                            let pick = {
                                let category = category.clone();
                                let chip = chip.clone();
                                Callback::from(move |_: MouseEvent| category.set(chip.clone()))
                            };
                            html! {
                                <button key={chip.clone()} onclick={pick} class={classes!(
                                    "px-6", "py-3", "rounded-xl", "text-sm", "font-bold", "transition-all", "whitespace-nowrap",
                                    if active { "bg-slate-900 text-white shadow-lg" } else { "bg-slate-100 text-slate-600 hover:bg-slate-200" }
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

            <CampaignModal campaign={open_campaign} {index} {on_close} on_donated={Some(on_donated)} />
        </div>
    }
}
