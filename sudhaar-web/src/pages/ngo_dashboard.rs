use crate::api::SudhaarClient;
use crate::components::{Alert, CampaignCard, CreateCampaignModal};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::filters::NgoTotals;
use shared::models::{Campaign, CampaignQuery};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Properties, PartialEq)]
struct TotalTileProps {
    label: &'static str,
    value: String,
    note: String,
    icon: IconId,
    tone: &'static str,
}

#[function_component(TotalTile)]
fn total_tile(props: &TotalTileProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-3xl border-2 border-slate-200 shadow-sm hover:border-blue-300 hover:shadow-xl transition-all">
            <div class="flex justify-between items-start mb-5">
                <div class={classes!("p-4", "rounded-2xl", "shadow-sm", props.tone)}>
                    <Icon icon_id={props.icon} class="w-6 h-6" />
                </div>
                <span class={classes!("text-[10px]", "font-bold", "px-3", "py-1.5", "rounded-full", props.tone)}>
                    { &props.note }
                </span>
            </div>
            <p class="text-sm font-bold text-slate-500 uppercase tracking-tight mb-1">{ props.label }</p>
            <p class="text-4xl font-black text-slate-900">{ &props.value }</p>
        </div>
    }
}

/// NGO home: headline totals and every campaign the organisation runs.
#[function_component(NgoDashboardPage)]
pub fn ngo_dashboard_page() -> Html {
    let heading = use_selector(|state: &AppState| {
        state
            .user()
            .map(|user| {
                user.organization()
                    .map_or_else(|| user.display_name(), str::to_string)
            })
            .unwrap_or_else(|| "Welcome Partner".to_string())
    });
    let campaigns = use_state(Vec::<Campaign>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0_u32);
    let create_open = use_state(|| false);

    {
        let campaigns = campaigns.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            loading.set(true);
            spawn_local(async move {
                match SudhaarClient::shared()
                    .list_campaigns(&CampaignQuery::default())
                    .await
                {
                    Ok(list) => {
                        error.set(None);
                        campaigns.set(list);
                    }
                    Err(err) => {
                        log(&format!("Fetch failed: {err}"));
                        error.set(Some("Failed to load campaigns.".to_string()));
                    }
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
    let open_create = {
        let create_open = create_open.clone();
        Callback::from(move |_: MouseEvent| create_open.set(true))
    };
    let close_create = {
        let create_open = create_open.clone();
        Callback::from(move |()| create_open.set(false))
    };

    let totals = NgoTotals::from_campaigns(&campaigns);
    let plural = if totals.campaigns == 1 { "" } else { "s" };

    let body = if *loading {
        html! {
            <div class="flex flex-col items-center justify-center py-20">
                <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="h-16 w-16 animate-spin text-blue-600 mb-6" />
                <p class="text-slate-400 font-bold text-lg mb-2">{"Syncing with Server..."}</p>
                <p class="text-slate-400 text-sm">{"Loading your campaigns"}</p>
            </div>
        }
    } else if campaigns.is_empty() {
        html! {
            <div class="flex flex-col items-center justify-center py-20 text-center border-2 border-dashed border-slate-200 rounded-3xl bg-slate-50/50">
                <div class="w-20 h-20 bg-slate-100 rounded-full flex items-center justify-center mb-6">
                    <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-10 h-10 text-slate-400" />
                </div>
                <h3 class="text-slate-900 font-black text-xl mb-2">{"No Active Campaigns"}</h3>
                <p class="text-slate-500 text-sm max-w-sm mb-6 leading-relaxed">
                    {"Launch your first campaign to start making a difference in your community and track donations in real-time."}
                </p>
                <button onclick={open_create.clone()} class="btn btn-primary gap-2">
                    <Icon icon_id={IconId::HeroiconsOutlinePlusCircle} class="w-5 h-5" />
                    {"Create First Campaign"}
                </button>
            </div>
        }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for campaigns.iter().map(|campaign| html! {
                    <CampaignCard key={campaign.id} campaign={campaign.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 via-blue-50/20 to-slate-50">
            <div class="p-4 md:p-8 max-w-7xl mx-auto space-y-8 pb-20">
                <div class="flex flex-col md:flex-row md:items-center justify-between gap-6 bg-white p-8 rounded-3xl border-2 border-slate-200 shadow-lg">
                    <div class="flex-1">
                        <div class="inline-flex items-center gap-2 px-3 py-1.5 mb-3 bg-blue-100 text-blue-700 text-xs font-bold uppercase rounded-full tracking-wider border border-blue-200">
                            <Icon icon_id={IconId::HeroiconsOutlineSparkles} class="h-3.5 w-3.5" />
                            {"NGO Portal"}
                        </div>
                        <h1 class="text-4xl md:text-5xl font-black text-slate-900 mb-2">{ (*heading).clone() }</h1>
                        <p class="text-slate-500 font-medium text-lg">
                            {"Manage your social impact campaigns and track community contributions."}
                        </p>
                    </div>
                    <div class="flex gap-3">
                        <button
                            onclick={{ let refresh = refresh.clone(); Callback::from(move |_: MouseEvent| refresh.emit(())) }}
                            disabled={*loading}
                            class="btn btn-outline gap-2"
                        >
                            <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class={classes!("w-5", "h-5", (*loading).then_some("animate-spin"))} />
                            <span class="hidden sm:inline">{"Refresh"}</span>
                        </button>
                        <button onclick={open_create} class="btn btn-primary gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlinePlusCircle} class="w-5 h-5" />
                            {"Launch Campaign"}
                        </button>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <TotalTile
                        label="Total Funds Raised"
                        value={totals.raised.to_string()}
                        note={"Lifetime total".to_string()}
                        icon={IconId::HeroiconsOutlineHeart}
                        tone="bg-pink-100 text-pink-600"
                    />
                    <TotalTile
                        label="Total Campaigns"
                        value={totals.campaigns.to_string()}
                        note={format!("{} active running", totals.active)}
                        icon={IconId::HeroiconsOutlineMegaphone}
                        tone="bg-blue-100 text-blue-600"
                    />
                    <TotalTile
                        label="Total Donors"
                        value={super::grouped_count(totals.donors)}
                        note={"Across all campaigns".to_string()}
                        icon={IconId::HeroiconsOutlineUsers}
                        tone="bg-purple-100 text-purple-600"
                    />
                </div>

                if let Some(message) = &*error {
                    <Alert title={Some("Error Loading Campaigns".to_string())} message={message.clone()} />
                }

                <div class="bg-white rounded-3xl border-2 border-slate-200 shadow-lg overflow-hidden">
                    <div class="px-6 py-5 border-b-2 border-slate-100 flex items-center justify-between bg-slate-50">
                        <div class="flex items-center gap-3">
                            <div class="p-2 bg-blue-100 rounded-xl">
                                <Icon icon_id={IconId::HeroiconsOutlineFlag} class="h-5 w-5 text-blue-600" />
                            </div>
                            <div>
                                <h2 class="text-xl font-black text-slate-900">{"All Campaigns"}</h2>
                                <p class="text-xs text-slate-500 font-medium">{ format!("Showing {} campaign{plural}", totals.campaigns) }</p>
                            </div>
                        </div>
                        <Link<MainRoute> to={MainRoute::ManageCampaigns} classes="text-blue-600 text-sm font-bold hover:underline flex items-center gap-1.5">
                            {"Manage All"}
                            <Icon icon_id={IconId::HeroiconsOutlineArrowUpRight} class="w-4 h-4" />
                        </Link<MainRoute>>
                    </div>
                    <div class="p-6">{ body }</div>
                </div>
            </div>

            <CreateCampaignModal open={*create_open} on_close={close_create} on_success={Some(refresh)} />
        </div>
    }
}
