use crate::api::SudhaarClient;
use crate::components::{FallbackImage, Loading, ProgressBar};
use crate::routes::MainRoute;
use shared::models::{Campaign, Donation};
use shared::time::format_timestamp;
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
pub struct CampaignDetailsProps {
    pub id: i64,
}

#[derive(Properties, PartialEq)]
struct FactProps {
    label: &'static str,
    value: String,
    icon: IconId,
    tone: &'static str,
}

#[function_component(Fact)]
fn fact(props: &FactProps) -> Html {
    html! {
        <div class={classes!("p-4", "rounded-2xl", props.tone)}>
            <div class="flex items-center gap-2 mb-2">
                <Icon icon_id={props.icon} class="w-5 h-5" />
                <span class="text-xs font-black uppercase">{ props.label }</span>
            </div>
            <p class="text-xl font-black text-slate-900">{ &props.value }</p>
        </div>
    }
}

fn donation_row(donation: &Donation) -> Html {
    html! {
        <tr key={donation.id} class="hover:bg-slate-50 transition-colors">
            <td class="px-8 py-4">
                <div class="font-bold text-slate-900">{ donation.donor_label() }</div>
                if !donation.is_anonymous {
                    if let Some(email) = &donation.donor_email {
                        <div class="text-sm text-slate-500">{ email }</div>
                    }
                }
            </td>
            <td class="px-8 py-4">
                <span class="text-lg font-black text-emerald-600">{ format!("Rs {}", donation.amount.grouped()) }</span>
            </td>
            <td class="px-8 py-4">
                <span class="text-sm text-slate-600">{ format_timestamp(donation.created_at.as_deref()) }</span>
            </td>
            <td class="px-8 py-4">
                <span class="badge badge-ghost font-bold uppercase">
                    { donation.payment_method.as_deref().filter(|m| !m.is_empty()).unwrap_or("N/A") }
                </span>
            </td>
        </tr>
    }
}

/// One campaign with its full donation ledger.
#[function_component(CampaignDetailsPage)]
pub fn campaign_details_page(props: &CampaignDetailsProps) -> Html {
    let navigator = use_navigator();
    let campaign = use_state(|| None::<Campaign>);
    let donations = use_state(Vec::<Donation>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let campaign = campaign.clone();
        let donations = donations.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            loading.set(true);
            error.set(None);
            spawn_local(async move {
                let client = SudhaarClient::shared();
                let (details, ledger) =
                    futures::join!(client.get_campaign(id), client.campaign_donations(id));
                match details {
                    Ok(found) => campaign.set(Some(found)),
                    Err(err) => {
                        log(&format!("Fetch Error: {err}"));
                        error.set(Some("Failed to load campaign details".to_string()));
                    }
                }
                match ledger {
                    Ok(list) => donations.set(list),
                    Err(err) => log(&format!("Donations unavailable: {err}")),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&MainRoute::ManageCampaigns);
        }
    });

    if *loading {
        return html! { <Loading message={Some("Loading campaign details...".to_string())} /> };
    }

    let Some(campaign) = (*campaign).clone().filter(|_| error.is_none()) else {
        return html! {
            <div class="min-h-screen bg-slate-50 flex items-center justify-center p-8">
                <div class="bg-white rounded-3xl p-12 max-w-md text-center shadow-xl">
                    <Icon icon_id={IconId::HeroiconsOutlineExclamationCircle} class="h-16 w-16 text-red-500 mx-auto mb-4" />
                    <h2 class="text-2xl font-black text-slate-900 mb-2">{"Error Loading Campaign"}</h2>
                    <p class="text-slate-600 mb-6">{ (*error).clone().unwrap_or_else(|| "Campaign not found".to_string()) }</p>
                    <button onclick={back} class="btn btn-primary">{"Back to Campaigns"}</button>
                </div>
            </div>
        };
    };

    html! {
        <div class="min-h-screen bg-slate-50 p-8">
            <div class="max-w-7xl mx-auto space-y-8">
                <button onclick={back} class="btn btn-ghost gap-2 text-slate-600">
                    <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-5 h-5" />
                    {"Back to Campaigns"}
                </button>

                <div class="bg-white rounded-3xl shadow-xl overflow-hidden">
                    <div class="grid md:grid-cols-2 gap-8">
                        <div class="h-96 bg-slate-100">
                            <FallbackImage src={campaign.best_image()} alt={campaign.title.clone()} class="w-full h-96" />
                        </div>
                        <div class="p-8 space-y-6">
                            <div>
                                <span class="badge badge-primary badge-soft font-black uppercase mb-3">{ campaign.category_label() }</span>
                                <h1 class="text-4xl font-black text-slate-900 mb-4">{ &campaign.title }</h1>
                                <p class="text-slate-600 leading-relaxed">{ &campaign.description }</p>
                            </div>
                            <div class="grid grid-cols-2 gap-4">
                                <Fact label="Goal" value={format!("Rs {}", campaign.goal_amount.grouped())} icon={IconId::HeroiconsOutlineFlag} tone="bg-emerald-50 text-emerald-600" />
                                <Fact label="Raised" value={format!("Rs {}", campaign.raised_amount.grouped())} icon={IconId::HeroiconsOutlineHeart} tone="bg-blue-50 text-blue-600" />
                                <Fact label="Donors" value={campaign.donor_count.to_string()} icon={IconId::HeroiconsOutlineUsers} tone="bg-purple-50 text-purple-600" />
                                <Fact label="Created" value={format_timestamp(campaign.created_at.as_deref())} icon={IconId::HeroiconsOutlineCalendar} tone="bg-amber-50 text-amber-600" />
                            </div>
                            <div>
                                <div class="flex justify-between items-center mb-2">
                                    <span class="text-sm font-bold text-slate-600">{"Progress"}</span>
                                    <span class="text-2xl font-black text-blue-600">{ format!("{}%", campaign.progress_percentage) }</span>
                                </div>
                                <ProgressBar percent={campaign.progress_percentage} />
                            </div>
                        </div>
                    </div>
                </div>

                <div class="bg-white rounded-3xl shadow-xl overflow-hidden">
                    <div class="px-8 py-6 border-b border-slate-100">
                        <h2 class="text-2xl font-black text-slate-900">{ format!("Donations ({})", donations.len()) }</h2>
                        <p class="text-slate-500 font-medium">{"Recent contributions to this campaign"}</p>
                    </div>
                    <div class="overflow-x-auto">
                        <table class="table w-full">
                            <thead>
                                <tr class="bg-slate-50">
                                    <th class="px-8 py-4 text-xs font-black text-slate-400 uppercase">{"Donor"}</th>
                                    <th class="px-8 py-4 text-xs font-black text-slate-400 uppercase">{"Amount"}</th>
                                    <th class="px-8 py-4 text-xs font-black text-slate-400 uppercase">{"Date"}</th>
                                    <th class="px-8 py-4 text-xs font-black text-slate-400 uppercase">{"Method"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                if donations.is_empty() {
                                    <tr>
                                        <td colspan="4" class="px-8 py-12 text-center">
                                            <div class="flex flex-col items-center gap-4">
                                                <Icon icon_id={IconId::HeroiconsOutlineUsers} class="h-16 w-16 text-slate-300" />
                                                <h3 class="text-lg font-black text-slate-900">{"No donations yet"}</h3>
                                                <p class="text-slate-500">{"Be the first to support this campaign!"}</p>
                                            </div>
                                        </td>
                                    </tr>
                                } else {
                                    { for donations.iter().map(donation_row) }
                                }
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
