use crate::components::image::FallbackImage;
use crate::components::progress_bar::ProgressBar;
use shared::models::Campaign;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct CampaignCardProps {
    pub campaign: Campaign,
    #[prop_or_default]
    pub on_open: Option<Callback<i64>>,
}

/// Summary tile of a fundraising campaign.
#[function_component(CampaignCard)]
pub fn campaign_card(props: &CampaignCardProps) -> Html {
    let campaign = &props.campaign;
    let onclick = props.on_open.clone().map(|on_open| {
        let id = campaign.id;
        Callback::from(move |_: MouseEvent| on_open.emit(id))
    });

    html! {
        <div {onclick} class="card bg-base-100 border border-slate-100 rounded-2xl overflow-hidden shadow-sm hover:shadow-md transition-shadow cursor-pointer">
            <div class="h-40 w-full relative">
                <FallbackImage src={campaign.best_image()} alt={campaign.title.clone()} class="h-40 w-full" />
                <span class="absolute top-3 left-3 bg-blue-600/90 text-white text-[10px] font-bold px-2 py-1 rounded-full shadow-sm z-10">
                    { campaign.category_label() }
                </span>
                <div class="absolute top-3 right-3 z-10">
                    if campaign.is_verified {
                        <span class="bg-emerald-500/90 text-white text-[10px] font-bold px-2 py-1 rounded-lg flex items-center gap-1 shadow-sm">
                            <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-3 h-3" />
                            {"Verified"}
                        </span>
                    } else {
                        <span class="bg-amber-500/90 text-white text-[10px] font-bold px-2 py-1 rounded-lg flex items-center gap-1 shadow-sm">
                            <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-3 h-3" />
                            {"Pending"}
                        </span>
                    }
                </div>
            </div>
            <div class="p-4 space-y-4">
                <div>
                    <h3 class="font-bold text-slate-900 truncate">{ &campaign.title }</h3>
                    <p class="text-xs text-slate-500 line-clamp-2 mt-1">{ &campaign.description }</p>
                </div>
                <div class="space-y-2">
                    <div class="flex justify-between text-xs font-semibold">
                        <span class="text-blue-600 font-bold">{ format!("Rs. {}", campaign.raised_amount.grouped()) }</span>
                        <span class="text-slate-400">{ format!("{}%", campaign.funded_percent()) }</span>
                    </div>
                    <ProgressBar percent={campaign.funded_percent()} />
                    <div class="flex items-center gap-1 text-[10px] text-slate-400 font-medium">
                        <Icon icon_id={IconId::HeroiconsOutlineFlag} class="w-3 h-3" />
                        <span>{ format!("Goal: Rs. {}", campaign.goal_amount.grouped()) }</span>
                    </div>
                </div>
                <div class="pt-3 border-t border-slate-50 flex justify-between items-center">
                    <div class="flex items-center gap-1 text-xs text-slate-600 font-medium">
                        <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-4 h-4 text-slate-400" />
                        <span>{ format!("{} Donors", campaign.donor_count) }</span>
                    </div>
                    <span class="text-xs font-bold text-blue-600 flex items-center gap-1">
                        {"Details"}
                        <Icon icon_id={IconId::HeroiconsOutlineArrowTrendingUp} class="w-3 h-3" />
                    </span>
                </div>
            </div>
        </div>
    }
}
