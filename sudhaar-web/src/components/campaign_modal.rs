use crate::api::SudhaarClient;
use crate::browser;
use crate::components::alert::{Alert, AlertKind};
use crate::components::form::{bind_checkbox, bind_input, bind_select};
use crate::components::image::FallbackImage;
use crate::components::progress_bar::ProgressBar;
use gloo_timers::callback::Timeout;
use shared::models::{Amount, Campaign};
use shared::validation::validate_donation;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// `wa.me` link for a contact number, separators stripped.
pub fn whatsapp_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
    format!("https://wa.me/{digits}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaymentTab {
    Bank,
    Mobile,
}

#[derive(Properties, PartialEq)]
pub struct CampaignModalProps {
    pub campaign: Option<Campaign>,
    /// Position in the listing; picks the placeholder accounts.
    #[prop_or_default]
    pub index: usize,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_donated: Option<Callback<()>>,
}

/// Campaign details with payment instructions and a form to record a transfer.
#[function_component(CampaignModal)]
pub fn campaign_modal(props: &CampaignModalProps) -> Html {
    let tab = use_state(|| PaymentTab::Bank);
    let copied = use_state(|| None::<&'static str>);
    let raised = use_state(|| Amount::ZERO);
    let donors = use_state(|| 0_u32);
    let amount = use_state(String::new);
    let method = use_state(|| "bank_transfer".to_string());
    let transaction = use_state(String::new);
    let anonymous = use_state(|| false);
    let submitting = use_state(|| false);
    let notice = use_state(|| None::<(AlertKind, String)>);

    {
        let raised = raised.clone();
        let donors = donors.clone();
        let amount = amount.clone();
        let transaction = transaction.clone();
        let notice = notice.clone();
        use_effect_with(props.campaign.clone(), move |campaign| {
            if let Some(campaign) = campaign {
                raised.set(campaign.raised_amount);
                donors.set(campaign.donor_count);
                browser::lock_body_scroll(true);
            }
            amount.set(String::new());
            transaction.set(String::new());
            notice.set(None);
            move || browser::lock_body_scroll(false)
        });
    }

    let Some(campaign) = props.campaign.clone() else {
        return html! {};
    };
    let payment = campaign.payment_details(props.index);
    let percent = raised.percent_of(campaign.goal_amount).min(100);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let copy = |field: &'static str, text: String| {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let text = text.clone();
            spawn_local(async move {
                match browser::copy_text(&text).await {
                    Ok(()) => {
                        copied.set(Some(field));
                        let reset = copied.clone();
                        Timeout::new(2_000, move || reset.set(None)).forget();
                    }
                    Err(err) => log(&format!("Failed to copy: {err}")),
                }
            });
        })
    };
    let copy_icon = |field: &str| {
        if *copied == Some(field) {
            html! { <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-4 h-4 text-emerald-500" /> }
        } else {
            html! { <Icon icon_id={IconId::HeroiconsOutlineClipboardDocument} class="w-4 h-4 text-slate-300" /> }
        }
    };

    let record_donation = {
        let campaign_id = campaign.id;
        let amount = amount.clone();
        let method = method.clone();
        let transaction = transaction.clone();
        let anonymous = anonymous.clone();
        let submitting = submitting.clone();
        let notice = notice.clone();
        let raised = raised.clone();
        let donors = donors.clone();
        let on_donated = props.on_donated.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = match validate_donation(
                campaign_id,
                &amount,
                *anonymous,
                &method,
                &transaction,
            ) {
                Ok(request) => request,
                Err(err) => {
                    notice.set(Some((AlertKind::Error, err.to_string())));
                    return;
                }
            };
            submitting.set(true);
            let amount = amount.clone();
            let transaction = transaction.clone();
            let submitting = submitting.clone();
            let notice = notice.clone();
            let raised = raised.clone();
            let donors = donors.clone();
            let on_donated = on_donated.clone();
            spawn_local(async move {
                match SudhaarClient::shared().create_donation(&request).await {
                    Ok(donation) => {
                        raised.set(*raised + donation.amount);
                        donors.set(*donors + 1);
                        amount.set(String::new());
                        transaction.set(String::new());
                        notice.set(Some((
                            AlertKind::Success,
                            "Thank you! Your donation has been recorded.".to_string(),
                        )));
                        if let Some(callback) = on_donated {
                            callback.emit(());
                        }
                    }
                    Err(err) => {
                        log(&format!("Failed to record donation: {err}"));
                        notice.set(Some((AlertKind::Error, err.user_message())));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let select_tab = |target: PaymentTab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };
    let tab_class = |target: PaymentTab| {
        classes!(
            "flex-1", "py-2.5", "text-sm", "font-bold", "rounded-lg", "transition-all", "flex", "items-center", "justify-center", "gap-2",
            if *tab == target { "bg-white text-slate-900 shadow-sm" } else { "text-slate-500 hover:text-slate-700" }
        )
    };

    let payment_panel = match *tab {
        PaymentTab::Bank => html! {
            <div class="bg-blue-50 border border-blue-100 p-4 rounded-xl">
                <h3 class="font-bold text-blue-900 text-sm mb-3">{ &payment.bank_name }</h3>
                <div class="space-y-3">
                    <div onclick={copy("title", payment.account_title.clone())} class="bg-white p-3 rounded-lg border border-blue-100/50 cursor-pointer hover:border-blue-300 transition-colors">
                        <p class="text-[10px] text-slate-400 font-bold uppercase mb-0.5">{"Account Title"}</p>
                        <div class="flex justify-between items-center">
                            <p class="font-bold text-slate-800">{ &payment.account_title }</p>
                            { copy_icon("title") }
                        </div>
                    </div>
                    <div onclick={copy("iban", payment.iban.clone())} class="bg-white p-3 rounded-lg border border-blue-100/50 cursor-pointer hover:border-blue-300 transition-colors">
                        <p class="text-[10px] text-slate-400 font-bold uppercase mb-0.5">{"IBAN Number"}</p>
                        <div class="flex justify-between items-center">
                            <p class="font-mono font-bold text-slate-800 text-sm tracking-tight">{ &payment.iban }</p>
                            { copy_icon("iban") }
                        </div>
                    </div>
                </div>
            </div>
        },
        PaymentTab::Mobile => html! {
            <div class="bg-emerald-50 border border-emerald-100 p-4 rounded-xl">
                <h3 class="font-bold text-emerald-900 text-sm mb-3">{ &payment.wallet_provider }</h3>
                <div onclick={copy("mobile", payment.wallet_number.clone())} class="bg-white p-3 rounded-lg border border-emerald-100/50 cursor-pointer hover:border-emerald-300 transition-colors">
                    <div class="flex justify-between items-start mb-1">
                        <p class="text-[10px] text-slate-400 font-bold uppercase">{"Merchant Mobile Number"}</p>
                        { copy_icon("mobile") }
                    </div>
                    <p class="font-mono font-bold text-slate-800 text-xl tracking-wider">{ &payment.wallet_number }</p>
                    <p class="text-xs text-slate-500 mt-1">{ format!("Title: {}", payment.wallet_title) }</p>
                </div>
            </div>
        },
    };

    html! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4 sm:p-6">
            <div onclick={close.clone()} class="absolute inset-0 bg-slate-900/80 backdrop-blur-sm" />
            <div class="relative w-full max-w-6xl bg-white rounded-3xl shadow-2xl overflow-hidden flex flex-col max-h-[90vh]">
                <div class="flex items-center justify-between px-6 py-4 border-b border-slate-100 bg-white shrink-0">
                    <div>
                        <h2 class="text-lg font-black text-slate-900 line-clamp-1">{ &campaign.title }</h2>
                        <div class="flex items-center gap-2 mt-1">
                            if campaign.is_verified {
                                <span class="text-xs font-bold text-blue-600 bg-blue-50 px-2 py-0.5 rounded flex items-center gap-1">
                                    <Icon icon_id={IconId::HeroiconsOutlineShieldCheck} class="w-3 h-3" />
                                    {"Verified NGO"}
                                </span>
                            }
                            if campaign.zakat_eligible {
                                <span class="text-xs font-bold text-emerald-600 bg-emerald-50 px-2 py-0.5 rounded">{"Zakat Eligible"}</span>
                            }
                        </div>
                    </div>
                    <button onclick={close} class="btn btn-ghost btn-circle btn-sm">
                        <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-5 h-5" />
                    </button>
                </div>

                <div class="overflow-y-auto flex-1 bg-slate-50/50">
                    <div class="flex flex-col lg:flex-row h-full">
                        <div class="flex-1 p-6 lg:p-8 space-y-6">
                            <div class="rounded-2xl overflow-hidden shadow-sm h-56 relative">
                                <FallbackImage src={campaign.best_image()} alt={campaign.title.clone()} class="h-56 w-full" />
                                <div class="absolute inset-0 bg-gradient-to-t from-slate-900/90 via-slate-900/40 to-transparent" />
                                <div class="absolute bottom-4 left-4 text-white">
                                    <p class="font-bold text-lg flex items-center gap-2">
                                        <Icon icon_id={IconId::HeroiconsOutlineBuildingOffice2} class="w-5 h-5 text-emerald-400" />
                                        { campaign.ngo_display_name() }
                                    </p>
                                    <p class="text-xs text-slate-300 ml-7">{ campaign.category_label() }</p>
                                </div>
                            </div>
                            <div>
                                <h3 class="text-slate-900 font-bold text-lg mb-2">{"About this campaign"}</h3>
                                <p class="text-slate-600 leading-relaxed">{ &campaign.description }</p>
                            </div>
                            <div class="bg-white p-5 rounded-2xl border border-slate-100 shadow-sm">
                                <h4 class="font-bold text-slate-900 mb-4 flex items-center gap-2 text-sm uppercase tracking-wide">
                                    <Icon icon_id={IconId::HeroiconsOutlineArrowTrendingUp} class="w-4 h-4 text-blue-600" />
                                    {"Budget Transparency"}
                                </h4>
                                <div class="space-y-4">
                                    if campaign.budget_items.is_empty() {
                                        <p class="text-sm text-slate-400 italic">{"Budget details available upon request."}</p>
                                    } else {
                                        { for campaign.budget_items.iter().map(|item| html! {
                                            <div>
                                                <div class="flex justify-between text-xs font-bold text-slate-700 mb-1.5">
                                                    <span>{ &item.item_name }</span>
                                                    <span>{ item.total_cost.to_string() }</span>
                                                </div>
                                                <ProgressBar percent={item.funded_amount.percent_of(item.total_cost)} tone="progress-info" />
                                            </div>
                                        }) }
                                    }
                                </div>
                            </div>
                        </div>

                        <div class="w-full lg:w-[420px] bg-white border-l border-slate-100 p-6 lg:p-8 flex flex-col gap-6">
                            <div class="text-center bg-slate-50 rounded-2xl p-6 border border-slate-100">
                                <p class="text-xs font-bold text-slate-400 uppercase mb-1">{"Total Raised"}</p>
                                <p class="text-3xl font-black text-slate-900 tracking-tight">{ raised.to_string() }</p>
                                <div class="my-4"><ProgressBar {percent} tone="progress-success" /></div>
                                <div class="flex justify-between text-xs font-bold text-slate-500">
                                    <span>{ format!("{percent}% funded") }</span>
                                    <span>{ format!("{} Donors", *donors) }</span>
                                </div>
                            </div>

                            <div class="flex p-1 bg-slate-100 rounded-xl">
                                <button onclick={select_tab(PaymentTab::Bank)} class={tab_class(PaymentTab::Bank)}>
                                    <Icon icon_id={IconId::HeroiconsOutlineBuildingLibrary} class="w-4 h-4" />
                                    {"Bank Transfer"}
                                </button>
                                <button onclick={select_tab(PaymentTab::Mobile)} class={tab_class(PaymentTab::Mobile)}>
                                    <Icon icon_id={IconId::HeroiconsOutlineDevicePhoneMobile} class="w-4 h-4" />
                                    {"Mobile Wallet"}
                                </button>
                            </div>

                            { payment_panel }

                            <div class="bg-slate-50 p-4 rounded-xl border border-slate-100 text-xs text-slate-500 leading-relaxed">
                                <p class="mb-2">{"After transferring, please send a screenshot of the receipt for verification."}</p>
                                <div class="flex flex-wrap gap-2">
                                    <a href={format!("mailto:{}", payment.contact_email)} class="btn btn-xs btn-outline">{"Email Receipt"}</a>
                                    <a href={whatsapp_link(&payment.contact_phone)} target="_blank" rel="noopener noreferrer" class="btn btn-xs btn-outline">
                                        {"WhatsApp Receipt"}
                                        <Icon icon_id={IconId::HeroiconsOutlineArrowTopRightOnSquare} class="w-3 h-3" />
                                    </a>
                                </div>
                            </div>

                            <form onsubmit={record_donation} class="space-y-3 border-t border-slate-100 pt-6">
                                <h4 class="font-bold text-slate-900 text-sm uppercase tracking-wide">{"Record Your Donation"}</h4>
                                if let Some((kind, message)) = &*notice {
                                    <Alert message={message.clone()} kind={*kind} />
                                }
                                <input type="text" inputmode="decimal" placeholder="Amount (PKR)" class="input input-bordered w-full"
                                    value={(*amount).clone()} oninput={bind_input(&amount)} />
                                <select class="select select-bordered w-full" onchange={bind_select(&method)}>
                                    <option value="bank_transfer" selected={*method == "bank_transfer"}>{"Bank Transfer"}</option>
                                    <option value="mobile_wallet" selected={*method == "mobile_wallet"}>{"Mobile Wallet"}</option>
                                </select>
                                <input type="text" placeholder="Transaction ID (optional)" class="input input-bordered w-full"
                                    value={(*transaction).clone()} oninput={bind_input(&transaction)} />
                                <label class="label cursor-pointer justify-start gap-3">
                                    <input type="checkbox" class="checkbox checkbox-sm" checked={*anonymous} onchange={bind_checkbox(&anonymous)} />
                                    <span class="label-text">{"Donate anonymously"}</span>
                                </label>
                                <button type="submit" class="btn btn-primary w-full" disabled={*submitting}>
                                    if *submitting {
                                        <span class="loading loading-spinner loading-sm"></span>
                                        {"Recording..."}
                                    } else {
                                        {"Record Donation"}
                                    }
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::whatsapp_link;

    #[test]
    fn whatsapp_link_strips_separators() {
        assert_eq!(whatsapp_link("0300-123 4567"), "https://wa.me/03001234567");
    }
}
