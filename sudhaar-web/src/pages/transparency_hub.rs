use crate::api::{SudhaarClient, Upload};
use crate::browser;
use crate::components::form::{bind_input, bind_select, bind_textarea, picked_file};
use crate::components::Alert;
use shared::models::{Campaign, CampaignQuery, TransparencyReport};
use shared::time::format_display_date;
use shared::validation::validate_expense;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Expense disclosure upload for NGO campaigns.
#[function_component(TransparencyHubPage)]
pub fn transparency_hub_page() -> Html {
    let campaigns = use_state(Vec::<Campaign>::new);
    let reports = use_state(Vec::<TransparencyReport>::new);
    let reload = use_state(|| 0_u32);
    let campaign = use_state(String::new);
    let amount = use_state(String::new);
    let description = use_state(String::new);
    let receipt = use_state(|| None::<Upload>);
    let sending = use_state(|| false);
    let success = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let campaigns = campaigns.clone();
        let reports = reports.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let client = SudhaarClient::shared();
                let query = CampaignQuery::default();
                let (listed, disclosed) =
                    futures::join!(client.list_campaigns(&query), client.transparency_reports());
                match listed {
                    Ok(list) => campaigns.set(list),
                    Err(err) => log(&format!("Error loading campaigns: {err}")),
                }
                match disclosed {
                    Ok(list) => reports.set(list),
                    Err(err) => log(&format!("Error loading reports: {err}")),
                }
            });
            || ()
        });
    }

    let on_receipt = {
        let receipt = receipt.clone();
        Callback::from(move |event: Event| {
            let Some(file) = picked_file(&event) else {
                return;
            };
            let receipt = receipt.clone();
            spawn_local(async move {
                match Upload::from_file(&file).await {
                    Ok(upload) => receipt.set(Some(upload)),
                    Err(err) => log(&format!("Receipt unreadable: {err}")),
                }
            });
        })
    };

    let onsubmit = {
        let campaign = campaign.clone();
        let amount = amount.clone();
        let description = description.clone();
        let receipt = receipt.clone();
        let sending = sending.clone();
        let success = success.clone();
        let error = error.clone();
        let reload = reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = match validate_expense(&campaign, &amount, &description) {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            sending.set(true);
            let upload = (*receipt).clone();
            let sending = sending.clone();
            let success = success.clone();
            let campaign = campaign.clone();
            let amount = amount.clone();
            let description = description.clone();
            let receipt = receipt.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match SudhaarClient::shared()
                    .create_expense_report(&request, upload.as_ref())
                    .await
                {
                    Ok(_) => {
                        campaign.set(String::new());
                        amount.set(String::new());
                        description.set(String::new());
                        receipt.set(None);
                        success.set(true);
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        log(&format!("Expense upload failed: {err}"));
                        browser::alert("Error uploading report. Ensure you are the owner of this campaign.");
                    }
                }
                sending.set(false);
            });
        })
    };

    let another = {
        let success = success.clone();
        Callback::from(move |_: MouseEvent| success.set(false))
    };

    let own: Vec<&TransparencyReport> = reports
        .iter()
        .filter(|report| campaign_title(&campaigns, report.campaign).is_some())
        .collect();

    html! {
        <div class="p-8 max-w-4xl mx-auto">
            <div class="mb-8">
                <h1 class="text-3xl font-black text-slate-900">{"Transparency Hub"}</h1>
                <p class="text-slate-500 font-medium">{"Build trust by showing exactly how donations are spent."}</p>
            </div>

            <div class="bg-white p-8 rounded-3xl border border-slate-200 shadow-sm">
                if *success {
                    <div class="text-center py-10">
                        <div class="w-20 h-20 bg-emerald-50 text-emerald-500 rounded-full flex items-center justify-center mx-auto mb-4">
                            <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-10 h-10" />
                        </div>
                        <h2 class="text-2xl font-bold text-slate-900">{"Report Submitted!"}</h2>
                        <p class="text-slate-500 mb-6">{"Your transparency report is now attached to the campaign."}</p>
                        <button onclick={another} class="btn btn-link font-bold">{"Submit another report"}</button>
                    </div>
                } else {
                    <form {onsubmit} class="space-y-6">
                        if let Some(message) = &*error {
                            <Alert message={message.clone()} />
                        }
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <label class="form-control w-full">
                                <span class="label-text text-sm font-bold text-slate-700 mb-2">{"Select Campaign"}</span>
                                <select class="select select-bordered w-full" aria-label="Select campaign" onchange={bind_select(&campaign)}>
                                    <option value="" selected={campaign.is_empty()}>{"Choose a campaign..."}</option>
                                    { for campaigns.iter().map(|option| {
                                        let value = option.id.to_string();
                                        let selected = *campaign == value;
                                        html! {
                                            <option key={option.id} {selected} {value}>{ &option.title }</option>
                                        }
                                    }) }
                                </select>
                            </label>
                            <label class="form-control w-full">
                                <span class="label-text text-sm font-bold text-slate-700 mb-2">{"Amount Spent (PKR)"}</span>
                                <input type="number" class="input input-bordered w-full" placeholder="e.g. 5000" value={(*amount).clone()} oninput={bind_input(&amount)} />
                            </label>
                        </div>
                        <label class="form-control w-full">
                            <span class="label-text text-sm font-bold text-slate-700 mb-2">{"Description of Expense"}</span>
                            <textarea class="textarea textarea-bordered w-full" rows="3"
                                placeholder="What was this money used for? (e.g. Bought 20 blankets)"
                                value={(*description).clone()} oninput={bind_textarea(&description)} />
                        </label>
                        <div class="space-y-2">
                            <span class="text-sm font-bold text-slate-700">{"Upload Receipt / Proof Image"}</span>
                            <label class="block border-2 border-dashed border-slate-200 rounded-2xl p-8 text-center hover:border-blue-400 transition-colors cursor-pointer">
                                <input type="file" accept="image/*" class="hidden" onchange={on_receipt} />
                                <Icon icon_id={IconId::HeroiconsOutlineArrowUpTray} class="mx-auto text-slate-400 mb-2 w-8 h-8" />
                                <p class="text-sm text-slate-500">
                                    if let Some(upload) = &*receipt {
                                        <span class="text-blue-600 font-bold">{ &upload.file_name }</span>
                                    } else {
                                        {"Click to upload receipt photo"}
                                    }
                                </p>
                            </label>
                        </div>
                        <button type="submit" disabled={*sending} class="btn w-full bg-[#0F2854] text-white hover:bg-slate-800 gap-2">
                            if *sending {
                                <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-5 h-5 animate-spin" />
                                {"Uploading..."}
                            } else {
                                <Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-5 h-5" />
                                {"Submit Transparency Report"}
                            }
                        </button>
                    </form>
                }
            </div>

            if !own.is_empty() {
                <div class="mt-10">
                    <h2 class="text-xl font-black text-slate-900 mb-4">{"Submitted Reports"}</h2>
                    <div class="space-y-3">
                        { for own.iter().map(|report| disclosure_row(report, &campaigns)) }
                    </div>
                </div>
            }
        </div>
    }
}

fn campaign_title(campaigns: &[Campaign], id: Option<i64>) -> Option<&str> {
    let id = id?;
    campaigns
        .iter()
        .find(|campaign| campaign.id == id)
        .map(|campaign| campaign.title.as_str())
}

fn disclosure_row(report: &TransparencyReport, campaigns: &[Campaign]) -> Html {
    let title = campaign_title(campaigns, report.campaign).unwrap_or("Campaign");
    html! {
        <div key={report.id.unwrap_or_default()} class="bg-white p-5 rounded-2xl border border-slate-200 flex items-start justify-between gap-4">
            <div class="min-w-0">
                <p class="text-xs font-bold uppercase tracking-widest text-blue-600">{ title }</p>
                <p class="font-medium text-slate-800 truncate">{ &report.description }</p>
                <p class="text-xs text-slate-400 mt-1">{ format_display_date(report.created_at.as_deref()) }</p>
            </div>
            <div class="text-right shrink-0">
                if let Some(amount) = report.amount_spent {
                    <p class="font-black text-slate-900">{ amount.to_string() }</p>
                }
                if let Some(url) = report.receipt_image.clone() {
                    <a href={url} target="_blank" rel="noopener noreferrer" class="text-xs font-bold text-blue-600 hover:underline">{"View receipt"}</a>
                }
            </div>
        </div>
    }
}
