use crate::api::{SudhaarClient, Upload};
use crate::components::alert::Alert;
use crate::components::form::{bind_checkbox, bind_input, bind_select, bind_textarea, picked_file};
use shared::models::CampaignCategory;
use shared::validation::{CampaignForm, validate_banner_size, validate_campaign};
use wasm_bindgen_futures::spawn_local;
use web_sys::Url;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// A picked banner and its object URL for the preview.
#[derive(Debug, Clone, PartialEq)]
struct Banner {
    upload: Upload,
    preview: Option<String>,
}

impl Banner {
    fn release(&self) {
        if let Some(url) = &self.preview {
            let _ = Url::revoke_object_url(url);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CreateCampaignModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_success: Option<Callback<()>>,
}

#[function_component(CreateCampaignModal)]
pub fn create_campaign_modal(props: &CreateCampaignModalProps) -> Html {
    let title = use_state(String::new);
    let goal = use_state(String::new);
    let description = use_state(String::new);
    let category = use_state(String::new);
    let zakat = use_state(|| false);
    let banner = use_state(|| None::<Banner>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let launched = use_state(|| false);

    {
        let fields = [title.clone(), goal.clone(), description.clone(), category.clone()];
        let zakat = zakat.clone();
        let banner = banner.clone();
        let error = error.clone();
        let launched = launched.clone();
        use_effect_with(props.open, move |open| {
            if *open {
                for field in &fields {
                    field.set(String::new());
                }
                zakat.set(false);
                if let Some(old) = &*banner {
                    old.release();
                }
                banner.set(None);
                error.set(None);
                launched.set(false);
            }
            || ()
        });
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_banner = {
        let banner = banner.clone();
        let error = error.clone();
        Callback::from(move |event: Event| {
            let Some(file) = picked_file(&event) else {
                return;
            };
            // Size is known before reading, so oversized files never load.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let bytes = file.size().max(0.0) as u64;
            if let Err(err) = validate_banner_size(bytes) {
                error.set(Some(err.to_string()));
                return;
            }
            let banner = banner.clone();
            let error = error.clone();
            spawn_local(async move {
                match Upload::from_file(&file).await {
                    Ok(upload) => {
                        if let Some(old) = &*banner {
                            old.release();
                        }
                        let preview = Url::create_object_url_with_blob(&file).ok();
                        banner.set(Some(Banner { upload, preview }));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        })
    };

    let remove_banner = {
        let banner = banner.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(old) = &*banner {
                old.release();
            }
            banner.set(None);
        })
    };

    let submit = {
        let form = CampaignForm {
            title: (*title).clone(),
            description: (*description).clone(),
            category: (*category).clone(),
            goal: (*goal).clone(),
            zakat_eligible: *zakat,
            banner_bytes: banner.as_ref().map(|b| b.upload.size()),
        };
        let upload = banner.as_ref().map(|b| b.upload.clone());
        let error = error.clone();
        let loading = loading.clone();
        let launched = launched.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = match validate_campaign(&form) {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            let Some(upload) = upload.clone() else {
                return;
            };
            loading.set(true);
            error.set(None);
            let error = error.clone();
            let loading = loading.clone();
            let launched = launched.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                match SudhaarClient::shared().create_campaign(&request, &upload).await {
                    Ok(_) => {
                        launched.set(true);
                        if let Some(callback) = on_success {
                            callback.emit(());
                        }
                    }
                    Err(err) if err.is_network() => {
                        error.set(Some("Network error. Is the server running?".to_string()));
                    }
                    Err(err) => error.set(Some(format!("Submission Failed: {}", err.user_message()))),
                }
                loading.set(false);
            });
        })
    };

    let body = if *launched {
        html! {
            <div class="p-12 text-center space-y-6">
                <div class="w-24 h-24 bg-emerald-100 rounded-full flex items-center justify-center mx-auto">
                    <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-12 h-12 text-emerald-600" />
                </div>
                <div class="space-y-2">
                    <h3 class="text-3xl font-black text-slate-900">{"Campaign Launched!"}</h3>
                    <p class="text-slate-500 font-medium">{"Your initiative is being reviewed and will be live shortly."}</p>
                </div>
                <button onclick={close.clone()} class="btn btn-neutral w-full">{"Return to Dashboard"}</button>
            </div>
        }
    } else {
        html! {
            <form onsubmit={submit} class="p-6 space-y-5">
                <div class="space-y-2">
                    <label class="text-sm font-bold text-slate-700">{"Campaign Banner Image"}</label>
                    if let Some(picked) = &*banner {
                        <div class="relative w-full h-48 rounded-2xl overflow-hidden border-2 border-dashed border-blue-200 bg-blue-50 group">
                            if let Some(src) = &picked.preview {
                                <img src={src.clone()} alt="Preview" class="w-full h-full object-cover" />
                            } else {
                                <div class="w-full h-full flex items-center justify-center text-sm font-bold text-blue-700">{ &picked.upload.file_name }</div>
                            }
                            <div class="absolute inset-0 bg-black/40 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center">
                                <button type="button" onclick={remove_banner} class="btn btn-error btn-circle">
                                    <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-5 h-5" />
                                </button>
                            </div>
                        </div>
                    } else {
                        <label class="w-full h-40 flex flex-col items-center justify-center cursor-pointer border-2 border-dashed rounded-2xl border-slate-200 bg-slate-50 hover:border-blue-400">
                            <Icon icon_id={IconId::HeroiconsOutlinePhoto} class="w-10 h-10 text-slate-300 mb-2" />
                            <span class="text-sm font-bold text-blue-600">{"Click to upload banner"}</span>
                            <span class="text-[10px] text-slate-400 mt-1 uppercase font-black">{"JPG, PNG up to 10MB"}</span>
                            <input type="file" class="hidden" accept="image/*" onchange={on_banner} />
                        </label>
                    }
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div class="col-span-2 space-y-1">
                        <label class="text-xs font-black text-slate-400 uppercase">{"Campaign Title"}</label>
                        <input type="text" required=true placeholder="e.g. Clean Water Initiative" class="input input-bordered w-full"
                            value={(*title).clone()} oninput={bind_input(&title)} />
                    </div>
                    <div class="space-y-1">
                        <label class="text-xs font-black text-slate-400 uppercase">{"Category"}</label>
                        <select required=true class="select select-bordered w-full" onchange={bind_select(&category)}>
                            <option value="" selected={category.is_empty()}>{"Select..."}</option>
                            { for CampaignCategory::KNOWN.iter().map(|choice| {
                                let value = choice.as_str().to_string();
                                html! { <option value={value.clone()} selected={*category == value}>{ value.clone() }</option> }
                            }) }
                        </select>
                    </div>
                    <div class="space-y-1">
                        <label class="text-xs font-black text-slate-400 uppercase">{"Goal (PKR)"}</label>
                        <input type="number" required=true placeholder="50000" class="input input-bordered w-full"
                            value={(*goal).clone()} oninput={bind_input(&goal)} />
                    </div>
                </div>

                <div class="space-y-1">
                    <label class="text-xs font-black text-slate-400 uppercase">{"Mission Description"}</label>
                    <textarea required=true rows="4" placeholder="Describe how these funds will be used..." class="textarea textarea-bordered w-full resize-none"
                        value={(*description).clone()} oninput={bind_textarea(&description)} />
                </div>

                <label class={classes!(
                    "flex", "items-center", "gap-3", "p-4", "rounded-2xl", "cursor-pointer", "transition-all", "border-2",
                    if *zakat { "bg-emerald-50 border-emerald-200" } else { "bg-slate-50 border-transparent hover:border-slate-200" }
                )}>
                    <input type="checkbox" class="checkbox checkbox-success" checked={*zakat} onchange={bind_checkbox(&zakat)} />
                    <div>
                        <span class="block text-sm font-bold text-emerald-900">{"Zakat Eligible"}</span>
                        <span class="text-[10px] text-emerald-600 font-bold uppercase">{"Enable for faith-based giving"}</span>
                    </div>
                </label>

                if let Some(message) = &*error {
                    <Alert message={message.clone()} />
                }

                <button type="submit" disabled={*loading} class="btn btn-primary w-full">
                    if *loading {
                        <span class="loading loading-spinner loading-sm"></span>
                        {"Launching Initiative..."}
                    } else {
                        {"Publish Campaign"}
                    }
                </button>
            </form>
        }
    };

    html! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4">
            <div onclick={close.clone()} class="absolute inset-0 bg-slate-900/60 backdrop-blur-sm" />
            <div class="relative bg-white w-full max-w-lg rounded-3xl shadow-2xl overflow-hidden">
                <div class="px-6 py-5 border-b border-slate-100 flex items-center justify-between bg-white sticky top-0 z-10">
                    <div class="flex items-center gap-3">
                        <div class="p-2 bg-blue-50 rounded-lg">
                            <Icon icon_id={IconId::HeroiconsOutlineMegaphone} class="w-5 h-5 text-blue-600" />
                        </div>
                        <h2 class="text-xl font-bold text-slate-900">{"Start New Campaign"}</h2>
                    </div>
                    <button onclick={close} class="btn btn-ghost btn-circle btn-sm">
                        <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-5 h-5" />
                    </button>
                </div>
                <div class="max-h-[80vh] overflow-y-auto">{ body }</div>
            </div>
        </div>
    }
}
