use crate::api::{SudhaarClient, Upload};
use crate::browser;
use crate::components::form::{bind_input, bind_textarea, picked_file};
use shared::models::IssueCategory;
use shared::validation::{ReportForm, parse_coordinates, validate_report};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

fn category_style(category: &IssueCategory) -> (IconId, &'static str) {
    match category {
        IssueCategory::Roads => (IconId::HeroiconsOutlineWrenchScrewdriver, "bg-orange-500"),
        IssueCategory::Sanitation => (IconId::HeroiconsOutlineTruck, "bg-emerald-500"),
        IssueCategory::Water => (IconId::HeroiconsOutlineBeaker, "bg-blue-500"),
        IssueCategory::Electricity => (IconId::HeroiconsOutlineBolt, "bg-yellow-500"),
        IssueCategory::Health => (IconId::HeroiconsOutlineCheckCircle, "bg-red-500"),
        IssueCategory::Environment => (IconId::HeroiconsOutlineCheckCircle, "bg-green-600"),
        _ => (IconId::HeroiconsOutlineExclamationTriangle, "bg-slate-500"),
    }
}

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Details,
    Location,
    Done,
}

#[derive(Properties, PartialEq)]
pub struct ReportModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Fired after the backend accepted the report.
    #[prop_or_default]
    pub on_success: Option<Callback<()>>,
}

/// Three-step issue report: details, location and photo, confirmation.
#[function_component(ReportModal)]
pub fn report_modal(props: &ReportModalProps) -> Html {
    let step = use_state(|| Step::Details);
    let submitting = use_state(|| false);
    let category = use_state(String::new);
    let title = use_state(String::new);
    let description = use_state(String::new);
    let location = use_state(String::new);
    let coordinates = use_state(String::new);
    let photo = use_state(|| None::<Upload>);
    let reading_photo = use_state(|| false);

    // Every opening starts from a blank form.
    {
        let step = step.clone();
        let submitting = submitting.clone();
        let fields = [
            category.clone(),
            title.clone(),
            description.clone(),
            location.clone(),
            coordinates.clone(),
        ];
        let photo = photo.clone();
        use_effect_with(props.open, move |open| {
            if *open {
                step.set(Step::Details);
                submitting.set(false);
                for field in &fields {
                    field.set(String::new());
                }
                photo.set(None);
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

    let on_photo = {
        let photo = photo.clone();
        let reading_photo = reading_photo.clone();
        Callback::from(move |event: Event| {
            let Some(file) = picked_file(&event) else {
                return;
            };
            let photo = photo.clone();
            let reading_photo = reading_photo.clone();
            reading_photo.set(true);
            spawn_local(async move {
                match Upload::from_file(&file).await {
                    Ok(upload) => photo.set(Some(upload)),
                    Err(err) => browser::alert(&err.user_message()),
                }
                reading_photo.set(false);
            });
        })
    };

    let submit = {
        let step = step.clone();
        let submitting = submitting.clone();
        let form = ReportForm {
            title: (*title).clone(),
            description: (*description).clone(),
            category: (*category).clone(),
            location: (*location).clone(),
            coordinates: (*coordinates).clone(),
        };
        let photo = (*photo).clone();
        let on_success = props.on_success.clone();
        Callback::from(move |_: MouseEvent| {
            let request = match validate_report(&form) {
                Ok(request) => request,
                Err(err) => {
                    browser::alert(&err.to_string());
                    return;
                }
            };
            submitting.set(true);
            let step = step.clone();
            let submitting = submitting.clone();
            let photo = photo.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                match SudhaarClient::shared()
                    .create_issue(&request, photo.as_ref())
                    .await
                {
                    Ok(_) => {
                        step.set(Step::Done);
                        if let Some(callback) = on_success {
                            callback.emit(());
                        }
                    }
                    Err(err) if err.is_network() => {
                        browser::alert("Failed to submit issue. Please check your connection.");
                    }
                    Err(err) => {
                        browser::alert(&format!("Submission Failed: {}", err.user_message()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let details_step = html! {
        <div class="space-y-8">
            <div class="space-y-4">
                <label class="text-sm font-bold text-slate-700 uppercase tracking-wider">{"1. Select Category"}</label>
                <div class="grid grid-cols-2 sm:grid-cols-3 gap-4">
                    { for IssueCategory::report_choices().into_iter().map(|choice| {
                        let (icon, color) = category_style(&choice);
                        let value = choice.as_str().to_string();
                        let selected = *category == value;
                        let onclick = {
                            let category = category.clone();
                            let value = value.clone();
                            Callback::from(move |_: MouseEvent| category.set(value.clone()))
                        };
                        html! {
                            <button type="button" {onclick} class={classes!(
                                "relative", "flex", "flex-col", "items-center", "justify-center", "p-4", "rounded-2xl", "border-2", "transition-all", "h-32",
                                if selected { "border-blue-500 bg-blue-50 shadow-md" } else { "border-slate-100 bg-white hover:border-blue-200 hover:bg-slate-50" }
                            )}>
                                <div class={classes!("p-3", "rounded-full", "mb-3", "text-white", color)}>
                                    <Icon icon_id={icon} class="w-6 h-6" />
                                </div>
                                <span class="font-bold text-slate-800">{ value }</span>
                                if selected {
                                    <div class="absolute top-3 right-3 text-blue-500">
                                        <Icon icon_id={IconId::HeroiconsSolidCheckCircle} class="w-5 h-5" />
                                    </div>
                                }
                            </button>
                        }
                    }) }
                </div>
            </div>
            <div class="space-y-6">
                <div class="space-y-2">
                    <label class="text-sm font-bold text-slate-700 uppercase tracking-wider">{"2. Issue Title"}</label>
                    <input type="text" placeholder="e.g. Broken Street Light" class="input input-bordered w-full"
                        value={(*title).clone()} oninput={bind_input(&title)} />
                </div>
                <div class="space-y-2">
                    <label class="text-sm font-bold text-slate-700 uppercase tracking-wider">{"3. Description"}</label>
                    <textarea rows="3" placeholder="Describe the problem details..." class="textarea textarea-bordered w-full resize-none"
                        value={(*description).clone()} oninput={bind_textarea(&description)} />
                </div>
            </div>
        </div>
    };

    let pinned = parse_coordinates(&coordinates);
    let location_step = html! {
        <div class="space-y-8">
            <div class="space-y-4">
                <label class="text-sm font-bold text-slate-700 uppercase tracking-wider">{"4. Location"}</label>
                <input type="text" placeholder="Area or landmark, e.g. Circular Road" class="input input-bordered w-full"
                    value={(*location).clone()} oninput={bind_input(&location)} />
                <div class="relative">
                    <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400 h-4 w-4 pointer-events-none" />
                    <input type="text" placeholder="Pin as latitude, longitude e.g. 32.1014, 74.8800" class="input input-bordered w-full pl-10"
                        value={(*coordinates).clone()} oninput={bind_input(&coordinates)} />
                </div>
                if let Some((lat, lng)) = pinned {
                    <p class="text-xs text-emerald-600 font-medium">{ format!("Pinned at {lat:.6}, {lng:.6}") }</p>
                } else if !coordinates.is_empty() {
                    <p class="text-xs text-amber-600 font-medium">{"Enter the pin as two numbers separated by a comma."}</p>
                }
            </div>
            <div class="space-y-4">
                <label class="text-sm font-bold text-slate-700 uppercase tracking-wider">{"5. Evidence Photo"}</label>
                <label class={classes!(
                    "relative", "w-full", "h-32", "rounded-2xl", "border-2", "border-dashed", "flex", "flex-col", "items-center", "justify-center", "cursor-pointer", "transition-all",
                    if photo.is_some() { "border-emerald-400 bg-emerald-50" } else { "border-slate-300 bg-slate-50 hover:bg-white hover:border-blue-400" }
                )}>
                    <input type="file" accept="image/*" class="hidden" onchange={on_photo} />
                    if *reading_photo {
                        <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-6 h-6 animate-spin text-blue-500" />
                    } else if let Some(upload) = &*photo {
                        <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-6 h-6 text-emerald-600 mb-2" />
                        <p class="font-bold text-emerald-700 text-sm">{ &upload.file_name }</p>
                    } else {
                        <Icon icon_id={IconId::HeroiconsOutlineCamera} class="w-6 h-6 text-blue-500 mb-2" />
                        <p class="font-bold text-slate-600 text-sm">{"Click to Upload Photo"}</p>
                    }
                </label>
            </div>
        </div>
    };

    let done_step = html! {
        <div class="py-12 flex flex-col items-center text-center">
            <div class="h-28 w-28 bg-emerald-100 text-emerald-600 rounded-full flex items-center justify-center mb-6 shadow-xl shadow-emerald-200">
                <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-16 h-16" />
            </div>
            <h3 class="text-3xl font-black text-slate-900 mb-3">{"Submission Successful!"}</h3>
            <p class="text-slate-500 text-lg mb-8 max-w-sm leading-relaxed">
                {"Your report has been securely recorded. Thank you for making Narowal better."}
            </p>
            <button onclick={close.clone()} class="btn btn-primary w-full">{"Return to Dashboard"}</button>
        </div>
    };

    let footer = match *step {
        Step::Done => html! {},
        current => {
            let back = {
                let step = step.clone();
                Callback::from(move |_: MouseEvent| step.set(Step::Details))
            };
            let next = {
                let step = step.clone();
                Callback::from(move |_: MouseEvent| step.set(Step::Location))
            };
            let (label, onclick, disabled) = if current == Step::Details {
                (
                    "Next Step",
                    next,
                    title.trim().is_empty() || category.is_empty(),
                )
            } else {
                (
                    "Submit Report",
                    submit,
                    pinned.is_none() || *submitting,
                )
            };
            html! {
                <div class="px-8 py-6 bg-slate-50 border-t border-slate-200 flex justify-between items-center">
                    if current == Step::Location {
                        <button onclick={back} class="btn btn-ghost gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-5 h-5" />
                            {"Back"}
                        </button>
                    } else {
                        <div />
                    }
                    <button {onclick} {disabled} class="btn btn-primary gap-2 px-8">
                        if *submitting {
                            <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-5 h-5 animate-spin" />
                            {"Submitting..."}
                        } else {
                            { label }
                            <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-5 h-5" />
                        }
                    </button>
                </div>
            }
        }
    };

    html! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4 sm:p-6 font-sans">
            <div class="fixed inset-0 bg-slate-900/80 backdrop-blur-md" onclick={close.clone()} />
            <div class="relative w-full max-w-2xl bg-white rounded-3xl shadow-2xl overflow-hidden flex flex-col max-h-[90vh]">
                <div class="px-8 py-6 border-b border-slate-100 flex items-center justify-between bg-white">
                    <div>
                        <h2 class="text-2xl font-black text-slate-900">{"Report Issue"}</h2>
                        <p class="text-slate-500 text-sm">{"Submit a new civic problem for review"}</p>
                    </div>
                    <button onclick={close} class="btn btn-ghost btn-circle">
                        <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-6 h-6" />
                    </button>
                </div>
                <div class="p-8 overflow-y-auto bg-white">
                    { match *step {
                        Step::Details => details_step,
                        Step::Location => location_step,
                        Step::Done => done_step,
                    } }
                </div>
                { footer }
            </div>
        </div>
    }
}
