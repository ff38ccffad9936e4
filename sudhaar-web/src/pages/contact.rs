use crate::browser;
use crate::components::form::{bind_input, bind_textarea};
use crate::config::FrontendConfig;
use crate::routes::MainRoute;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

/// `mailto:` link carrying the contact form.
pub fn contact_mailto(to: &str, name: &str, from: &str, message: &str) -> String {
    let subject = format!("Sudhaar enquiry from {}", name.trim());
    let body = format!("{}\n\n{} <{}>", message.trim(), name.trim(), from.trim());
    format!(
        "mailto:{to}?subject={}&body={}",
        String::from(js_sys::encode_uri_component(&subject)),
        String::from(js_sys::encode_uri_component(&body))
    )
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let config = FrontendConfig::new();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    let onsubmit = {
        let to = config.support_email.clone();
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            browser::open_url(&contact_mailto(&to, &name, &email, &message));
        })
    };

    let detail = |icon: IconId, label: &'static str, value: String| {
        html! {
            <div class="flex items-center gap-4">
                <div class="p-3 bg-blue-500/30 rounded-xl"><Icon icon_id={icon} class="w-6 h-6" /></div>
                <div>
                    <p class="text-xs text-blue-200 uppercase font-bold tracking-wider">{ label }</p>
                    <p class="font-medium">{ value }</p>
                </div>
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-slate-50 flex items-center justify-center p-6" data-theme="light">
            <div class="max-w-5xl w-full grid md:grid-cols-2 bg-white rounded-3xl shadow-xl overflow-hidden">
                <div class="bg-blue-600 text-white p-12">
                    <Link<MainRoute> to={MainRoute::Landing} classes="inline-flex items-center gap-2 text-sm font-bold text-blue-100 hover:text-white mb-10">
                        <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
                        {"Back to Home"}
                    </Link<MainRoute>>
                    <h1 class="text-3xl font-black mb-6">{"Get in touch"}</h1>
                    <p class="text-blue-100 mb-12 text-lg">{"Have a suggestion or need help? We'd love to hear from you."}</p>
                    <div class="space-y-8">
                        { detail(IconId::HeroiconsOutlineEnvelope, "Email", config.support_email.clone()) }
                        { detail(IconId::HeroiconsOutlinePhone, "Phone", config.support_phone.clone()) }
                        { detail(IconId::HeroiconsOutlineMapPin, "Office", "Technology Park, Lahore, Pakistan".to_string()) }
                    </div>
                </div>
                <form class="p-12 space-y-6" {onsubmit}>
                    <div>
                        <label class="block text-sm font-bold text-slate-700 mb-2">{"Name"}</label>
                        <input type="text" class="input input-bordered w-full" placeholder="Your Name"
                            value={(*name).clone()} oninput={bind_input(&name)} />
                    </div>
                    <div>
                        <label class="block text-sm font-bold text-slate-700 mb-2">{"Email"}</label>
                        <input type="email" class="input input-bordered w-full" placeholder="you@company.com"
                            value={(*email).clone()} oninput={bind_input(&email)} />
                    </div>
                    <div>
                        <label class="block text-sm font-bold text-slate-700 mb-2">{"Message"}</label>
                        <textarea rows="4" class="textarea textarea-bordered w-full" placeholder="How can we help?"
                            value={(*message).clone()} oninput={bind_textarea(&message)} />
                    </div>
                    <button type="submit" class="btn btn-neutral w-full" disabled={message.trim().is_empty()}>{"Send Message"}</button>
                </form>
            </div>
        </div>
    }
}
