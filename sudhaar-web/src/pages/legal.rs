use crate::routes::MainRoute;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
struct LegalDocumentProps {
    title: &'static str,
    icon: IconId,
    #[prop_or_default]
    intro: Option<Html>,
    sections: &'static [(&'static str, &'static str)],
}

#[function_component(LegalDocument)]
fn legal_document(props: &LegalDocumentProps) -> Html {
    html! {
        <div class="min-h-screen bg-slate-50 py-16 px-6" data-theme="light">
            <div class="max-w-3xl mx-auto bg-white rounded-3xl shadow-sm border border-slate-100 p-10">
                <Link<MainRoute> to={MainRoute::Landing} classes="inline-flex items-center gap-2 text-sm font-bold text-slate-500 hover:text-blue-600 mb-8">
                    <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
                    {"Back to Home"}
                </Link<MainRoute>>
                <div class="flex items-center gap-4 mb-8">
                    <div class="p-3 bg-blue-50 rounded-2xl">
                        <Icon icon_id={props.icon} class="w-8 h-8 text-blue-600" />
                    </div>
                    <h1 class="text-3xl font-black text-slate-900">{ props.title }</h1>
                </div>
                <div class="space-y-4 text-slate-600 leading-relaxed">
                    if let Some(intro) = &props.intro {
                        { intro.clone() }
                    }
                    { for props.sections.iter().map(|(heading, body)| html! {
                        <>
                            <h3 class="text-xl font-bold text-slate-800 mt-8">{ *heading }</h3>
                            <p>{ *body }</p>
                        </>
                    }) }
                </div>
            </div>
        </div>
    }
}

const PRIVACY: &[(&str, &str)] = &[
    (
        "1. Data We Collect",
        "We collect information you provide directly to us, such as when you create an account, report an issue, or communicate with us. This includes your name, email, and geolocation data for issue reporting.",
    ),
    (
        "2. How We Use Your Data",
        "We use your data to facilitate civic engagement, including verifying issue reports, coordinating with municipal authorities, and providing you with updates on your reported issues.",
    ),
    (
        "3. Data Security",
        "We implement appropriate technical measures to protect your personal data against unauthorized access or disclosure.",
    ),
];

const TERMS: &[(&str, &str)] = &[
    (
        "1. Acceptance of Terms",
        "By accessing or using Sudhaar, you agree to be bound by these Terms. If you disagree with any part of the terms, you may not access the service.",
    ),
    (
        "2. User Conduct",
        "You agree to use the platform only for lawful purposes. You are prohibited from posting false reports, spam, or abusive content.",
    ),
    (
        "3. Termination",
        "We may terminate or suspend your account immediately, without prior notice or liability, for any reason whatsoever, including without limitation if you breach the Terms.",
    ),
];

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    let intro = html! {
        <>
            <p><strong>{"Last Updated:"}</strong>{" December 2025"}</p>
            <p>{"At Sudhaar, we take your privacy seriously. This policy describes how we collect and use your data."}</p>
        </>
    };
    html! {
        <LegalDocument title="Privacy Policy" icon={IconId::HeroiconsOutlineShieldCheck} intro={Some(intro)} sections={PRIVACY} />
    }
}

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    html! {
        <LegalDocument title="Terms of Service" icon={IconId::HeroiconsOutlineDocumentText} sections={TERMS} />
    }
}
