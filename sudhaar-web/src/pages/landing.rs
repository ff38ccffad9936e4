use crate::api::SudhaarClient;
use crate::pages::grouped_count;
use crate::routes::MainRoute;
use chrono::{Datelike, Utc};
use i18nrs::yew::use_translation;
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

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct LandingStats {
    reported: u64,
    resolved: u64,
    citizens: u64,
    success_rate: f64,
}

#[derive(Properties, PartialEq)]
struct StatItemProps {
    number: String,
    label: &'static str,
    icon: IconId,
    color: &'static str,
}

#[function_component(StatItem)]
fn stat_item(props: &StatItemProps) -> Html {
    html! {
        <div class="text-center">
            <div class={classes!("flex", "justify-center", "mb-3", props.color)}>
                <Icon icon_id={props.icon} class="w-8 h-8" />
            </div>
            <div class="text-4xl font-black text-slate-900 mb-1">{ &props.number }</div>
            <div class="text-slate-500 font-medium text-sm uppercase tracking-wider">{ props.label }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    icon: IconId,
    title: &'static str,
    desc: &'static str,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="card bg-white border border-slate-100 shadow-sm hover:shadow-xl transition-shadow p-8 rounded-3xl">
            <div class="w-14 h-14 bg-blue-50 text-blue-600 rounded-2xl flex items-center justify-center mb-6">
                <Icon icon_id={props.icon} class="w-7 h-7" />
            </div>
            <h4 class="text-xl font-bold text-slate-900 mb-3">{ props.title }</h4>
            <p class="text-slate-500 leading-relaxed">{ props.desc }</p>
        </div>
    }
}

/// Public home page with live platform numbers.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let (i18n, ..) = use_translation();
    let stats = use_state(LandingStats::default);

    {
        let stats = stats.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = SudhaarClient::shared();
                let (issues, dashboard) =
                    futures::join!(client.issue_stats(), client.dashboard_stats());
                let mut next = LandingStats::default();
                match issues {
                    Ok(issues) => {
                        next.reported = issues.total_reported;
                        next.resolved = issues.issues_resolved;
                        next.success_rate = issues.resolution_rate;
                    }
                    Err(err) => log(&format!("Failed to fetch landing stats: {err}")),
                }
                if let Ok(dashboard) = dashboard {
                    next.citizens = dashboard.users.total_users;
                }
                stats.set(next);
            });
            || ()
        });
    }

    let year = Utc::now().year();

    html! {
        <div class="min-h-screen bg-white font-sans" data-theme="light">
            <nav class="fixed top-0 inset-x-0 z-50 bg-white/80 backdrop-blur border-b border-slate-100">
                <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                    <Link<MainRoute> to={MainRoute::Landing} classes="text-2xl font-black text-slate-900 tracking-tight">
                        { i18n.t("app.brand") }
                    </Link<MainRoute>>
                    <div class="flex items-center gap-3">
                        <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">{"Log In"}</Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Register} classes="btn btn-primary btn-sm">{"Get Started"}</Link<MainRoute>>
                    </div>
                </div>
            </nav>

            <header class="pt-32 pb-20 px-6 bg-gradient-to-b from-slate-50 to-white">
                <div class="max-w-4xl mx-auto space-y-8 text-center">
                    <span class="badge badge-outline badge-primary gap-2 py-3">
                        <span class="w-2 h-2 bg-emerald-500 rounded-full animate-pulse"></span>
                        {"Live in Narowal District"}
                    </span>
                    <h1 class="text-5xl md:text-7xl font-black text-slate-900 leading-tight">
                        {"Your Voice."}<br />
                        <span class="text-blue-600">{"Your City."}</span>
                    </h1>
                    <p class="text-lg text-slate-500 max-w-2xl mx-auto">
                        {"Sudhaar empowers citizens to report civic issues, track real-time resolution, and hold authorities accountable with complete transparency."}
                    </p>
                    <Link<MainRoute> to={MainRoute::Register} classes="btn btn-primary btn-lg">{"Get Started"}</Link<MainRoute>>
                    <div class="flex justify-center gap-8 text-slate-600">
                        <span class="flex items-center gap-2 text-sm font-semibold">
                            <Icon icon_id={IconId::HeroiconsOutlineShieldCheck} class="w-5 h-5 text-emerald-500" />
                            {"Verified by Authorities"}
                        </span>
                        <span class="flex items-center gap-2 text-sm font-semibold">
                            <Icon icon_id={IconId::HeroiconsOutlineSignal} class="w-5 h-5 text-blue-500" />
                            {"Live Tracking"}
                        </span>
                    </div>
                </div>
            </header>

            <section class="py-16 border-y border-slate-100">
                <div class="max-w-6xl mx-auto px-6 grid grid-cols-2 md:grid-cols-4 gap-8">
                    <StatItem number={grouped_count(stats.reported)} label="Issues Reported" icon={IconId::HeroiconsOutlineChartBar} color="text-blue-600" />
                    <StatItem number={grouped_count(stats.resolved)} label="Issues Resolved" icon={IconId::HeroiconsOutlineCheckCircle} color="text-emerald-600" />
                    <StatItem number={format!("{}+", grouped_count(stats.citizens))} label="Active Citizens" icon={IconId::HeroiconsOutlineUsers} color="text-amber-500" />
                    <StatItem number={format!("{:.0}%", stats.success_rate)} label="Success Rate" icon={IconId::HeroiconsOutlineArrowTrendingUp} color="text-purple-600" />
                </div>
            </section>

            <section class="py-24 px-6 max-w-6xl mx-auto">
                <div class="text-center max-w-2xl mx-auto mb-16">
                    <h2 class="text-sm font-bold text-blue-600 uppercase tracking-widest mb-3">{"Core Features"}</h2>
                    <h3 class="text-3xl md:text-4xl font-black text-slate-900 mb-6">{"Empowering Citizens,"}<br />{"Enabling Authorities."}</h3>
                    <p class="text-slate-500">
                        {"Sudhaar bridges the gap between the public and the government with a suite of transparency and management tools."}
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    <FeatureCard icon={IconId::HeroiconsOutlineMapPin} title="Geolocated Reporting"
                        desc="Pinpoint issues on an interactive map. Authorities see exactly where the problem is, reducing response time." />
                    <FeatureCard icon={IconId::HeroiconsOutlineCheckCircle} title="Transparent Tracking"
                        desc="Watch your report go from 'Pending' to 'Resolved'. Receive notifications at every step of the lifecycle." />
                    <FeatureCard icon={IconId::HeroiconsOutlineHeart} title="NGO Collaboration"
                        desc="Directly fund projects verified by municipal authorities. See exactly how funds are utilized with our audit dashboard." />
                </div>
            </section>

            <section class="py-24 px-6 bg-slate-50">
                <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-16 items-center">
                    <div class="space-y-6">
                        <span class="badge badge-primary badge-outline uppercase text-xs font-bold">{"Our Mission"}</span>
                        <h2 class="text-4xl font-black text-slate-900">
                            {"Building a Better"}<br />
                            <span class="text-blue-600">{"Future, Together."}</span>
                        </h2>
                        <p class="text-slate-600 leading-relaxed">
                            {"By connecting citizens directly with the Municipal Corporation and local NGOs, we turn complaints into data, and data into action."}
                        </p>
                        <p class="text-slate-600 leading-relaxed">
                            {"Every report you file creates a transparent digital trail that ensures accountability and rapid response for the Narowal community."}
                        </p>
                    </div>
                    <div class="rounded-3xl overflow-hidden shadow-2xl h-80">
                        <img src="https://images.unsplash.com/photo-1593113598332-cd288d649433?q=80&w=1600&auto=format&fit=crop"
                            alt="Community" class="w-full h-full object-cover" />
                    </div>
                </div>
            </section>

            <section id="cta" class="py-24 px-6 bg-slate-900 text-white text-center">
                <h2 class="text-4xl md:text-5xl font-black mb-8">{"Ready to make a difference?"}</h2>
                <p class="text-slate-300 max-w-2xl mx-auto mb-10">
                    {"Join the platform where voices become change. It takes less than 2 minutes to create an account and file your first report."}
                </p>
                <div class="flex justify-center gap-4">
                    <Link<MainRoute> to={MainRoute::Register} classes="btn btn-primary btn-lg">{"Get Started Now"}</Link<MainRoute>>
                    <a href="#cta" class="btn btn-outline btn-lg text-white">{"Learn More"}</a>
                </div>
            </section>

            <footer class="py-10 px-6 border-t border-slate-100 text-sm text-slate-500">
                <div class="max-w-6xl mx-auto flex flex-col md:flex-row justify-between gap-4">
                    <p>{ format!("© {year} Sudhaar Civic Management. All rights reserved.") }</p>
                    <div class="flex gap-6">
                        <Link<MainRoute> to={MainRoute::Privacy}>{"Privacy Policy"}</Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Terms}>{"Terms"}</Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Contact}>{"Contact Support"}</Link<MainRoute>>
                    </div>
                </div>
            </footer>
        </div>
    }
}
