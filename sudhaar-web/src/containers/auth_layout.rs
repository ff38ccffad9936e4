use crate::routes::MainRoute;
use chrono::{Datelike, Utc};
use i18nrs::yew::use_translation;
use yew::{Children, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    pub children: Children,
    pub title: String,
    pub subtitle: String,
}

/// Split screen used by the sign-in and registration forms.
#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let year = Utc::now().year();

    html! {
        <div class="min-h-screen w-full flex bg-white font-sans">
            <aside class="hidden lg:flex lg:fixed lg:inset-y-0 lg:left-0 lg:w-1/2 overflow-hidden bg-[#020617] flex-col justify-between p-20">
                <div class="relative z-10 inline-flex items-center gap-4">
                    <div class="w-16 h-16 bg-white/[0.03] rounded-[22px] flex items-center justify-center border border-white/10 shadow-2xl">
                        <Icon icon_id={IconId::HeroiconsOutlineBuildingOffice2} class="text-blue-500 w-8 h-8" />
                    </div>
                    <div>
                        <h1 class="text-5xl font-black text-white tracking-tighter uppercase">{ i18n.t("app.brand") }</h1>
                        <span class="text-[10px] font-black tracking-[0.3em] text-slate-500 uppercase">{ i18n.t("app.region") }</span>
                    </div>
                </div>
                <div class="relative z-10 space-y-12">
                    <div class="max-w-sm">
                        <div class="flex items-center gap-2 mb-4 text-emerald-400 font-black text-[10px] uppercase tracking-[0.2em]">
                            <Icon icon_id={IconId::HeroiconsSolidBolt} class="w-4 h-4" />
                            <span>{"Live Updates"}</span>
                        </div>
                        <p class="text-3xl text-slate-100 font-bold leading-[1.15] tracking-tight">
                            { format!("\"{}\"", i18n.t("app.tagline")) }
                        </p>
                    </div>
                    <div class="flex items-center gap-6 p-6 bg-white/[0.02] border border-white/[0.05] rounded-[28px] w-fit">
                        <div class="flex -space-x-3">
                            { for ["A", "B", "C"].into_iter().map(|letter| html! {
                                <div class="w-10 h-10 rounded-full border-2 border-[#020617] bg-slate-800 flex items-center justify-center text-[10px] font-bold text-white">
                                    { letter }
                                </div>
                            }) }
                            <div class="w-10 h-10 rounded-full border-2 border-[#020617] bg-blue-600 flex items-center justify-center text-[10px] font-black text-white">
                                {"+1k"}
                            </div>
                        </div>
                        <div class="text-xs">
                            <span class="block text-white font-bold tracking-tight">{"Community Verified"}</span>
                            <span class="text-slate-500 font-medium">{"Join 1,240+ active users"}</span>
                        </div>
                    </div>
                </div>
            </aside>

            <main class="w-full lg:w-1/2 lg:ml-[50%] flex flex-col justify-center px-10 sm:px-20 md:px-32 py-16 relative min-h-screen">
                <Link<MainRoute> to={MainRoute::Landing} classes="absolute top-8 left-10 md:left-32 btn btn-sm btn-outline gap-2">
                    <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
                    <span class="text-xs font-semibold uppercase tracking-wider">{"Back to Hub"}</span>
                </Link<MainRoute>>
                <div class="max-w-md w-full mx-auto">
                    <header class="mb-12">
                        <div class="badge badge-lg gap-2 bg-blue-50 border-blue-100 text-blue-600 text-xs font-bold uppercase mb-6">
                            <Icon icon_id={IconId::HeroiconsOutlineGlobeAlt} class="w-4 h-4" />
                            <span>{"Narowal District"}</span>
                        </div>
                        <h2 class="text-5xl font-black text-slate-900 mb-4 tracking-tighter leading-[0.95]">{ &props.title }</h2>
                        <p class="text-slate-500 text-lg font-medium leading-relaxed">{ &props.subtitle }</p>
                    </header>
                    <section class="relative">
                        { props.children.clone() }
                    </section>
                    <footer class="mt-12 pt-8 border-t border-slate-50 text-center lg:text-left">
                        <p class="text-[10px] text-slate-400 font-bold uppercase tracking-widest">
                            { format!("© {year} Sudhaar Project Narowal • Secure 256-bit SSL") }
                        </p>
                    </footer>
                </div>
            </main>
        </div>
    }
}
