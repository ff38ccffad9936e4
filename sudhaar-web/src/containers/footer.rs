use crate::config::FrontendConfig;
use crate::routes::MainRoute;
use chrono::{Datelike, Utc};
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[function_component(Footer)]
pub fn footer() -> Html {
    let (i18n, ..) = use_translation();
    let config = FrontendConfig::new();
    let year = Utc::now().year();

    let quick_links = [
        ("footer.report_issue", MainRoute::Dashboard),
        ("footer.explore_map", MainRoute::Map),
        ("footer.my_reports", MainRoute::MyReports),
        ("footer.ngo", MainRoute::Donate),
    ];
    let company_links = [
        ("footer.contact", MainRoute::Contact),
        ("footer.terms", MainRoute::Terms),
        ("footer.privacy", MainRoute::Privacy),
    ];
    let link_list = |links: &[(&str, MainRoute)]| -> Html {
        html! {
            <ul class="space-y-2">
                { for links.iter().map(|(key, route)| html! {
                    <li>
                        <Link<MainRoute> to={route.clone()} classes="text-slate-400 hover:text-white transition-colors text-sm">
                            { i18n.t(key) }
                        </Link<MainRoute>>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <footer class="w-full bg-slate-900 text-white pt-12 pb-6 mt-10 border-t-8 border-blue-600 shadow-2xl">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 border-b border-slate-700 pb-10">
                    <div class="col-span-2 md:col-span-1 space-y-3">
                        <Link<MainRoute> to={MainRoute::Landing} classes="text-xl font-black tracking-tight text-white">
                            { i18n.t("app.title") }
                        </Link<MainRoute>>
                        <p class="text-slate-400 text-sm max-w-xs">{ i18n.t("footer.tagline") }</p>
                    </div>
                    <div class="space-y-4">
                        <h3 class="text-lg font-bold text-blue-300">{ i18n.t("footer.quick_links") }</h3>
                        { link_list(&quick_links) }
                    </div>
                    <div class="space-y-4">
                        <h3 class="text-lg font-bold text-blue-300">{ i18n.t("footer.company") }</h3>
                        { link_list(&company_links) }
                    </div>
                    <div class="col-span-2 md:col-span-1 space-y-4">
                        <h3 class="text-lg font-bold text-blue-300">{ i18n.t("footer.get_in_touch") }</h3>
                        <ul class="space-y-2 text-slate-400 text-sm">
                            <li class="flex items-center gap-3">
                                <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="h-4 w-4 text-blue-400 shrink-0" />
                                { config.support_email.clone() }
                            </li>
                            <li class="flex items-center gap-3">
                                <Icon icon_id={IconId::HeroiconsOutlinePhone} class="h-4 w-4 text-blue-400 shrink-0" />
                                { config.support_phone.clone() }
                            </li>
                            <li class="flex items-center gap-3">
                                <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="h-4 w-4 text-blue-400 shrink-0" />
                                { i18n.t("footer.office") }
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="pt-6 text-center md:text-left">
                    <p class="text-slate-500 text-xs">{ format!("© {year} {}", i18n.t("footer.rights")) }</p>
                </div>
            </div>
        </footer>
    }
}
