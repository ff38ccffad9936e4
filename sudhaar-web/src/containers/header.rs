use crate::{
    components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown},
    models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use shared::session::nav_items;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let role = use_selector(|state: &AppState| state.role().cloned());
    let menu_open = use_state(|| false);
    let items = (*role).as_ref().map(nav_items).unwrap_or_default();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |()| menu_open.set(false))
    };

    let render_items = |on_navigate: Option<Callback<()>>| -> Html {
        html! {
            { for items.iter().map(|item| html! {
                <HeaderNavItem
                    item={*item}
                    current_route={props.current_route.clone()}
                    on_navigate={on_navigate.clone()}
                />
            }) }
        }
    };

    html! {
        <nav class="navbar fixed top-0 left-0 right-0 z-50 justify-between bg-white/95 backdrop-blur-md shadow-md h-16 px-4 sm:px-6 lg:px-8">
            <Link<MainRoute> to={MainRoute::Dashboard} classes="flex items-center gap-2">
                <span class="text-xl font-black text-[#0F2854]">{i18n.t("app.title")}</span>
            </Link<MainRoute>>
            <ul class="hidden md:flex menu menu-horizontal gap-1">
                { render_items(None) }
            </ul>
            <div class="hidden md:flex pl-4 border-l border-slate-200">
                <UserDropdown />
            </div>
            <button class="md:hidden btn btn-ghost p-2 text-slate-600" aria-label={i18n.t("header.menu")} onclick={toggle_menu}>
                if *menu_open {
                    <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-6 h-6" />
                } else {
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-6 h-6" />
                }
            </button>
            if *menu_open {
                <div class="md:hidden bg-white border-t border-slate-100 absolute top-16 left-0 w-full shadow-xl">
                    <ul class="menu px-4 py-4 space-y-2 w-full">
                        { render_items(Some(close_menu)) }
                    </ul>
                    <div class="px-4 pb-4">
                        <UserDropdown />
                    </div>
                </div>
            }
        </nav>
    }
}
