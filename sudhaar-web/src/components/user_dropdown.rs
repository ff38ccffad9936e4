use crate::{
    models::app_state::{self, AppState},
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_selector, use_store};

/// Profile button with the name, role and initials, opening a sign-out menu.
#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let (_, dispatch) = use_store::<AppState>();
    let user_state = use_selector(|state: &AppState| state.user().cloned());
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    let logout_button = {
        let onclick = Callback::from(move |event: yew::MouseEvent| {
            event.prevent_default();
            app_state::sign_out(&dispatch);
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Login);
            }
        });
        html! {
            <li><a class="text-error font-medium" {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost flex items-center gap-3 px-3">
                <div class="flex flex-col items-end">
                    <span class="text-sm font-semibold text-slate-700">{ user.display_name() }</span>
                    <span class="text-xs text-slate-500">{ user.role.label() }</span>
                </div>
                <div class="h-9 w-9 rounded-full bg-blue-100 flex items-center justify-center text-blue-700 font-bold border-2 border-blue-200">
                    { user.initials() }
                </div>
                <Icon icon_id={IconId::HeroiconsOutlineChevronDown} class="h-4 w-4" />
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
