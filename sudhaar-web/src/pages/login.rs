use crate::api::SudhaarClient;
use crate::components::alert::Alert;
use crate::components::form::bind_input;
use crate::containers::auth_layout::AuthLayout;
use crate::models::app_state::{AppState, sign_in};
use crate::routes::{MainRoute, landing_for};
use shared::validation::validate_login;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

const CONNECTION_LOST: &str = "Connection lost. Please check if the server is running.";

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = match validate_login(&email, &password) {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            loading.set(true);
            error.set(None);
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                match SudhaarClient::shared().login(&request).await {
                    Ok(response) => {
                        let session = sign_in(&dispatch, response);
                        log(&format!("Signed in as {}", session.role().as_str()));
                        if let Some(nav) = navigator {
                            nav.push(&landing_for(&session));
                        }
                    }
                    Err(err) if err.is_network() => error.set(Some(CONNECTION_LOST.to_string())),
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let is_busy = *loading;
    let disable_submit = email.is_empty() || password.is_empty() || is_busy;

    html! {
        <AuthLayout title="Welcome back" subtitle="Please enter your details to sign in.">
            <form class="space-y-6" {onsubmit}>
                if let Some(message) = &*error {
                    <Alert title={Some("Login Failed".to_string())} message={message.clone()} />
                }
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text font-bold">{"Email"}</span>
                    </label>
                    <input
                        id="email"
                        class="input input-bordered w-full"
                        type="email"
                        placeholder="you@example.com"
                        required=true
                        value={(*email).clone()}
                        oninput={bind_input(&email)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text font-bold">{"Password"}</span>
                    </label>
                    <div class="relative">
                        <input
                            id="password"
                            class="input input-bordered w-full pr-12"
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="Enter your password"
                            required=true
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                        <button
                            type="button"
                            class="absolute right-3 top-1/2 -translate-y-1/2 text-slate-400"
                            aria-label={if *show_password { "Hide password" } else { "Show password" }}
                            onclick={toggle_password}
                        >
                            <Icon icon_id={if *show_password { IconId::HeroiconsOutlineEyeSlash } else { IconId::HeroiconsOutlineEye }} class="w-5 h-5" />
                        </button>
                    </div>
                </div>
                <button class="btn btn-primary w-full" type="submit" disabled={disable_submit}>
                    if is_busy {
                        <span class="loading loading-spinner loading-sm"></span>
                        {"Signing in..."}
                    } else {
                        {"Sign In"}
                    }
                </button>
                <p class="flex items-center justify-center gap-2 text-xs text-slate-400 font-bold uppercase tracking-widest">
                    <Icon icon_id={IconId::HeroiconsOutlineLockClosed} class="w-3 h-3" />
                    {"Secure & Encrypted Login"}
                </p>
                <p class="text-center text-sm text-slate-500">
                    {"Don't have an account? "}
                    <Link<MainRoute> to={MainRoute::Register} classes="font-bold text-blue-600">{"Create one"}</Link<MainRoute>>
                </p>
            </form>
        </AuthLayout>
    }
}
