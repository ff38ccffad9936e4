use crate::api::SudhaarClient;
use crate::browser;
use crate::components::alert::Alert;
use crate::components::form::{bind_filtered_input, bind_input, bind_select};
use crate::containers::auth_layout::AuthLayout;
use crate::routes::MainRoute;
use shared::models::UserRole;
use shared::validation::{CNIC_DIGITS, PHONE_DIGITS, RegisterForm, digits_only, validate_registration};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

fn cnic_input(raw: &str) -> String {
    digits_only(raw, CNIC_DIGITS)
}

fn phone_input(raw: &str) -> String {
    digits_only(raw, PHONE_DIGITS)
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let password2 = use_state(String::new);
    let cnic = use_state(String::new);
    let phone = use_state(String::new);
    let role = use_state(|| UserRole::Citizen.as_str().to_string());
    let organization = use_state(String::new);
    let show_password = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let is_ngo = UserRole::from((*role).clone()) == UserRole::Ngo;
    let passwords_match = !password2.is_empty() && *password == *password2;

    let onsubmit = {
        let form = RegisterForm {
            full_name: (*full_name).clone(),
            email: (*email).clone(),
            password: (*password).clone(),
            password2: (*password2).clone(),
            cnic: (*cnic).clone(),
            phone: (*phone).clone(),
            role: UserRole::from((*role).clone()),
            organization_name: (*organization).clone(),
        };
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = match validate_registration(&form) {
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
            spawn_local(async move {
                match SudhaarClient::shared().register(&request).await {
                    Ok(_) => {
                        browser::alert("Registration successful! Please log in with your credentials.");
                        if let Some(nav) = navigator {
                            nav.push(&MainRoute::Login);
                        }
                    }
                    Err(err) if err.is_network() => error.set(Some(
                        "Network error. Please check your internet connection and try again."
                            .to_string(),
                    )),
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
    let password_type = if *show_password { "text" } else { "password" };

    html! {
        <AuthLayout title="Create an account" subtitle="Join the movement for a better city today.">
            <form class="space-y-5" {onsubmit}>
                if let Some(message) = &*error {
                    <Alert title={Some("Registration Failed".to_string())} message={message.clone()} />
                }
                <div class="form-control">
                    <label class="label" for="full_name"><span class="label-text">{"Full Name"}</span></label>
                    <input id="full_name" class="input input-bordered w-full" type="text" required=true
                        placeholder="Enter your Full Name" value={(*full_name).clone()} oninput={bind_input(&full_name)} />
                </div>
                <div class="form-control">
                    <label class="label" for="email"><span class="label-text">{"Email"}</span></label>
                    <input id="email" class="input input-bordered w-full" type="email" required=true
                        placeholder="Enter Email" value={(*email).clone()} oninput={bind_input(&email)} />
                </div>
                <div class="form-control">
                    <label class="label" for="cnic"><span class="label-text">{"CNIC"}</span></label>
                    <input id="cnic" class="input input-bordered w-full" type="text" inputmode="numeric" required=true
                        placeholder="CNIC number (13 digits)" value={(*cnic).clone()} oninput={bind_filtered_input(&cnic, cnic_input)} />
                    <span class="label-text-alt text-slate-400 mt-1">{"Format: 13 digits (numeric only)"}</span>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="phone"><span class="label-text">{"Phone"}</span></label>
                        <input id="phone" class="input input-bordered w-full" type="tel" inputmode="numeric" required=true
                            placeholder="11 digits (e.g. 03001234567)" value={(*phone).clone()} oninput={bind_filtered_input(&phone, phone_input)} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="role"><span class="label-text">{"I am a..."}</span></label>
                        <select id="role" class="select select-bordered w-full" onchange={bind_select(&role)}>
                            { for [UserRole::Citizen, UserRole::Ngo].into_iter().map(|option| html! {
                                <option value={option.as_str().to_string()} selected={*role == option.as_str()}>{ option.label() }</option>
                            }) }
                        </select>
                    </div>
                </div>
                if is_ngo {
                    <div class="form-control">
                        <label class="label" for="organization_name"><span class="label-text">{"Organization Name"}</span></label>
                        <input id="organization_name" class="input input-bordered w-full" type="text" required=true
                            placeholder="Registered name of your NGO" value={(*organization).clone()} oninput={bind_input(&organization)} />
                    </div>
                }
                <div class="form-control">
                    <label class="label" for="password"><span class="label-text">{"Password"}</span></label>
                    <div class="relative">
                        <input id="password" class="input input-bordered w-full pr-12" type={password_type} required=true
                            placeholder="Create a strong Password" value={(*password).clone()} oninput={bind_input(&password)} />
                        <button type="button" class="absolute right-3 top-1/2 -translate-y-1/2 text-slate-400"
                            aria-label={if *show_password { "Hide password" } else { "Show password" }} onclick={toggle_password}>
                            <Icon icon_id={if *show_password { IconId::HeroiconsOutlineEyeSlash } else { IconId::HeroiconsOutlineEye }} class="w-5 h-5" />
                        </button>
                    </div>
                    <span class="label-text-alt text-slate-400 mt-1">{"8+ characters with number and symbol (!@#$%^&*)"}</span>
                </div>
                <div class="form-control">
                    <label class="label" for="password2"><span class="label-text">{"Confirm Password"}</span></label>
                    <input id="password2" class={classes!("input", "input-bordered", "w-full", passwords_match.then_some("input-success"))}
                        type={password_type} required=true placeholder="Confirm your password"
                        value={(*password2).clone()} oninput={bind_input(&password2)} />
                    if !password2.is_empty() && !passwords_match {
                        <span class="label-text-alt text-error mt-1">{"Passwords do not match"}</span>
                    }
                </div>
                <button class="btn btn-primary w-full" type="submit" disabled={*loading}>
                    if *loading {
                        <span class="loading loading-spinner loading-sm"></span>
                        {"Creating Account..."}
                    } else {
                        {"Create Account"}
                    }
                </button>
                <p class="flex items-center justify-center gap-2 text-xs text-slate-400 font-bold uppercase tracking-widest">
                    <Icon icon_id={IconId::HeroiconsOutlineShieldCheck} class="w-3 h-3" />
                    {"Secure Registration"}
                </p>
                <p class="text-center text-sm text-slate-500">
                    {"Already have an account? "}
                    <Link<MainRoute> to={MainRoute::Login} classes="font-bold text-blue-600">{"Sign in"}</Link<MainRoute>>
                </p>
            </form>
        </AuthLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::{cnic_input, phone_input};

    #[test]
    fn identity_fields_keep_digits_only() {
        assert_eq!(cnic_input("35202-1234567-1"), "3520212345671");
        assert_eq!(phone_input("0300 123 4567 89"), "03001234567");
    }
}
