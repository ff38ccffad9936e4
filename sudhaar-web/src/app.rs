use crate::api::{ApiError, SudhaarClient};
use crate::models::app_state::{self, AppState};
use crate::routes::{MainRoute, switch};
use crate::storage;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let (store_state, store_dispatch) = use_store::<AppState>();

    // Keep the shared client's bearer token aligned with the store.
    {
        let session = store_state.session.clone();
        use_effect_with(session, |session| {
            SudhaarClient::shared().set_session(session.as_ref());
            || ()
        });
    }

    // An expired refresh token signs the user out everywhere.
    {
        let store_dispatch = store_dispatch.clone();
        use_effect_with((), move |_| {
            SudhaarClient::shared().on_session_expired(Callback::from(move |()| {
                log("Session expired, signing out");
                app_state::sign_out(&store_dispatch);
            }));
            || ()
        });
    }

    // Refresh the cached profile once per page load.
    {
        let store_dispatch = store_dispatch.clone();
        let cached = store_state.session.clone();
        use_effect_with((), move |_| {
            if let Some(session) = cached {
                spawn_local(async move {
                    match SudhaarClient::shared().current_user().await {
                        Ok(user) => {
                            let refreshed = shared::session::Session { user, ..session };
                            storage::save_session(&refreshed);
                            store_dispatch.set(AppState {
                                session: Some(refreshed),
                            });
                        }
                        Err(ApiError::Unauthorized) => app_state::sign_out(&store_dispatch),
                        Err(err) => log(&format!("Profile refresh failed: {err}")),
                    }
                });
            }
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
