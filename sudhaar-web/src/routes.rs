use crate::containers::layout::Layout;
use crate::models::app_state::AppState;
use crate::pages::*;
use shared::models::UserRole;
use shared::session::{self, GuardOutcome, Session};
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

const NGO_ONLY: &[UserRole] = &[UserRole::Ngo];

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Landing,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/contact")]
    Contact,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/ngo")]
    NgoDashboard,
    #[at("/dashboard/manage")]
    ManageCampaigns,
    #[at("/dashboard/manage/:id")]
    CampaignDetails { id: i64 },
    #[at("/dashboard/transparency")]
    TransparencyHub,
    #[at("/reports")]
    MyReports,
    #[at("/donate")]
    Donate,
    #[at("/transparency")]
    Transparency,
    #[at("/archive")]
    Archive,
    #[at("/map")]
    Map,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Pages anyone may open.
    pub const fn is_public(&self) -> bool {
        matches!(
            self,
            Self::Landing
                | Self::Login
                | Self::Register
                | Self::Privacy
                | Self::Terms
                | Self::Contact
                | Self::NotFound
        )
    }

    /// Roles allowed on a protected page; `None` admits any signed-in user.
    pub fn required_roles(&self) -> Option<&'static [UserRole]> {
        match self {
            Self::NgoDashboard
            | Self::ManageCampaigns
            | Self::CampaignDetails { .. }
            | Self::TransparencyHub => Some(NGO_ONLY),
            _ => None,
        }
    }

    /// Whether the signed-in chrome (header, footer) wraps this page.
    pub const fn uses_layout(&self) -> bool {
        !self.is_public()
    }
}

/// Decide what a route renders for the current session.
pub fn access(route: &MainRoute, session: Option<&Session>) -> GuardOutcome {
    if route.is_public() {
        GuardOutcome::Render
    } else {
        session::guard(session, route.required_roles())
    }
}

/// Where the router sends a signed-in user who opens the sign-in pages.
pub fn landing_for(session: &Session) -> MainRoute {
    MainRoute::recognize(session.landing_route()).unwrap_or(MainRoute::Dashboard)
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let session = (*session).clone();
    let route = props.route.clone();

    match access(&route, session.as_ref()) {
        GuardOutcome::RedirectLogin => {
            return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
        }
        GuardOutcome::RedirectDashboard => {
            return html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> };
        }
        GuardOutcome::Render => {}
    }

    let page = match route.clone() {
        MainRoute::Landing => html! { <LandingPage /> },
        MainRoute::Login | MainRoute::Register => {
            if let Some(active) = session.as_ref().filter(|s| s.is_authenticated()) {
                return html! { <Redirect<MainRoute> to={landing_for(active)} /> };
            }
            if route == MainRoute::Login {
                html! { <LoginPage /> }
            } else {
                html! { <RegisterPage /> }
            }
        }
        MainRoute::Privacy => html! { <PrivacyPage /> },
        MainRoute::Terms => html! { <TermsPage /> },
        MainRoute::Contact => html! { <ContactPage /> },
        MainRoute::Dashboard => {
            let is_ngo = session
                .as_ref()
                .is_some_and(|s| *s.role() == UserRole::Ngo);
            if is_ngo {
                html! { <NgoDashboardPage /> }
            } else {
                html! { <DashboardPage /> }
            }
        }
        MainRoute::NgoDashboard => html! { <NgoDashboardPage /> },
        MainRoute::ManageCampaigns => html! { <CampaignManagementPage /> },
        MainRoute::CampaignDetails { id } => html! { <CampaignDetailsPage {id} /> },
        MainRoute::TransparencyHub => html! { <TransparencyHubPage /> },
        MainRoute::MyReports => html! { <MyReportsPage /> },
        MainRoute::Donate => html! { <DonatePage /> },
        MainRoute::Transparency => html! { <TransparencyPage /> },
        MainRoute::Archive => html! { <ArchivePage /> },
        MainRoute::Map => html! { <MapPage /> },
        MainRoute::NotFound => {
            return html! { <Redirect<MainRoute> to={MainRoute::Landing} /> };
        }
    };

    if route.uses_layout() {
        html! {
            <Layout current_route={Some(route)}>
                {page}
            </Layout>
        }
    } else {
        page
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    html! { <MainRouteView {route} /> }
}
