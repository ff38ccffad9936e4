//! The signed-in user's session and the decisions that hang off it.

use serde::{Deserialize, Serialize};

use crate::models::{AuthResponse, User, UserRole};

/// Local storage key of the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Local storage key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Local storage key of the cached user object.
pub const USER_KEY: &str = "sudhaar_user";
/// Local storage key of the cached role string.
pub const ROLE_KEY: &str = "sudhaar_role";

/// Tokens plus the user they were issued to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub access: String,
    pub refresh: String,
    pub user: User,
}

impl Session {
    #[must_use]
    pub fn new(access: impl Into<String>, refresh: impl Into<String>, user: User) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
            user,
        }
    }

    #[must_use]
    pub const fn role(&self) -> &UserRole {
        &self.user.role
    }

    /// A session counts once it carries an access token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.access.trim().is_empty()
    }

    /// Swap in a freshly refreshed access token.
    #[must_use]
    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = access.into();
        self
    }

    /// Where this user lands after signing in.
    #[must_use]
    pub fn landing_route(&self) -> &'static str {
        landing_route(self.role())
    }
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self::new(response.access, response.refresh, response.user)
    }
}

/// Post-login destination: NGOs get their own dashboard.
#[must_use]
pub fn landing_route(role: &UserRole) -> &'static str {
    match role {
        UserRole::Ngo => "/dashboard/ngo",
        _ => "/dashboard",
    }
}

/// What a protected route should do for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    RedirectLogin,
    RedirectDashboard,
}

/// Decide access to a route.
///
/// `required` of `None` admits any signed-in user. A role outside the
/// required set is sent back to the general dashboard.
#[must_use]
pub fn guard(session: Option<&Session>, required: Option<&[UserRole]>) -> GuardOutcome {
    let Some(session) = session.filter(|s| s.is_authenticated()) else {
        return GuardOutcome::RedirectLogin;
    };
    match required {
        Some(roles) if !roles.contains(session.role()) => GuardOutcome::RedirectDashboard,
        _ => GuardOutcome::Render,
    }
}

/// One entry of the signed-in navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Navigation entries visible to `role`.
///
/// Everyone gets the dashboard and transparency pages. Citizens and NGOs also
/// get the campaign browser, labelled for the role, and only citizens file
/// reports.
#[must_use]
pub fn nav_items(role: &UserRole) -> Vec<NavItem> {
    let mut items = vec![
        NavItem {
            label: "Dashboard",
            path: "/dashboard",
        },
        NavItem {
            label: "Transparency",
            path: "/transparency",
        },
    ];
    match role {
        UserRole::Citizen => {
            items.push(NavItem {
                label: "NGO",
                path: "/donate",
            });
            items.push(NavItem {
                label: "My Reports",
                path: "/reports",
            });
        }
        UserRole::Ngo => items.push(NavItem {
            label: "My Campaigns",
            path: "/donate",
        }),
        _ => {}
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn session(role: UserRole) -> Session {
        Session::new(
            "access",
            "refresh",
            User {
                role,
                ..User::default()
            },
        )
    }

    #[test]
    fn landing_routes() {
        assert_eq!(landing_route(&UserRole::Ngo), "/dashboard/ngo");
        assert_eq!(landing_route(&UserRole::Citizen), "/dashboard");
        assert_eq!(landing_route(&UserRole::Official), "/dashboard");
        assert_eq!(landing_route(&UserRole::Other("auditor".into())), "/dashboard");
    }

    #[test]
    fn missing_or_empty_session_goes_to_login() {
        assert_eq!(guard(None, None), GuardOutcome::RedirectLogin);
        let empty = Session::default();
        assert_eq!(guard(Some(&empty), None), GuardOutcome::RedirectLogin);
    }

    #[test_case(UserRole::Citizen, None, GuardOutcome::Render ; "citizen any")]
    #[test_case(UserRole::Ngo, None, GuardOutcome::Render ; "ngo any")]
    #[test_case(UserRole::Official, None, GuardOutcome::Render ; "official any")]
    #[test_case(UserRole::Ngo, Some(vec![UserRole::Ngo]), GuardOutcome::Render ; "ngo on ngo route")]
    #[test_case(UserRole::Citizen, Some(vec![UserRole::Ngo]), GuardOutcome::RedirectDashboard ; "citizen on ngo route")]
    #[test_case(UserRole::Official, Some(vec![UserRole::Ngo]), GuardOutcome::RedirectDashboard ; "official on ngo route")]
    #[test_case(UserRole::Citizen, Some(vec![UserRole::Citizen]), GuardOutcome::Render ; "citizen on citizen route")]
    #[test_case(UserRole::Ngo, Some(vec![UserRole::Citizen]), GuardOutcome::RedirectDashboard ; "ngo on citizen route")]
    #[test_case(
        UserRole::Official,
        Some(vec![UserRole::Citizen, UserRole::Official]),
        GuardOutcome::Render ;
        "official in mixed set"
    )]
    fn guard_outcomes(role: UserRole, required: Option<Vec<UserRole>>, expected: GuardOutcome) {
        let session = session(role);
        assert_eq!(guard(Some(&session), required.as_deref()), expected);
    }

    #[test]
    fn nav_items_follow_role() {
        let labels = |role| nav_items(&role).iter().map(|i| i.label).collect::<Vec<_>>();
        assert_eq!(
            labels(UserRole::Citizen),
            ["Dashboard", "Transparency", "NGO", "My Reports"]
        );
        assert_eq!(
            labels(UserRole::Ngo),
            ["Dashboard", "Transparency", "My Campaigns"]
        );
        assert_eq!(labels(UserRole::Official), ["Dashboard", "Transparency"]);
        assert_eq!(nav_items(&UserRole::Ngo)[2].path, "/donate");
    }

    #[test]
    fn session_from_auth_response() {
        let response = AuthResponse {
            access: "a".into(),
            refresh: "r".into(),
            user: User {
                role: UserRole::Ngo,
                ..User::default()
            },
        };
        let session = Session::from(response);
        assert!(session.is_authenticated());
        assert_eq!(session.landing_route(), "/dashboard/ngo");
        assert_eq!(session.with_access("b").access, "b");
    }

    #[test]
    fn session_round_trips_through_storage_json() {
        let original = session(UserRole::Citizen);
        let text = serde_json::to_string(&original).unwrap();
        let restored: Session = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, original);
    }
}
