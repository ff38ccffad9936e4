//! Tests for the routing system
//!
//! Validates route paths, which pages are public, and how the guard treats
//! each role.

#[cfg(test)]
mod tests {
    use crate::routes::{MainRoute, access, landing_for};
    use shared::models::{User, UserRole};
    use shared::session::{GuardOutcome, Session};
    use strum::IntoEnumIterator;
    use yew_router::Routable;

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
    fn test_route_paths() {
        assert_eq!(MainRoute::Landing.to_path(), "/");
        assert_eq!(MainRoute::NgoDashboard.to_path(), "/dashboard/ngo");
        assert_eq!(
            MainRoute::CampaignDetails { id: 42 }.to_path(),
            "/dashboard/manage/42"
        );
        assert_eq!(
            MainRoute::TransparencyHub.to_path(),
            "/dashboard/transparency"
        );
        assert_eq!(MainRoute::MyReports.to_path(), "/reports");
    }

    #[test]
    fn test_recognize_parses_campaign_id() {
        assert_eq!(
            MainRoute::recognize("/dashboard/manage/7"),
            Some(MainRoute::CampaignDetails { id: 7 })
        );
        assert_eq!(MainRoute::recognize("/donate"), Some(MainRoute::Donate));
    }

    #[test]
    fn test_unknown_paths_fall_back_to_not_found() {
        assert_eq!(
            MainRoute::recognize("/no/such/page"),
            Some(MainRoute::NotFound)
        );
    }

    #[test]
    fn test_public_pages_render_without_session() {
        for route in MainRoute::iter().filter(MainRoute::is_public) {
            assert_eq!(access(&route, None), GuardOutcome::Render, "{route:?}");
        }
    }

    #[test]
    fn test_protected_pages_send_guests_to_login() {
        for route in MainRoute::iter().filter(|route| !route.is_public()) {
            assert_eq!(
                access(&route, None),
                GuardOutcome::RedirectLogin,
                "{route:?}"
            );
        }
    }

    #[test]
    fn test_ngo_pages_reject_citizens() {
        let citizen = session(UserRole::Citizen);
        assert_eq!(
            access(&MainRoute::ManageCampaigns, Some(&citizen)),
            GuardOutcome::RedirectDashboard
        );
        assert_eq!(
            access(&MainRoute::TransparencyHub, Some(&citizen)),
            GuardOutcome::RedirectDashboard
        );
        assert_eq!(
            access(&MainRoute::Donate, Some(&citizen)),
            GuardOutcome::Render
        );
    }

    #[test]
    fn test_ngo_pages_admit_ngos() {
        let ngo = session(UserRole::Ngo);
        assert_eq!(
            access(&MainRoute::CampaignDetails { id: 1 }, Some(&ngo)),
            GuardOutcome::Render
        );
        assert_eq!(
            access(&MainRoute::Archive, Some(&ngo)),
            GuardOutcome::Render
        );
    }

    #[test]
    fn test_only_ngo_pages_declare_roles() {
        let restricted: Vec<MainRoute> = MainRoute::iter()
            .filter(|route| route.required_roles().is_some())
            .collect();
        assert_eq!(
            restricted,
            vec![
                MainRoute::NgoDashboard,
                MainRoute::ManageCampaigns,
                MainRoute::CampaignDetails { id: 0 },
                MainRoute::TransparencyHub,
            ]
        );
    }

    #[test]
    fn test_landing_for_role() {
        assert_eq!(
            landing_for(&session(UserRole::Ngo)),
            MainRoute::NgoDashboard
        );
        assert_eq!(
            landing_for(&session(UserRole::Official)),
            MainRoute::Dashboard
        );
    }
}
