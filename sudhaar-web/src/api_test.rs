//! Tests for the API client
//!
//! Covers URL building, error mapping and the token bookkeeping that does not
//! need a live backend.

#[cfg(test)]
mod tests {
    use crate::api::{ApiError, SudhaarClient, endpoints};
    use shared::models::{IssueQuery, User};
    use shared::session::Session;
    use std::cell::Cell;
    use std::rc::Rc;
    use yew::Callback;

    #[test]
    fn test_api_url_joins_without_double_slashes() {
        let client = SudhaarClient::new("http://localhost:8000/");
        assert_eq!(
            client.api_url(endpoints::ISSUES),
            "http://localhost:8000/api/issues/"
        );
        assert_eq!(
            client.api_url("/api/users/me/"),
            "http://localhost:8000/api/users/me/"
        );
    }

    #[test]
    fn test_issue_and_campaign_paths() {
        assert_eq!(endpoints::issue(7, ""), "api/issues/7/");
        assert_eq!(endpoints::issue(7, "upvote"), "api/issues/7/upvote/");
        assert_eq!(
            endpoints::issue(7, "remove_upvote"),
            "api/issues/7/remove_upvote/"
        );
        assert_eq!(
            endpoints::issue(7, "delete_comment"),
            "api/issues/7/delete_comment/"
        );
        assert_eq!(endpoints::campaign(3, ""), "api/campaigns/3/");
        assert_eq!(
            endpoints::campaign(3, "donations"),
            "api/campaigns/3/donations/"
        );
    }

    #[test]
    fn test_transparency_paths() {
        assert_eq!(endpoints::TRANSPARENCY_REPORTS, "api/transparency-reports/");
        assert_eq!(endpoints::TRANSPARENCY_SUMMARY, "api/transparency/summary/");
    }

    #[test]
    fn test_status_errors_flatten_drf_bodies() {
        let error = ApiError::from_status(400, r#"{"message": "No upvote to remove"}"#);
        assert_eq!(error.user_message(), "No upvote to remove");
        assert_eq!(error.status(), Some(400));

        let error = ApiError::from_status(
            400,
            r#"{"email": ["user with this email already exists."]}"#,
        );
        assert_eq!(
            error.user_message(),
            "Email: user with this email already exists."
        );

        let error = ApiError::from_status(500, "");
        assert_eq!(error.user_message(), "An error occurred");
    }

    #[test]
    fn test_fixed_error_messages() {
        let network = ApiError::Network("connection refused".into());
        assert!(network.is_network());
        assert_eq!(network.status(), None);
        assert_eq!(
            network.user_message(),
            "Network error. Please check your connection."
        );
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(
            ApiError::Decode("eof".into()).user_message(),
            "Failed to parse response"
        );
    }

    #[test]
    fn test_session_tokens_are_adopted_and_dropped() {
        let client = SudhaarClient::new("http://localhost:8000");
        assert!(!client.is_signed_in());

        let session = Session::new("access", "refresh", User::default());
        client.set_session(Some(&session));
        assert!(client.is_signed_in());

        let clone = client.clone();
        clone.set_session(None);
        assert!(!client.is_signed_in());
    }

    #[test]
    fn test_expired_session_reaches_listener_on_every_clone() {
        let client = SudhaarClient::new("http://localhost:8000");
        let fired = Rc::new(Cell::new(0_u32));
        let counter = fired.clone();
        client.on_session_expired(Callback::from(move |()| counter.set(counter.get() + 1)));

        client.clone().notify_expired();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_expiry_without_listener_is_quiet() {
        SudhaarClient::new("http://localhost:8000").notify_expired();
    }

    #[test]
    fn test_feed_query_only_renders_set_parameters() {
        let query = serde_json::to_value(IssueQuery::feed("-upvotes")).unwrap();
        let object = query.as_object().unwrap();
        assert_eq!(object.get("ordering").unwrap(), "-upvotes");
        assert!(object.get("my_reports").is_none());
    }
}
