use serde::{Deserialize, Serialize};

use super::user::UserRole;

/// A comment in an issue's discussion thread.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_own_comment: bool,
    #[serde(default)]
    pub is_official: bool,
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl Comment {
    /// Comments from city officials carry a badge.
    #[must_use]
    pub fn is_from_official(&self) -> bool {
        self.is_official || self.role == Some(UserRole::Official)
    }

    /// Single-letter avatar, falling back to the author's initial.
    #[must_use]
    pub fn avatar(&self) -> String {
        self.user_avatar
            .as_deref()
            .map(str::trim)
            .filter(|avatar| !avatar.is_empty())
            .map(str::to_string)
            .or_else(|| {
                self.user_name
                    .trim()
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().collect())
            })
            .unwrap_or_else(|| "U".to_string())
    }
}

/// Body of `POST /api/issues/{id}/comments/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// Body of `POST /api/issues/{id}/delete_comment/`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteCommentRequest {
    pub comment_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn official_badge_from_flag_or_role() {
        let flagged = Comment {
            is_official: true,
            ..Comment::default()
        };
        let by_role: Comment =
            serde_json::from_str(r#"{"id": 2, "text": "On it", "role": "Official"}"#).unwrap();
        let citizen: Comment =
            serde_json::from_str(r#"{"id": 3, "text": "+1", "role": "citizen"}"#).unwrap();

        assert!(flagged.is_from_official());
        assert!(by_role.is_from_official());
        assert!(!citizen.is_from_official());
    }

    #[test]
    fn avatar_falls_back_to_initial() {
        let comment = Comment {
            user_name: "hina".into(),
            user_avatar: Some(String::new()),
            ..Comment::default()
        };
        assert_eq!(comment.avatar(), "H");
        assert_eq!(Comment::default().avatar(), "U");
    }

    #[test]
    fn delete_request_shape() {
        let json = serde_json::to_string(&DeleteCommentRequest { comment_id: 9 }).unwrap();
        assert_eq!(json, r#"{"comment_id":9}"#);
    }
}
