use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Account roles issued by the backend.
///
/// The backend stores roles in lowercase, but older accounts were created with
/// mixed case, so parsing is case-insensitive and unknown values survive in
/// [`UserRole::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    #[default]
    Citizen,
    Ngo,
    Official,
    Other(String),
}

impl UserRole {
    /// Return the canonical lowercase string the backend expects.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Citizen => "citizen",
            Self::Ngo => "ngo",
            Self::Official => "official",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Human label shown in the header dropdown, e.g. `Ngo` becomes `NGO`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Citizen => "Citizen".to_string(),
            Self::Ngo => "NGO".to_string(),
            Self::Official => "Official".to_string(),
            Self::Other(raw) => capitalize(raw),
        }
    }
}

impl From<String> for UserRole {
    fn from(value: String) -> Self {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "citizen" => Self::Citizen,
            "ngo" => Self::Ngo,
            "official" => Self::Official,
            _ => Self::Other(normalized),
        }
    }
}

impl From<UserRole> for String {
    fn from(value: UserRole) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(value.to_string()))
    }
}

/// A platform account as returned by `/api/users/me/` and the auth endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cnic: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

impl User {
    /// Name shown in the header: full name, then first name, then username,
    /// then the local part of the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{first} {last}"),
            (false, true) => first.to_string(),
            _ if !self.username.trim().is_empty() => self.username.trim().to_string(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Two-letter avatar initials, falling back to `U`.
    #[must_use]
    pub fn initials(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        let initials = match (first.chars().next(), last.chars().next()) {
            (Some(a), Some(b)) => format!("{a}{b}"),
            (Some(_), None) => first.chars().take(2).collect(),
            _ if !self.username.trim().is_empty() => self.username.trim().chars().take(2).collect(),
            _ => self.email.trim().chars().take(2).collect(),
        };
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials.to_uppercase()
        }
    }

    /// Organization name for NGO accounts, if one was registered.
    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.organization_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Body of `POST /api/auth/login/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub password2: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnic: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
}

/// Token pair plus profile returned by login and registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
    pub user: User,
}

/// Body of `POST /api/auth/refresh/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Response of `POST /api/auth/refresh/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    pub access: String,
}

pub(crate) fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str, username: &str, email: &str) -> User {
        User {
            id: 1,
            email: email.to_string(),
            username: username.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..User::default()
        }
    }

    #[test]
    fn role_parsing_is_case_insensitive() {
        for (text, role) in [
            ("citizen", UserRole::Citizen),
            ("NGO", UserRole::Ngo),
            (" Official ", UserRole::Official),
        ] {
            assert_eq!(text.parse::<UserRole>().unwrap(), role);
        }
        assert_eq!(
            UserRole::from("Admin".to_string()),
            UserRole::Other("admin".to_string())
        );
    }

    #[test]
    fn role_serializes_as_lowercase_string() {
        let json = serde_json::to_string(&UserRole::Ngo).unwrap();
        assert_eq!(json, "\"ngo\"");
        let parsed: UserRole = serde_json::from_str("\"Citizen\"").unwrap();
        assert_eq!(parsed, UserRole::Citizen);
    }

    #[test]
    fn role_labels() {
        assert_eq!(UserRole::Citizen.label(), "Citizen");
        assert_eq!(UserRole::Ngo.label(), "NGO");
        assert_eq!(UserRole::Other("auditor".into()).label(), "Auditor");
    }

    #[test]
    fn display_name_fallbacks() {
        assert_eq!(user("Ali", "Khan", "ali", "a@x.pk").display_name(), "Ali Khan");
        assert_eq!(user("Ali", "", "ali", "a@x.pk").display_name(), "Ali");
        assert_eq!(user("", "", "ali99", "a@x.pk").display_name(), "ali99");
        assert_eq!(user("", "", "", "sara@x.pk").display_name(), "sara");
    }

    #[test]
    fn initials_fallbacks() {
        assert_eq!(user("ali", "khan", "", "").initials(), "AK");
        assert_eq!(user("Zara", "", "", "").initials(), "ZA");
        assert_eq!(user("", "", "bilal", "").initials(), "BI");
        assert_eq!(user("", "", "", "mo@x.pk").initials(), "MO");
        assert_eq!(user("", "", "", "").initials(), "U");
    }

    #[test]
    fn user_tolerates_missing_fields() {
        let json = r#"{"id": 7, "email": "n@x.pk", "role": "NGO", "organization_name": " "}"#;
        let parsed: User = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.role, UserRole::Ngo);
        assert_eq!(parsed.organization(), None);
        assert!(!parsed.is_verified);
    }

    #[test]
    fn register_request_skips_empty_optionals() {
        let request = RegisterRequest {
            email: "a@b.pk".into(),
            username: "a".into(),
            password: "secret1!".into(),
            password2: "secret1!".into(),
            ..RegisterRequest::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "citizen");
        assert!(json.get("cnic").is_none());
        assert!(json.get("organization_name").is_none());
    }
}
