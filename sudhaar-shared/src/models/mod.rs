/// Declare a backend choice field that round-trips through its display string
/// and keeps unrecognised values in a catch-all variant.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $text:literal,)+
        }
        fallback $fallback:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            $fallback(String),
        }

        impl $name {
            /// Every named choice, in the order the backend lists them.
            pub const KNOWN: &'static [Self] = &[$(Self::$variant,)+];

            /// The label the backend stores and displays.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::$fallback(raw) => raw.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                let trimmed = value.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($text) {
                        return Self::$variant;
                    }
                )+
                Self::$fallback(trimmed.to_string())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod amount;
pub mod campaign;
pub mod comment;
pub mod dashboard;
pub mod donation;
pub mod errors;
pub mod issue;
pub mod page;
pub mod transparency;
pub mod user;

pub use amount::Amount;
pub use campaign::{
    BudgetItem, Campaign, CampaignCategory, CampaignQuery, CreateCampaignRequest, PaymentDetails,
};
pub use comment::{Comment, CreateCommentRequest, DeleteCommentRequest};
pub use dashboard::{CampaignAggregates, DashboardStats, IssueAggregates, UserAggregates};
pub use donation::{CreateDonationRequest, Donation, DonationQuery};
pub use errors::{ErrorResponse, describe_error_body};
pub use issue::{
    CreateIssueRequest, Issue, IssueCategory, IssueId, IssueQuery, IssueStats, IssueStatus,
    Priority, TimelineEntry, UpdateStatusRequest, VoteResponse,
};
pub use page::ListResponse;
pub use transparency::{CreateExpenseReport, TransparencyReport, TransparencySummary};
pub use user::{AuthResponse, LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest, User, UserRole};
