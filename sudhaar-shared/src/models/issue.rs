use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::amount::{lenient_coordinate, lenient_count};

/// Primary key of an issue report.
pub type IssueId = i64;

choice_enum! {
    /// Category a civic issue is filed under.
    pub enum IssueCategory {
        Roads => "Roads",
        Sanitation => "Sanitation",
        Electricity => "Electricity",
        Water => "Water",
        Civic => "Civic",
        Health => "Health",
        Environment => "Environment",
        Education => "Education",
    }
    fallback Other;
}

impl IssueCategory {
    /// Categories offered by the report form, ending with the free `Other`.
    #[must_use]
    pub fn report_choices() -> Vec<Self> {
        vec![
            Self::Roads,
            Self::Sanitation,
            Self::Water,
            Self::Electricity,
            Self::Health,
            Self::Environment,
            Self::Other("Other".to_string()),
        ]
    }
}

impl Default for IssueCategory {
    fn default() -> Self {
        Self::Other("Other".to_string())
    }
}

choice_enum! {
    /// Lifecycle state of an issue. Only officials move issues between states.
    pub enum IssueStatus {
        Open => "Open",
        Pending => "Pending",
        Verified => "Verified",
        InProgress => "In Progress",
        Critical => "Critical",
        Resolved => "Resolved",
        Rejected => "Rejected",
    }
    fallback Unknown;
}

impl Default for IssueStatus {
    fn default() -> Self {
        Self::Open
    }
}

impl IssueStatus {
    /// Whether the issue still needs attention.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Resolved | Self::Rejected)
    }
}

/// Optional triage priority.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|text| text.trim().parse().ok()))
}

/// One status change in an issue's history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TimelineEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_by_email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A civic issue report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub id: IssueId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: IssueCategory,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub author: Option<i64>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_url_full: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub upvotes: u32,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub time_text: Option<String>,
    #[serde(default)]
    pub user_has_upvoted: bool,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

impl Issue {
    /// The most complete image URL available.
    #[must_use]
    pub fn best_image(&self) -> Option<&str> {
        non_blank(self.image_url_full.as_deref())
            .or_else(|| non_blank(self.image_url.as_deref()))
            .or_else(|| non_blank(self.image.as_deref()))
    }

    /// Who reported the issue.
    #[must_use]
    pub fn best_author(&self) -> &str {
        non_blank(self.author_name.as_deref())
            .or_else(|| non_blank(self.author_email.as_deref()))
            .unwrap_or("Anonymous")
    }

    /// Description text, empty when the backend omitted it.
    #[must_use]
    pub fn body(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Map coordinates when both halves are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Fields submitted when filing a new issue. The photo travels separately as
/// a multipart part named `image`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateIssueRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: IssueCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl CreateIssueRequest {
    /// Text parts of the multipart form, in submission order. Coordinates are
    /// rounded to the six decimal places the backend stores.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("location", self.location.clone()),
            ("category", self.category.to_string()),
        ];
        if let Some(priority) = self.priority {
            fields.push(("priority", priority.to_string()));
        }
        if let Some(latitude) = self.latitude {
            fields.push(("latitude", format!("{latitude:.6}")));
        }
        if let Some(longitude) = self.longitude {
            fields.push(("longitude", format!("{longitude:.6}")));
        }
        fields
    }
}

/// Body of `POST /api/issues/{id}/update_status/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateStatusRequest {
    pub status: IssueStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response of the upvote and remove-upvote actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteResponse {
    #[serde(default)]
    pub message: String,
    #[serde(deserialize_with = "lenient_count")]
    pub upvotes: u32,
}

/// Aggregates from `/api/issues/stats/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IssueStats {
    #[serde(default)]
    pub total_reported: u64,
    #[serde(default)]
    pub issues_resolved: u64,
    #[serde(default)]
    pub in_progress: u64,
    #[serde(default)]
    pub active_issues: u64,
    #[serde(default)]
    pub resolution_rate: f64,
}

/// Filters for `GET /api/issues/`. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct IssueQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_resolved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_reports: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

impl IssueQuery {
    /// The open feed sorted by `ordering`.
    #[must_use]
    pub fn feed(ordering: &str) -> Self {
        Self {
            exclude_resolved: Some(true),
            ordering: Some(ordering.to_string()),
            ..Self::default()
        }
    }

    /// Issues filed by the signed-in user.
    #[must_use]
    pub fn mine() -> Self {
        Self {
            my_reports: Some(true),
            ..Self::default()
        }
    }

    /// Resolved issues only.
    #[must_use]
    pub fn resolved() -> Self {
        Self {
            resolved_only: Some(true),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_backend_issue_with_string_coordinates() {
        let issue: Issue = serde_json::from_value(json!({
            "id": 12,
            "title": "Broken streetlight",
            "description": "Dark at night",
            "location": "Narowal",
            "category": "Electricity",
            "status": "In Progress",
            "priority": "High",
            "author": 3,
            "author_name": "",
            "author_email": "a@b.pk",
            "image": null,
            "image_url": "",
            "image_url_full": "http://localhost:8000/media/issues/x.jpg",
            "upvotes": 4,
            "latitude": "32.100400",
            "longitude": 74.873000,
            "created_at": "2024-05-01T10:00:00Z",
            "timeline": [{"id": 1, "status": "Open", "description": "", "created_at": "2024-05-01T10:00:00Z"}],
            "user_has_upvoted": true
        }))
        .unwrap();

        assert_eq!(issue.status, IssueStatus::InProgress);
        assert_eq!(issue.category, IssueCategory::Electricity);
        assert_eq!(issue.priority, Some(Priority::High));
        assert_eq!(issue.coordinates(), Some((32.1004, 74.873)));
        assert_eq!(
            issue.best_image(),
            Some("http://localhost:8000/media/issues/x.jpg")
        );
        assert_eq!(issue.best_author(), "a@b.pk");
        assert_eq!(issue.timeline.len(), 1);
        assert!(issue.user_has_upvoted);
    }

    #[test]
    fn tolerates_sparse_issue() {
        let issue: Issue = serde_json::from_value(json!({"id": 1, "upvotes": null, "priority": ""})).unwrap();
        assert_eq!(issue.upvotes, 0);
        assert_eq!(issue.priority, None);
        assert_eq!(issue.body(), "");
        assert_eq!(issue.best_author(), "Anonymous");
        assert_eq!(issue.best_image(), None);
        assert_eq!(issue.coordinates(), None);
    }

    #[test]
    fn unknown_choices_are_preserved() {
        let status = IssueStatus::from("Escalated");
        assert_eq!(status, IssueStatus::Unknown("Escalated".to_string()));
        assert_eq!(status.to_string(), "Escalated");
        assert_eq!(IssueCategory::from("roads"), IssueCategory::Roads);
        assert_eq!(
            IssueCategory::from("Parks"),
            IssueCategory::Other("Parks".to_string())
        );
    }

    #[test]
    fn active_excludes_resolved_and_rejected() {
        assert!(IssueStatus::Pending.is_active());
        assert!(IssueStatus::Critical.is_active());
        assert!(!IssueStatus::Resolved.is_active());
        assert!(!IssueStatus::Rejected.is_active());
    }

    #[test]
    fn query_omits_unset_parameters() {
        let value = serde_json::to_value(IssueQuery::feed("-upvotes")).unwrap();
        assert_eq!(value, json!({"exclude_resolved": true, "ordering": "-upvotes"}));

        let value = serde_json::to_value(IssueQuery::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn create_request_form_fields() {
        let request = CreateIssueRequest {
            title: "Pothole".into(),
            description: "Deep".into(),
            location: "Narowal".into(),
            category: IssueCategory::Roads,
            priority: None,
            latitude: Some(32.1),
            longitude: Some(74.87),
        };
        let fields = request.form_fields();
        assert_eq!(fields[3], ("category", "Roads".to_string()));
        assert!(fields.contains(&("latitude", "32.100000".to_string())));
        assert!(fields.iter().all(|(name, _)| *name != "priority"));
    }

    #[test]
    fn status_update_serializes_display_label() {
        let body = UpdateStatusRequest {
            status: IssueStatus::InProgress,
            description: None,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"status": "In Progress"})
        );
    }
}
