//! Client-side list filtering and summaries.

use crate::models::{Amount, Campaign, Issue, IssueStatus};
use crate::time::format_display_date;

/// Label of the chip that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Case-insensitive substring match. An empty needle matches everything.
#[must_use]
pub fn matches_search(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Status choices on the "My Reports" dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Verified,
    InProgress,
    Resolved,
    Critical,
}

impl StatusFilter {
    /// Every option in dropdown order.
    pub const OPTIONS: [Self; 6] = [
        Self::All,
        Self::Pending,
        Self::Verified,
        Self::InProgress,
        Self::Resolved,
        Self::Critical,
    ];

    /// Dropdown label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Reports",
            Self::Pending => "Pending Approval",
            Self::Verified => "Verified Issues",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Critical => "Critical Priority",
        }
    }

    /// Stable key used as the `<option>` value.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Critical => "Critical",
        }
    }

    /// Inverse of [`StatusFilter::key`], defaulting to `All`.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::OPTIONS
            .into_iter()
            .find(|option| option.key() == key)
            .unwrap_or_default()
    }

    /// Whether an issue with `status` passes the filter.
    #[must_use]
    pub fn accepts(self, status: &IssueStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => *status == IssueStatus::Pending,
            Self::Verified => *status == IssueStatus::Verified,
            Self::InProgress => *status == IssueStatus::InProgress,
            Self::Resolved => *status == IssueStatus::Resolved,
            Self::Critical => *status == IssueStatus::Critical,
        }
    }
}

/// Filter a user's reports by title/location search and status.
#[must_use]
pub fn filter_reports<'a>(reports: &'a [Issue], search: &str, status: StatusFilter) -> Vec<&'a Issue> {
    reports
        .iter()
        .filter(|issue| {
            (matches_search(&issue.title, search) || matches_search(&issue.location, search))
                && status.accepts(&issue.status)
        })
        .collect()
}

/// Counters shown above "My Reports".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total: usize,
    pub verified: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl ReportStats {
    /// Tally reports by status.
    #[must_use]
    pub fn from_reports(reports: &[Issue]) -> Self {
        let count = |status: IssueStatus| reports.iter().filter(|r| r.status == status).count();
        Self {
            total: reports.len(),
            verified: count(IssueStatus::Verified),
            in_progress: count(IssueStatus::InProgress),
            resolved: count(IssueStatus::Resolved),
        }
    }
}

/// Category chips: `All` first, then each distinct label in first-seen order.
#[must_use]
pub fn unique_categories<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut chips = vec![ALL_CATEGORIES.to_string()];
    for label in labels {
        let label = label.into();
        if !chips.contains(&label) {
            chips.push(label);
        }
    }
    chips
}

fn category_matches(selected: &str, label: &str) -> bool {
    selected == ALL_CATEGORIES || selected == label
}

/// Resolved archive filter: title/location search plus category chip.
#[must_use]
pub fn filter_archive<'a>(issues: &'a [Issue], search: &str, category: &str) -> Vec<&'a Issue> {
    issues
        .iter()
        .filter(|issue| {
            (matches_search(&issue.title, search) || matches_search(&issue.location, search))
                && category_matches(category, issue.category.as_str())
        })
        .collect()
}

/// Donation browse filter: category chip plus title/NGO search.
#[must_use]
pub fn filter_campaigns<'a>(
    campaigns: &'a [Campaign],
    search: &str,
    category: &str,
) -> Vec<&'a Campaign> {
    campaigns
        .iter()
        .filter(|campaign| {
            category_matches(category, &campaign.category_label())
                && (matches_search(&campaign.title, search)
                    || matches_search(&campaign.ngo_display_name(), search))
        })
        .collect()
}

/// Campaign management filter: title or category search.
#[must_use]
pub fn filter_managed<'a>(campaigns: &'a [Campaign], search: &str) -> Vec<&'a Campaign> {
    campaigns
        .iter()
        .filter(|campaign| {
            matches_search(&campaign.title, search)
                || matches_search(campaign.category.as_str(), search)
        })
        .collect()
}

/// Headline numbers on the NGO dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NgoTotals {
    pub raised: Amount,
    pub donors: u64,
    pub active: usize,
    pub campaigns: usize,
}

impl NgoTotals {
    /// Sum raised money and donors and count active campaigns.
    #[must_use]
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        Self {
            raised: campaigns.iter().map(|c| c.raised_amount).sum(),
            donors: campaigns.iter().map(|c| u64::from(c.donor_count)).sum(),
            active: campaigns.iter().filter(|c| c.is_active).count(),
            campaigns: campaigns.len(),
        }
    }
}

/// Which side of the timeline a milestone sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One entry of the "recent milestones" timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub issue_id: i64,
    pub title: String,
    pub resolver: String,
    pub date: String,
    pub side: Side,
}

/// The first three resolved issues as alternating timeline entries.
#[must_use]
pub fn resolved_milestones(issues: &[Issue]) -> Vec<Milestone> {
    issues
        .iter()
        .filter(|issue| issue.status == IssueStatus::Resolved)
        .take(3)
        .enumerate()
        .map(|(index, issue)| {
            let resolver = issue
                .author_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or("City Council")
                .to_string();
            let when = issue.resolved_at.as_deref().or(issue.created_at.as_deref());
            Milestone {
                issue_id: issue.id,
                title: issue.title.clone(),
                resolver,
                date: format_display_date(when),
                side: if index % 2 == 0 { Side::Left } else { Side::Right },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CampaignCategory, IssueCategory};

    fn issue(id: i64, title: &str, location: &str, status: IssueStatus) -> Issue {
        Issue {
            id,
            title: title.to_string(),
            location: location.to_string(),
            status,
            ..Issue::default()
        }
    }

    fn campaign(id: i64, title: &str, ngo: &str, category: CampaignCategory) -> Campaign {
        Campaign {
            id,
            title: title.to_string(),
            ngo_name: Some(ngo.to_string()),
            category,
            ..Campaign::default()
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        assert!(matches_search("Broken Pipe", "pipe"));
        assert!(matches_search("Broken Pipe", ""));
        assert!(!matches_search("Broken Pipe", "road"));
    }

    #[test]
    fn status_filter_options() {
        let labels: Vec<_> = StatusFilter::OPTIONS.iter().map(|o| o.label()).collect();
        assert_eq!(
            labels,
            [
                "All Reports",
                "Pending Approval",
                "Verified Issues",
                "In Progress",
                "Resolved",
                "Critical Priority"
            ]
        );
        assert_eq!(StatusFilter::from_key("In Progress"), StatusFilter::InProgress);
        assert_eq!(StatusFilter::from_key("bogus"), StatusFilter::All);
    }

    #[test]
    fn reports_filter_and_stats() {
        let reports = vec![
            issue(1, "Pothole", "Main Bazaar", IssueStatus::Verified),
            issue(2, "Garbage pile", "Railway Road", IssueStatus::Resolved),
            issue(3, "Street light", "Main Bazaar", IssueStatus::InProgress),
            issue(4, "Water leak", "Model Town", IssueStatus::Pending),
        ];

        let bazaar = filter_reports(&reports, "bazaar", StatusFilter::All);
        assert_eq!(bazaar.len(), 2);
        let resolved = filter_reports(&reports, "", StatusFilter::Resolved);
        assert_eq!(resolved[0].id, 2);
        assert!(filter_reports(&reports, "bazaar", StatusFilter::Critical).is_empty());

        let stats = ReportStats::from_reports(&reports);
        assert_eq!(
            stats,
            ReportStats {
                total: 4,
                verified: 1,
                in_progress: 1,
                resolved: 1
            }
        );
    }

    #[test]
    fn category_chips_keep_first_seen_order() {
        let chips = unique_categories(["Water", "Roads", "Water", "Health"]);
        assert_eq!(chips, ["All", "Water", "Roads", "Health"]);
        assert_eq!(unique_categories(Vec::<String>::new()), ["All"]);
    }

    #[test]
    fn archive_filter_by_category() {
        let mut road = issue(1, "Pothole fixed", "Narowal", IssueStatus::Resolved);
        road.category = IssueCategory::Roads;
        let mut water = issue(2, "Pipe fixed", "Narowal", IssueStatus::Resolved);
        water.category = IssueCategory::Water;
        let issues = vec![road, water];

        assert_eq!(filter_archive(&issues, "", "All").len(), 2);
        assert_eq!(filter_archive(&issues, "", "Water")[0].id, 2);
        assert_eq!(filter_archive(&issues, "pothole", "Water").len(), 0);
    }

    #[test]
    fn campaign_filters() {
        let campaigns = vec![
            campaign(1, "Clean Water", "Al Noor", CampaignCategory::Water),
            campaign(2, "School Books", "Edhi", CampaignCategory::Education),
            campaign(3, "Untitled", "Helping Hands", CampaignCategory::default()),
        ];

        assert_eq!(filter_campaigns(&campaigns, "edhi", "All")[0].id, 2);
        assert_eq!(filter_campaigns(&campaigns, "", "General")[0].id, 3);
        assert!(filter_campaigns(&campaigns, "water", "Education").is_empty());

        assert_eq!(filter_managed(&campaigns, "educ")[0].id, 2);
        assert_eq!(filter_managed(&campaigns, "clean")[0].id, 1);
    }

    #[test]
    fn ngo_totals() {
        let mut first = campaign(1, "A", "N", CampaignCategory::Water);
        first.raised_amount = Amount::from_rupees(1500);
        first.donor_count = 3;
        first.is_active = true;
        let mut second = campaign(2, "B", "N", CampaignCategory::Health);
        second.raised_amount = Amount::from_rupees(500);
        second.donor_count = 2;

        let totals = NgoTotals::from_campaigns(&[first, second]);
        assert_eq!(totals.raised, Amount::from_rupees(2000));
        assert_eq!(totals.donors, 5);
        assert_eq!(totals.active, 1);
        assert_eq!(totals.campaigns, 2);
    }

    #[test]
    fn milestones_take_three_resolved_alternating() {
        let mut issues: Vec<Issue> = (1..=5)
            .map(|id| issue(id, &format!("Fix {id}"), "Narowal", IssueStatus::Resolved))
            .collect();
        issues.insert(0, issue(99, "Open", "Narowal", IssueStatus::Open));
        issues[1].author_name = Some("Bilal".into());
        issues[1].resolved_at = Some("2024-02-10T00:00:00Z".into());

        let milestones = resolved_milestones(&issues);
        assert_eq!(milestones.len(), 3);
        assert_eq!(milestones[0].issue_id, 1);
        assert_eq!(milestones[0].resolver, "Bilal");
        assert_eq!(milestones[0].date, "Feb 10, 2024");
        assert_eq!(milestones[0].side, Side::Left);
        assert_eq!(milestones[1].resolver, "City Council");
        assert_eq!(milestones[1].date, "Recently");
        assert_eq!(milestones[1].side, Side::Right);
        assert_eq!(milestones[2].side, Side::Left);
    }
}
