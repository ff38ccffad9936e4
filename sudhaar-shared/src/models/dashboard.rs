use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Issue counts in the dashboard summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IssueAggregates {
    #[serde(default)]
    pub total_reported: u64,
    #[serde(default)]
    pub resolved: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub resolution_rate: f64,
}

/// Campaign totals in the dashboard summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampaignAggregates {
    #[serde(default)]
    pub active_campaigns: u64,
    #[serde(default)]
    pub total_raised: Amount,
}

/// User totals in the dashboard summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserAggregates {
    #[serde(default)]
    pub total_users: u64,
}

/// Response of `/api/dashboard/stats/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    #[serde(default)]
    pub issues: IssueAggregates,
    #[serde(default)]
    pub campaigns: CampaignAggregates,
    #[serde(default)]
    pub users: UserAggregates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_stats() {
        let json = r#"{
            "issues": {"total_reported": 40, "resolved": 10, "active": 28, "resolution_rate": 25.0},
            "campaigns": {"active_campaigns": 3, "total_raised": 125000.5},
            "users": {"total_users": 210}
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.issues.active, 28);
        assert_eq!(stats.campaigns.total_raised, Amount::from_paisa(12_500_050));
        assert_eq!(stats.users.total_users, 210);
    }

    #[test]
    fn missing_sections_default() {
        let stats: DashboardStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, DashboardStats::default());
    }
}
