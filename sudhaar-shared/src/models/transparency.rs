use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// A published spending disclosure.
///
/// NGO expense uploads carry `campaign`, `amount_spent` and a receipt; the
/// platform-wide reports carry the summary totals. Both come back from the
/// same listing, so every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransparencyReport {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub campaign: Option<i64>,
    #[serde(default)]
    pub amount_spent: Option<Amount>,
    #[serde(default)]
    pub receipt_image: Option<String>,
    #[serde(default)]
    pub total_funds_donated: Option<Amount>,
    #[serde(default)]
    pub funds_utilized: Option<Amount>,
    #[serde(default)]
    pub available_balance: Option<Amount>,
    #[serde(default)]
    pub created_by_email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Platform-wide money flow from `/api/transparency/summary/`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransparencySummary {
    #[serde(default)]
    pub total_funds_donated: Amount,
    #[serde(default)]
    pub funds_utilized: Amount,
    #[serde(default)]
    pub available_balance: Amount,
}

impl TransparencySummary {
    /// Share of donated funds already spent, rounded.
    #[must_use]
    pub fn utilization_percent(&self) -> u32 {
        self.funds_utilized.percent_of(self.total_funds_donated)
    }
}

/// Text fields of an expense disclosure upload. The receipt photo is sent as
/// the `receipt_image` part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateExpenseReport {
    pub campaign: i64,
    pub amount_spent: Amount,
    pub description: String,
}

impl CreateExpenseReport {
    /// Form parts in submission order.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("campaign", self.campaign.to_string()),
            ("amount_spent", self.amount_spent.to_decimal_string()),
            ("description", self.description.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_accepts_numbers_and_strings() {
        let summary: TransparencySummary = serde_json::from_value(json!({
            "total_funds_donated": "150000.00",
            "funds_utilized": 50000,
            "available_balance": 100000.0
        }))
        .unwrap();
        assert_eq!(summary.total_funds_donated, Amount::from_rupees(150_000));
        assert_eq!(summary.available_balance, Amount::from_rupees(100_000));
        assert_eq!(summary.utilization_percent(), 33);
    }

    #[test]
    fn report_tolerates_either_shape() {
        let expense: TransparencyReport = serde_json::from_value(json!({
            "id": 1,
            "campaign": 4,
            "amount_spent": "5000",
            "description": "Blankets"
        }))
        .unwrap();
        assert_eq!(expense.amount_spent, Some(Amount::from_rupees(5000)));
        assert_eq!(expense.total_funds_donated, None);
    }

    #[test]
    fn expense_form_fields() {
        let report = CreateExpenseReport {
            campaign: 4,
            amount_spent: Amount::from_rupees(5000),
            description: "Bought 20 blankets".into(),
        };
        assert_eq!(report.form_fields()[1], ("amount_spent", "5000.00".to_string()));
    }
}
