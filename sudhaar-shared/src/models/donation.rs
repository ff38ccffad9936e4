use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// A recorded donation to a campaign.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Donation {
    pub id: i64,
    #[serde(default)]
    pub campaign: Option<i64>,
    #[serde(default)]
    pub campaign_title: Option<String>,
    #[serde(default)]
    pub donor: Option<i64>,
    #[serde(default)]
    pub donor_email: Option<String>,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Donation {
    /// Name shown in the donations table.
    #[must_use]
    pub fn donor_label(&self) -> &str {
        if self.is_anonymous {
            return "Anonymous";
        }
        self.donor_name
            .as_deref()
            .or(self.donor_email.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Anonymous")
    }
}

/// Body of `POST /api/donations/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDonationRequest {
    pub campaign: i64,
    pub amount: Amount,
    pub is_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Filters for `GET /api/donations/`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DonationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn anonymous_donations_hide_the_donor() {
        let donation: Donation = serde_json::from_value(json!({
            "id": 1,
            "campaign": 5,
            "donor_name": "Anonymous",
            "donor_email": "hidden@x.pk",
            "amount": "2500.00",
            "is_anonymous": true
        }))
        .unwrap();
        assert_eq!(donation.donor_label(), "Anonymous");
        assert_eq!(donation.amount, Amount::from_rupees(2500));
    }

    #[test]
    fn donor_label_prefers_name_then_email() {
        let named = Donation {
            donor_name: Some("Usman".into()),
            donor_email: Some("u@x.pk".into()),
            ..Donation::default()
        };
        let emailed = Donation {
            donor_email: Some("u@x.pk".into()),
            ..Donation::default()
        };
        assert_eq!(named.donor_label(), "Usman");
        assert_eq!(emailed.donor_label(), "u@x.pk");
    }

    #[test]
    fn create_request_sends_decimal_amount() {
        let body = CreateDonationRequest {
            campaign: 5,
            amount: Amount::from_rupees(1000),
            is_anonymous: false,
            payment_method: Some("bank_transfer".into()),
            transaction_id: None,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "campaign": 5,
                "amount": "1000.00",
                "is_anonymous": false,
                "payment_method": "bank_transfer"
            })
        );
    }
}
