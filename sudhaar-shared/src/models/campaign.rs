use serde::{Deserialize, Serialize};

use super::amount::{Amount, lenient_count};

choice_enum! {
    /// Cause area of an NGO campaign.
    pub enum CampaignCategory {
        Health => "Health",
        Education => "Education",
        Environment => "Environment",
        Civic => "Civic",
        Sanitation => "Sanitation",
        Water => "Water",
        Electricity => "Electricity",
    }
    fallback Other;
}

impl Default for CampaignCategory {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// One line of a campaign's published budget.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub total_cost: Amount,
    #[serde(default)]
    pub funded_amount: Amount,
}

/// An NGO fundraising campaign.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Campaign {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ngo: Option<i64>,
    #[serde(default)]
    pub ngo_name: Option<String>,
    #[serde(default)]
    pub ngo_email: Option<String>,
    #[serde(default)]
    pub category: CampaignCategory,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_url_full: Option<String>,
    #[serde(default)]
    pub goal_amount: Amount,
    #[serde(default)]
    pub raised_amount: Amount,
    #[serde(default, deserialize_with = "lenient_count")]
    pub donor_count: u32,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub zakat_eligible: bool,
    #[serde(default)]
    pub budget_items: Vec<BudgetItem>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub progress_percentage: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub account_title: Option<String>,
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default)]
    pub wallet_number: Option<String>,
    #[serde(default)]
    pub wallet_title: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

/// Where donors send money for a campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    pub bank_name: String,
    pub account_title: String,
    pub iban: String,
    pub wallet_provider: String,
    pub wallet_number: String,
    pub wallet_title: String,
    pub contact_email: String,
    pub contact_phone: String,
}

fn filled(value: Option<&String>) -> Option<String> {
    value
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

impl Campaign {
    /// Organization name shown on cards.
    #[must_use]
    pub fn ngo_display_name(&self) -> String {
        filled(self.ngo_name.as_ref()).unwrap_or_else(|| "Community NGO".to_string())
    }

    /// Category label, `General` when the campaign has none.
    #[must_use]
    pub fn category_label(&self) -> String {
        let label = self.category.as_str().trim();
        if label.is_empty() {
            "General".to_string()
        } else {
            label.to_string()
        }
    }

    /// The most complete banner URL, if any.
    #[must_use]
    pub fn best_image(&self) -> Option<String> {
        filled(self.image_url_full.as_ref())
            .or_else(|| filled(self.image_url.as_ref()))
            .or_else(|| filled(self.image.as_ref()))
    }

    /// Funding progress for progress bars, capped at 100.
    #[must_use]
    pub fn funded_percent(&self) -> u32 {
        self.raised_amount.percent_of(self.goal_amount).min(100)
    }

    /// Payment details for the donation modal. Campaigns created before the
    /// backend stored bank details get placeholder accounts derived from their
    /// position in the listing.
    #[must_use]
    pub fn payment_details(&self, index: usize) -> PaymentDetails {
        let ngo = self.ngo_display_name();
        let even = index % 2 == 0;
        let compact: String = ngo
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        PaymentDetails {
            bank_name: filled(self.bank_name.as_ref()).unwrap_or_else(|| {
                if even { "Meezan Bank" } else { "HBL" }.to_string()
            }),
            account_title: filled(self.account_title.as_ref())
                .unwrap_or_else(|| format!("{ngo} Trust")),
            iban: filled(self.iban.as_ref()).unwrap_or_else(|| {
                format!("PK{}MEZN00{}", 36 + index, 1_234_567_890 + index)
            }),
            wallet_provider: if even { "JazzCash" } else { "EasyPaisa" }.to_string(),
            wallet_number: filled(self.wallet_number.as_ref())
                .unwrap_or_else(|| format!("030{index}-1234567")),
            wallet_title: filled(self.wallet_title.as_ref())
                .unwrap_or_else(|| format!("{ngo} Admin")),
            contact_email: filled(self.contact_email.as_ref())
                .unwrap_or_else(|| format!("finance@{compact}.org")),
            contact_phone: filled(self.contact_phone.as_ref())
                .unwrap_or_else(|| format!("030{index}-1234567")),
        }
    }
}

/// Text fields of the multipart campaign creation form. The banner is sent
/// as the `image` part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCampaignRequest {
    pub title: String,
    pub description: String,
    pub goal_amount: Amount,
    pub category: CampaignCategory,
    pub zakat_eligible: bool,
}

impl CreateCampaignRequest {
    /// Form parts in submission order.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("goal_amount", self.goal_amount.to_decimal_string()),
            ("category", self.category.to_string()),
            ("zakat_eligible", self.zakat_eligible.to_string()),
        ]
    }
}

/// Filters for `GET /api/campaigns/`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CampaignQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CampaignQuery {
    /// Campaigns currently accepting donations.
    #[must_use]
    pub fn active() -> Self {
        Self {
            is_active: Some(true),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn campaign() -> Campaign {
        serde_json::from_value(json!({
            "id": 5,
            "title": "Clean Water for Narowal",
            "description": "Filtration plants",
            "ngo": 2,
            "ngo_name": "Al Noor Foundation",
            "category": "Water",
            "goal_amount": "500000.00",
            "raised_amount": "125000.50",
            "donor_count": 42,
            "is_verified": true,
            "is_active": true,
            "budget_items": [
                {"id": 1, "item_name": "Pumps", "total_cost": "200000.00", "funded_amount": "50000"}
            ],
            "progress_percentage": 25,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn parses_decimal_strings() {
        let campaign = campaign();
        assert_eq!(campaign.goal_amount, Amount::from_rupees(500_000));
        assert_eq!(campaign.raised_amount, Amount::from_paisa(12_500_050));
        assert_eq!(campaign.budget_items[0].funded_amount, Amount::from_rupees(50_000));
        assert_eq!(campaign.category, CampaignCategory::Water);
        assert_eq!(campaign.funded_percent(), 25);
    }

    #[test]
    fn placeholder_payment_details_alternate_by_index() {
        let campaign = campaign();
        let first = campaign.payment_details(0);
        assert_eq!(first.bank_name, "Meezan Bank");
        assert_eq!(first.account_title, "Al Noor Foundation Trust");
        assert_eq!(first.iban, "PK36MEZN001234567890");
        assert_eq!(first.wallet_provider, "JazzCash");
        assert_eq!(first.contact_email, "finance@alnoorfoundation.org");

        let second = campaign.payment_details(1);
        assert_eq!(second.bank_name, "HBL");
        assert_eq!(second.iban, "PK37MEZN001234567891");
        assert_eq!(second.wallet_provider, "EasyPaisa");
        assert_eq!(second.wallet_number, "0301-1234567");
    }

    #[test]
    fn stored_payment_details_win() {
        let campaign = Campaign {
            bank_name: Some("UBL".into()),
            iban: Some("PK00UBL".into()),
            ..Campaign::default()
        };
        let details = campaign.payment_details(3);
        assert_eq!(details.bank_name, "UBL");
        assert_eq!(details.iban, "PK00UBL");
        assert_eq!(details.account_title, "Community NGO Trust");
        assert_eq!(details.contact_email, "finance@communityngo.org");
    }

    #[test]
    fn category_label_defaults_to_general() {
        assert_eq!(Campaign::default().category_label(), "General");
        assert_eq!(campaign().category_label(), "Water");
    }

    #[test]
    fn funded_percent_is_capped() {
        let campaign = Campaign {
            goal_amount: Amount::from_rupees(100),
            raised_amount: Amount::from_rupees(180),
            ..Campaign::default()
        };
        assert_eq!(campaign.funded_percent(), 100);
        assert_eq!(Campaign::default().funded_percent(), 0);
    }

    #[test]
    fn create_request_form_fields() {
        let request = CreateCampaignRequest {
            title: "Books".into(),
            description: "School books".into(),
            goal_amount: Amount::from_rupees(25_000),
            category: CampaignCategory::Education,
            zakat_eligible: true,
        };
        assert_eq!(
            request.form_fields(),
            vec![
                ("title", "Books".to_string()),
                ("description", "School books".to_string()),
                ("goal_amount", "25000.00".to_string()),
                ("category", "Education".to_string()),
                ("zakat_eligible", "true".to_string()),
            ]
        );
    }

    #[test]
    fn active_query() {
        assert_eq!(
            serde_json::to_value(CampaignQuery::active()).unwrap(),
            json!({"is_active": true})
        );
    }
}
