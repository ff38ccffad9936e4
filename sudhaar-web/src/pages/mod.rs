mod archive;
mod campaign_details;
mod campaign_management;
mod contact;
mod dashboard;
mod donate;
mod landing;
mod legal;
pub mod login;
mod map;
mod my_reports;
mod ngo_dashboard;
mod register;
mod transparency;
mod transparency_hub;

pub use archive::ArchivePage;
pub use campaign_details::CampaignDetailsPage;
pub use campaign_management::CampaignManagementPage;
pub use contact::ContactPage;
pub use dashboard::DashboardPage;
pub use donate::DonatePage;
pub use landing::LandingPage;
pub use legal::{PrivacyPage, TermsPage};
pub use login::LoginPage;
pub use map::MapPage;
pub use my_reports::MyReportsPage;
pub use ngo_dashboard::NgoDashboardPage;
pub use register::RegisterPage;
pub use transparency::TransparencyPage;
pub use transparency_hub::TransparencyHubPage;

/// Whole number with thousands separators, e.g. `12,480`.
pub(crate) fn grouped_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::grouped_count;

    #[test]
    fn test_grouped_count() {
        assert_eq!(grouped_count(0), "0");
        assert_eq!(grouped_count(999), "999");
        assert_eq!(grouped_count(1_000), "1,000");
        assert_eq!(grouped_count(12_480), "12,480");
        assert_eq!(grouped_count(1_234_567), "1,234,567");
    }
}
