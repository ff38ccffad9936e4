pub(crate) mod alert;
pub(crate) mod campaign_card;
pub(crate) mod campaign_modal;
pub(crate) mod create_campaign_modal;
pub(crate) mod form;
pub(crate) mod header_nav_item;
pub(crate) mod image;
pub(crate) mod issue_card;
pub(crate) mod issue_detail_modal;
pub(crate) mod loading;
pub(crate) mod progress_bar;
pub(crate) mod report_modal;
pub(crate) mod stat_card;
pub(crate) mod status_badge;
pub(crate) mod transparency_detail_modal;
pub(crate) mod user_dropdown;

// Re-export components for convenience
pub use alert::{Alert, AlertKind};
pub use campaign_card::CampaignCard;
pub use campaign_modal::CampaignModal;
pub use create_campaign_modal::CreateCampaignModal;
pub use image::FallbackImage;
pub use issue_card::IssueCard;
pub use issue_detail_modal::IssueDetailModal;
pub use loading::Loading;
pub use progress_bar::ProgressBar;
pub use report_modal::ReportModal;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use transparency_detail_modal::TransparencyDetailModal;
