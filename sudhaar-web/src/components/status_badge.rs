use shared::models::IssueStatus;
use yew::{Html, Properties, classes, function_component, html};

/// Badge colour for an issue status.
pub fn status_class(status: &IssueStatus) -> &'static str {
    match status {
        IssueStatus::Verified => "bg-emerald-500",
        IssueStatus::InProgress => "bg-blue-500",
        IssueStatus::Pending | IssueStatus::Open => "bg-amber-500",
        IssueStatus::Critical => "bg-red-600 animate-pulse",
        IssueStatus::Resolved | IssueStatus::Rejected | IssueStatus::Unknown(_) => "bg-slate-500",
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: IssueStatus,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={classes!(
            "px-3", "py-1", "rounded-full", "text-[10px]", "font-bold", "text-white",
            "uppercase", "tracking-wider", "shadow-sm", status_class(&props.status)
        )}>
            { props.status.as_str() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert_eq!(status_class(&IssueStatus::Verified), "bg-emerald-500");
        assert!(status_class(&IssueStatus::Critical).contains("animate-pulse"));
        assert_eq!(
            status_class(&IssueStatus::Unknown("Archived".into())),
            "bg-slate-500"
        );
    }
}
