//! Issue feed state shared by the issue cards and the detail modal.
//!
//! The feed owns the only copy of each issue's vote count. Cards and the
//! modal render from it and report clicks back as [`FeedAction`]s, so an
//! optimistic vote is visible everywhere at once and a rollback restores
//! every view together.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::{debug, warn};

use crate::models::{Issue, IssueId};

/// Number of issues revealed per "Load More" click.
pub const PAGE_SIZE: usize = 6;

/// Sort orders offered by the dashboard filter pills.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum FeedOrdering {
    #[default]
    Trending,
    Newest,
}

impl FeedOrdering {
    /// The `ordering` query value the issues endpoint expects.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::Trending => "-upvotes",
            Self::Newest => "-created_at",
        }
    }
}

/// Which vote endpoint a toggle must call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    Upvote,
    RemoveUpvote,
}

/// Vote-related fields of one issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteState {
    pub upvotes: u32,
    pub has_upvoted: bool,
}

impl VoteState {
    fn of(issue: &Issue) -> Self {
        Self {
            upvotes: issue.upvotes,
            has_upvoted: issue.user_has_upvoted,
        }
    }

    fn toggled(self) -> Self {
        if self.has_upvoted {
            Self {
                upvotes: self.upvotes.saturating_sub(1),
                has_upvoted: false,
            }
        } else {
            Self {
                upvotes: self.upvotes.saturating_add(1),
                has_upvoted: true,
            }
        }
    }
}

/// A vote that has been applied locally and is waiting for the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteIntent {
    pub issue_id: IssueId,
    pub action: VoteAction,
    pub previous: VoteState,
    pub optimistic: VoteState,
}

/// Everything the UI can ask the feed to do.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    Replace(Vec<Issue>),
    ShowMore,
    ResetPaging,
    Select(IssueId),
    ClearSelection,
    /// Apply a vote planned with [`IssueFeed::plan_vote`].
    BeginVote(VoteIntent),
    /// Server answer for an earlier intent: the authoritative count on
    /// success, `None` when the request failed.
    SettleVote(VoteIntent, Option<u32>),
    /// Replace a single issue after an edit such as a status change.
    Update(Issue),
}

/// The issue list with paging, selection and in-flight vote tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueFeed {
    issues: Vec<Issue>,
    visible: usize,
    page_size: usize,
    selected: Option<IssueId>,
    in_flight: HashSet<IssueId>,
}

impl Default for IssueFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueFeed {
    /// An empty feed showing [`PAGE_SIZE`] issues at a time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// An empty feed that reveals `page_size` issues per page. A zero page
    /// size shows everything.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = if page_size == 0 { usize::MAX } else { page_size };
        Self {
            issues: Vec::new(),
            visible: page_size,
            page_size,
            selected: None,
            in_flight: HashSet::new(),
        }
    }

    /// Swap in a freshly loaded list. Paging and the selection survive; votes
    /// still in flight keep their guard so a late answer settles cleanly.
    pub fn replace(&mut self, issues: Vec<Issue>) {
        self.issues = issues;
    }

    /// Issues currently revealed.
    #[must_use]
    pub fn visible(&self) -> &[Issue] {
        let end = self.visible.min(self.issues.len());
        &self.issues[..end]
    }

    /// Every loaded issue, ignoring paging.
    #[must_use]
    pub fn all(&self) -> &[Issue] {
        &self.issues
    }

    /// Whether "Load More" has anything left to reveal.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.visible < self.issues.len()
    }

    /// Reveal one more page.
    pub fn show_more(&mut self) {
        self.visible = self.visible.saturating_add(self.page_size);
    }

    /// Back to the first page, used when the ordering changes.
    pub fn reset_paging(&mut self) {
        self.visible = self.page_size;
    }

    /// Open the detail view for an issue.
    pub fn select(&mut self, id: IssueId) {
        self.selected = Some(id);
    }

    /// Close the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected issue, looked up live so it always matches the list.
    #[must_use]
    pub fn selected(&self) -> Option<&Issue> {
        let id = self.selected?;
        self.get(id)
    }

    /// Look up a loaded issue.
    #[must_use]
    pub fn get(&self, id: IssueId) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    fn get_mut(&mut self, id: IssueId) -> Option<&mut Issue> {
        self.issues.iter_mut().find(|issue| issue.id == id)
    }

    /// Whether a vote request for `id` is outstanding.
    #[must_use]
    pub fn is_voting(&self, id: IssueId) -> bool {
        self.in_flight.contains(&id)
    }

    /// Work out what toggling the vote on `id` would do, without applying it.
    ///
    /// Returns `None` when the issue is unknown or a vote for it is already
    /// in flight.
    #[must_use]
    pub fn plan_vote(&self, id: IssueId) -> Option<VoteIntent> {
        if self.in_flight.contains(&id) {
            return None;
        }
        let previous = VoteState::of(self.get(id)?);
        let action = if previous.has_upvoted {
            VoteAction::RemoveUpvote
        } else {
            VoteAction::Upvote
        };
        Some(VoteIntent {
            issue_id: id,
            action,
            previous,
            optimistic: previous.toggled(),
        })
    }

    /// Apply a planned vote locally and mark it in flight. Returns `false`
    /// and changes nothing when a vote for the same issue is outstanding.
    pub fn start_vote(&mut self, intent: VoteIntent) -> bool {
        if self.in_flight.contains(&intent.issue_id) {
            debug!(issue_id = intent.issue_id, "vote ignored while another is in flight");
            return false;
        }
        let Some(issue) = self.get_mut(intent.issue_id) else {
            return false;
        };
        issue.upvotes = intent.optimistic.upvotes;
        issue.user_has_upvoted = intent.optimistic.has_upvoted;
        self.in_flight.insert(intent.issue_id);
        true
    }

    /// Toggle the signed-in user's vote locally.
    ///
    /// Returns `None` when the issue is unknown or a vote for it is already
    /// in flight; the click is then ignored.
    pub fn begin_vote(&mut self, id: IssueId) -> Option<VoteIntent> {
        let intent = self.plan_vote(id)?;
        self.start_vote(intent).then_some(intent)
    }

    /// Reconcile a vote with the server's answer.
    ///
    /// On success the server's count replaces the optimistic one. On failure
    /// the issue returns to exactly the state it had before the click.
    pub fn settle_vote(&mut self, intent: VoteIntent, server_upvotes: Option<u32>) {
        self.in_flight.remove(&intent.issue_id);
        let Some(issue) = self.get_mut(intent.issue_id) else {
            debug!(issue_id = intent.issue_id, "settled vote for an issue no longer listed");
            return;
        };
        if let Some(upvotes) = server_upvotes {
            issue.upvotes = upvotes;
            issue.user_has_upvoted = intent.optimistic.has_upvoted;
            debug!(issue_id = intent.issue_id, upvotes, "vote confirmed");
        } else {
            issue.upvotes = intent.previous.upvotes;
            issue.user_has_upvoted = intent.previous.has_upvoted;
            warn!(issue_id = intent.issue_id, "vote failed, restored previous count");
        }
    }

    /// Replace one issue in place, keeping its position.
    pub fn update(&mut self, issue: Issue) {
        if let Some(slot) = self.get_mut(issue.id) {
            *slot = issue;
        }
    }

    /// Apply a UI action.
    pub fn apply(&mut self, action: FeedAction) {
        match action {
            FeedAction::Replace(issues) => self.replace(issues),
            FeedAction::ShowMore => self.show_more(),
            FeedAction::ResetPaging => self.reset_paging(),
            FeedAction::Select(id) => self.select(id),
            FeedAction::ClearSelection => self.clear_selection(),
            FeedAction::BeginVote(intent) => {
                self.start_vote(intent);
            }
            FeedAction::SettleVote(intent, upvotes) => self.settle_vote(intent, upvotes),
            FeedAction::Update(issue) => self.update(issue),
        }
    }

    /// Number of loaded issues.
    #[must_use]
    pub fn total(&self) -> usize {
        self.issues.len()
    }

    /// Mean upvotes across loaded issues, rounded. Zero for an empty feed.
    #[must_use]
    pub fn average_upvotes(&self) -> u32 {
        if self.issues.is_empty() {
            return 0;
        }
        let sum: u64 = self.issues.iter().map(|issue| u64::from(issue.upvotes)).sum();
        let count = self.issues.len() as u64;
        u32::try_from((sum + count / 2) / count).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: IssueId, upvotes: u32, has_upvoted: bool) -> Issue {
        Issue {
            id,
            title: format!("Issue {id}"),
            upvotes,
            user_has_upvoted: has_upvoted,
            ..Issue::default()
        }
    }

    fn feed_of(count: i64) -> IssueFeed {
        let mut feed = IssueFeed::new();
        feed.replace((1..=count).map(|id| issue(id, 0, false)).collect());
        feed
    }

    #[test]
    fn ordering_query_values() {
        assert_eq!(FeedOrdering::Trending.as_query(), "-upvotes");
        assert_eq!(FeedOrdering::Newest.as_query(), "-created_at");
        assert_eq!(FeedOrdering::default(), FeedOrdering::Trending);
    }

    #[test]
    fn pages_six_at_a_time() {
        let mut feed = feed_of(14);
        assert_eq!(feed.visible().len(), 6);
        assert!(feed.has_more());

        feed.show_more();
        assert_eq!(feed.visible().len(), 12);
        feed.show_more();
        assert_eq!(feed.visible().len(), 14);
        assert!(!feed.has_more());

        feed.reset_paging();
        assert_eq!(feed.visible().len(), 6);
    }

    #[test]
    fn short_feed_has_no_more() {
        let feed = feed_of(4);
        assert_eq!(feed.visible().len(), 4);
        assert!(!feed.has_more());
    }

    #[test]
    fn optimistic_upvote_then_server_count() {
        let mut feed = IssueFeed::new();
        feed.replace(vec![issue(1, 4, false)]);

        let intent = feed.begin_vote(1).unwrap();
        assert_eq!(intent.action, VoteAction::Upvote);
        assert_eq!(feed.get(1).unwrap().upvotes, 5);
        assert!(feed.get(1).unwrap().user_has_upvoted);
        assert!(feed.is_voting(1));

        feed.settle_vote(intent, Some(9));
        let settled = feed.get(1).unwrap();
        assert_eq!(settled.upvotes, 9);
        assert!(settled.user_has_upvoted);
        assert!(!feed.is_voting(1));
    }

    #[test]
    fn failed_vote_restores_snapshot() {
        let mut feed = IssueFeed::new();
        feed.replace(vec![issue(1, 3, true)]);

        let intent = feed.begin_vote(1).unwrap();
        assert_eq!(intent.action, VoteAction::RemoveUpvote);
        assert_eq!(feed.get(1).unwrap().upvotes, 2);
        assert!(!feed.get(1).unwrap().user_has_upvoted);

        feed.settle_vote(intent, None);
        let restored = feed.get(1).unwrap();
        assert_eq!(restored.upvotes, 3);
        assert!(restored.user_has_upvoted);
    }

    #[test]
    fn second_click_while_in_flight_is_ignored() {
        let mut feed = IssueFeed::new();
        feed.replace(vec![issue(1, 0, false), issue(2, 0, false)]);

        let first = feed.begin_vote(1).unwrap();
        assert!(feed.begin_vote(1).is_none());
        assert_eq!(feed.get(1).unwrap().upvotes, 1);

        // other issues are independent
        assert!(feed.begin_vote(2).is_some());

        feed.settle_vote(first, Some(1));
        assert!(feed.begin_vote(1).is_some());
    }

    #[test]
    fn unvote_at_zero_does_not_underflow() {
        let mut feed = IssueFeed::new();
        feed.replace(vec![issue(1, 0, true)]);
        let intent = feed.begin_vote(1).unwrap();
        assert_eq!(intent.optimistic.upvotes, 0);
    }

    #[test]
    fn unknown_issue_yields_no_intent() {
        let mut feed = feed_of(2);
        assert!(feed.begin_vote(99).is_none());
        assert!(!feed.is_voting(99));
    }

    #[test]
    fn selection_tracks_the_list_entry() {
        let mut feed = IssueFeed::new();
        feed.replace(vec![issue(7, 10, false)]);
        feed.apply(FeedAction::Select(7));

        let intent = feed.plan_vote(7).unwrap();
        assert_eq!(feed.selected().unwrap().upvotes, 10);
        feed.apply(FeedAction::BeginVote(intent));
        assert_eq!(feed.selected().unwrap().upvotes, 11);

        // a stale duplicate of the same intent is ignored
        feed.apply(FeedAction::BeginVote(intent));
        assert_eq!(feed.selected().unwrap().upvotes, 11);

        feed.apply(FeedAction::SettleVote(intent, None));
        assert_eq!(feed.selected().unwrap().upvotes, 10);
        assert!(!feed.is_voting(7));

        feed.apply(FeedAction::ClearSelection);
        assert!(feed.selected().is_none());
    }

    #[test]
    fn selection_disappears_when_issue_is_gone() {
        let mut feed = feed_of(3);
        feed.select(2);
        feed.replace(vec![issue(1, 0, false)]);
        assert!(feed.selected().is_none());
    }

    #[test]
    fn late_settle_after_reload_applies_to_new_list() {
        let mut feed = IssueFeed::new();
        feed.replace(vec![issue(1, 4, false)]);
        let intent = feed.begin_vote(1).unwrap();

        feed.replace(vec![issue(1, 4, false)]);
        assert!(feed.is_voting(1));
        feed.settle_vote(intent, Some(5));
        assert_eq!(feed.get(1).unwrap().upvotes, 5);
        assert!(feed.get(1).unwrap().user_has_upvoted);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut feed = feed_of(3);
        let mut edited = issue(2, 0, false);
        edited.title = "Edited".into();
        feed.apply(FeedAction::Update(edited));
        assert_eq!(feed.all()[1].title, "Edited");
    }

    #[test]
    fn average_upvotes_rounds() {
        let mut feed = IssueFeed::new();
        assert_eq!(feed.average_upvotes(), 0);
        feed.replace(vec![issue(1, 1, false), issue(2, 2, false)]);
        assert_eq!(feed.average_upvotes(), 2);
        feed.replace(vec![issue(1, 1, false), issue(2, 1, false), issue(3, 2, false)]);
        assert_eq!(feed.average_upvotes(), 1);
        assert_eq!(feed.total(), 3);
    }

    #[test]
    fn zero_page_size_shows_everything() {
        let mut feed = IssueFeed::with_page_size(0);
        feed.replace((1..=20).map(|id| issue(id, 0, false)).collect());
        assert_eq!(feed.visible().len(), 20);
        assert!(!feed.has_more());
    }
}
