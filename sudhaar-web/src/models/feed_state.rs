//! Page-local issue feed shared by the cards and the detail modal.

use crate::api::SudhaarClient;
use shared::feed::{FeedAction, IssueFeed, VoteAction};
use shared::models::IssueId;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Reducible, UseReducerHandle};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// [`IssueFeed`] as a yew reducer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState(pub IssueFeed);

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut feed = self.0.clone();
        feed.apply(action);
        Rc::new(Self(feed))
    }
}

impl std::ops::Deref for FeedState {
    type Target = IssueFeed;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Click handler for vote toggles: apply optimistically, call the endpoint
/// and settle with the server's count or roll back.
pub fn vote_handler(feed: &UseReducerHandle<FeedState>) -> Callback<IssueId> {
    let feed = feed.clone();
    Callback::from(move |id: IssueId| {
        let Some(intent) = feed.plan_vote(id) else {
            return;
        };
        feed.dispatch(FeedAction::BeginVote(intent));
        let feed = feed.clone();
        spawn_local(async move {
            let client = SudhaarClient::shared();
            let result = match intent.action {
                VoteAction::Upvote => client.upvote(id).await,
                VoteAction::RemoveUpvote => client.remove_upvote(id).await,
            };
            let upvotes = match result {
                Ok(response) => Some(response.upvotes),
                Err(err) => {
                    log(&format!("Vote on issue {id} failed: {err}"));
                    None
                }
            };
            feed.dispatch(FeedAction::SettleVote(intent, upvotes));
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Issue;

    fn state() -> Rc<FeedState> {
        let issues = (1..=8)
            .map(|id| Issue {
                id,
                upvotes: 3,
                ..Issue::default()
            })
            .collect();
        Rc::new(FeedState::default()).reduce(FeedAction::Replace(issues))
    }

    #[test]
    fn reducer_applies_vote_lifecycle() {
        let state = state();
        let intent = state.plan_vote(2).unwrap();
        let state = state.reduce(FeedAction::BeginVote(intent));
        assert!(state.is_voting(2));
        assert_eq!(state.plan_vote(2), None);

        let state = state.reduce(FeedAction::SettleVote(intent, None));
        assert!(!state.is_voting(2));
        assert_eq!(state.all()[1].upvotes, 3);
    }

    #[test]
    fn reducer_pages_and_selects() {
        let state = state();
        assert_eq!(state.visible().len(), 6);
        let state = state.reduce(FeedAction::ShowMore);
        assert_eq!(state.visible().len(), 8);
        let state = state.reduce(FeedAction::Select(5));
        assert_eq!(state.selected().map(|issue| issue.id), Some(5));
    }
}
