#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)] // TODO(deps-001): remove once transitive dependencies converge.

//! Backend records, form rules and client-side state for the Sudhaar web client.

pub mod feed;
pub mod filters;
pub mod models;
pub mod session;
pub mod time;
pub mod validation;

pub use feed::{FeedAction, FeedOrdering, IssueFeed, VoteAction, VoteIntent, VoteState};
pub use session::{GuardOutcome, Session};
pub use validation::FormError;
