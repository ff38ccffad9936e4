pub mod app_state;
pub mod feed_state;
