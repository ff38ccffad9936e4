pub mod auth_layout;
pub mod footer;
pub mod header;
pub mod layout;
pub mod page_content;
