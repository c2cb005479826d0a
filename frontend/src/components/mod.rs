pub mod common;
pub mod dialog;
pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
pub mod timeline;
pub mod toast;
