pub mod use_entries;
pub mod use_session;
pub mod use_toast;
