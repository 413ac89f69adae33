//! Command implementations

pub mod share;
pub mod simple;
pub mod status;

pub use share::{share_reply, share_summary};
pub use simple::{enter_word, run_simple};
pub use status::{StatusReport, status_report};
