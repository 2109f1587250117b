// Scholar Badge: Google Scholar citation badge generator
//
// This is the library root. Each module corresponds to one step of the
// update pipeline, plus terminal output and configuration.

pub mod badge;
pub mod config;
pub mod notify;
pub mod output;
pub mod pipeline;
pub mod scholar;
pub mod status;

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = concat!("scholar-badge/", env!("CARGO_PKG_VERSION"));
