//! Service plumbing shared by AssetDesk binaries.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
