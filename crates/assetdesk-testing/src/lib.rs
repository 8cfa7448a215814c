//! Test utilities for AssetDesk services.
//!
//! Provides `MockCaller` for injecting caller identity and small request
//! builders for router tests. Use from `[dev-dependencies]` only.

pub mod auth;
pub mod request;
