//! Caller identity types shared across AssetDesk services.
//!
//! Provides the `CallerHeaders` extractor for the out-of-band `x-user-id` header.

pub mod identity;
