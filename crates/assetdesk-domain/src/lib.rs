//! Identifier and role types shared across AssetDesk crates.
//!
//! Pure types only; no framework dependencies beyond serde.

pub mod id;
pub mod role;
