use serde::Deserialize;

use assetdesk_core::config::Config;

use crate::domain::policy::AnonymousListAccess;

/// Inventory service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct InventoryConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `INVENTORY_PORT`.
    #[serde(default = "default_port")]
    pub inventory_port: u16,
    /// What callers without `x-user-id` see in list views. Env var:
    /// `ANONYMOUS_LIST_ACCESS` (`unrestricted` or `denied`).
    #[serde(default)]
    pub anonymous_list_access: AnonymousListAccess,
}

fn default_port() -> u16 {
    3114
}

impl Config for InventoryConfig {}
