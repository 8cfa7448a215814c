//! sea-orm entities for the inventory database.
//!
//! Status and type columns are plain strings holding the upper-case variant
//! name (`"RUNNING"`, `"SERVER"`); the service parses them into enums.

pub mod departments;
pub mod deployment_tasks;
pub mod hardware;
pub mod sites;
pub mod users;
pub mod virtual_machines;
