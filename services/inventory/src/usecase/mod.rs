pub mod auth;
pub mod cascade;
pub mod context;
pub mod department;
pub mod deployment_task;
pub mod hardware;
pub mod link;
pub mod listing;
pub mod site;
pub mod user;
pub mod virtual_machine;
