pub mod branch;
pub mod commit;
pub mod config;
pub mod open;
pub mod pull_request;
