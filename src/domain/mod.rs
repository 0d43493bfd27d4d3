pub mod branch;
pub mod command;
pub mod ticket;
pub mod tracker;
