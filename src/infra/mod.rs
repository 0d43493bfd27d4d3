pub mod browser;
pub mod git;
pub mod terminal;
pub mod tracker;
