pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod notes;
pub mod project;
pub mod result;
pub mod tracker;
pub mod vendor;
pub mod version;

#[cfg(test)]
pub mod test_helpers;
