//! CLI command implementations

pub mod browse;
pub mod completions;
pub mod config;
pub mod entries;
pub mod new_folder;
pub mod search;
pub mod upload;
