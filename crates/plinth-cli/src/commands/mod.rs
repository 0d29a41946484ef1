//! CLI command handlers

pub mod bindings;
pub mod groups;
pub mod resolve;
