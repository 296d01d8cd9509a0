//! Command implementations for connect-doctor CLI

pub mod compare;
pub mod completions;
pub mod component;
pub mod menu;
pub mod status;
pub mod version;
