//! Command handlers behind the CLI and the interactive menu.

pub mod action;
pub mod config;
pub mod context;
pub mod info;
pub mod menu;
pub mod orphans;
pub mod search;
pub mod update;

pub use context::Context;
