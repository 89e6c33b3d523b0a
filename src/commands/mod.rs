//! Command implementations for the ygit CLI

pub mod add;
pub mod check;
pub mod completions;
pub mod create;
pub mod init;
pub mod remove;
pub mod setup;
pub mod show;
pub mod version;
