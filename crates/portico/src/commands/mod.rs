//! CLI command implementations.

pub mod clear;
pub mod export;
pub mod init;
pub mod preview;
pub mod set;
pub mod show;
pub mod watch;
