//! Command implementations for the parsum CLI
//!
//! Each command lives in its own module with its clap arguments and an
//! `execute` entry point.

pub mod bench;
pub mod config;
pub mod sum;
pub mod verify;
pub mod version;
