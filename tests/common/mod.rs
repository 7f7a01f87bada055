//! Common test utilities for SiteLedger CLI tests.
//!
//! Provides `TestEnv`: an isolated environment with temp data and home
//! directories, plus helpers to run the compiled binary.

pub mod env;

pub use env::*;
