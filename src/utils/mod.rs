//! Utility functions for qrguard
//!
//! Provides environment variable handling.

pub mod env;

pub use env::{load_env, load_env_file};
