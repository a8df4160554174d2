//! Configuration module
//!
//! User settings loaded from the config file.

pub mod config;
