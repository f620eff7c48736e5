//! Launchkit library interface
//!
//! This crate provides launch-time helpers for pipeline worker processes:
//! a one-line summary of the arguments the running process was started with
//! (for diagnostic logging), and substitution of `${PORT_<name>}`
//! placeholders in configuration text with concrete free ports.
//!
//! # Module Organization
//!
//! - [`errors`] - Error types (LaunchkitError, Result)
//! - [`args`] - Startup argument summary and configuration formatting
//! - [`ports`] - Port-token resolution

pub mod args;
pub mod errors;
pub mod ports;
