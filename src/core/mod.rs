//! Core library components.
//!
//! The allow-list, payload sanitizing, provider access and the
//! reconciliation workflow. Nothing in here reads process environment;
//! callers pass configuration in.

pub mod config;
pub mod constants;
pub mod domain;
pub mod guard;
pub mod keys;
pub mod provider;
pub mod reader;
pub mod reconcile;
pub mod sanitize;
pub mod sync;
pub mod types;
