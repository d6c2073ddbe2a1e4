//! Internal implementation modules for `gist-core`.
//!
//! Most callers should go through `gist_core::api` rather than importing
//! these modules directly.

pub mod commands;
pub mod config;
pub mod runtime;
pub mod tooling;
