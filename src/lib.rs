//! Aviator (workspace facade crate).
//!
//! Re-exports the workspace crates under one `aviator::{core,input,term,types}`
//! namespace and holds the runner's environment configuration.

pub mod config;

pub use aviator_core as core;
pub use aviator_input as input;
pub use aviator_term as term;
pub use aviator_types as types;
