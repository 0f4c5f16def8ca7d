//! Common types and utilities for populators.
//!
//! This crate provides the shared argument types that every populate
//! command flattens into its own arguments.

pub mod args;

pub use args::{CommonPopulateArgs, DEFAULT_BATCH_SIZE, DEFAULT_ROW_COUNT};
