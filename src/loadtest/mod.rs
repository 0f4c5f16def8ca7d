//! Loadtest command handlers.
//!
//! This module contains handlers for the populate and verify commands.

pub mod populate;
pub mod verify;
