//! Side-effectful host integrations for textutils front ends.

pub mod clipboard;
pub mod env;
