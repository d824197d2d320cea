//! Shared helpers for packaging.

pub mod fs;
