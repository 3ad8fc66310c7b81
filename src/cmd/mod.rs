//! Command handlers for the ugrid-check CLI

pub mod check;
pub mod dump;
pub mod list;
