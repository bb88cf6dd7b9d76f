//! Implementation of the `#[derive(GridRow)]` macro.
//!
//! Generates field lookup, row identity and fingerprint functions plus field
//! id constants from `#[grid(...)]` field annotations.

mod attrs;
mod derive;

pub use derive::grid_row_derive_impl;
