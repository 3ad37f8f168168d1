//! Prelude module for the nerdcal crate.
//!
//! Re-exports the derive macros used across calendar types.

pub use derive_more::Display;
