//! Core types and errors for the flowwrap layout engine.
//!
//! This crate provides the foundational types shared by the layout crate:
//! - Insets, sizes and visibility states
//! - Child dimensions and the measure spec protocol
//! - Error types

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
