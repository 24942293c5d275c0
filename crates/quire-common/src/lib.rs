//! Common utilities for the Quire box-model core.
//!
//! This crate provides shared infrastructure used by the document, style and
//! box crates:
//! - **Warning System** - deduplicated, colored diagnostics for values the
//!   core does not understand and for styles it had to fall back on

pub mod warning;
