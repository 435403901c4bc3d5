//! Output: presentation-ready data structures.
//!
//! This module handles the last stage of the pipeline - turning a
//! `CountResult` into a per-language table that a renderer can print or
//! serialize without further computation.

pub mod table;

pub use table::{LanguageRow, LanguageTable};
