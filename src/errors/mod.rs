//! Error types for the front-end.
//!
//! This module defines the diagnostics recorded while parsing:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of parse anomaly
//! - Short tips used when rendering an error against its source

pub mod errors;
