//! Domain layer
//!
//! Typed configuration records consumed by the rest of the process.

pub mod models;
