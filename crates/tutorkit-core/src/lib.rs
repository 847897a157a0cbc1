//! tutorkit-core — Content extraction and adaptive scoring.
//!
//! This crate defines the fundamental data model, traits, and the pure
//! extraction and scoring pipelines that the entire tutorkit system builds
//! on.

pub mod engine;
pub mod error;
pub mod extract;
pub mod model;
pub mod score;
pub mod traits;
