//! tutorkit-store — File-backed stores and configuration.
//!
//! Implements the core data-access traits over a plain data directory:
//! markdown topic documents, a JSON question bank, and a JSON attempt log,
//! plus the TOML application config that wires them together.

pub mod attempts;
pub mod config;
pub mod documents;
pub mod questions;

pub use attempts::JsonAttemptStore;
pub use config::{load_config, load_config_from, AppConfig};
pub use documents::DirDocumentStore;
pub use questions::JsonQuestionStore;
