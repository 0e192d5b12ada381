//! State model for the ultratrace image annotator: traces, the active
//! trace selection, commit-on-blur name editing and the annotation log.

pub mod config;
pub mod error;
pub mod id_source;
pub mod intake;
pub mod model;
pub mod views;

pub use config::{ColorPolicy, ConfigError, OrphanPolicy, SessionConfig};
pub use error::SessionError;
pub use id_source::{IdSource, RandomIds, SequentialIds};
pub use intake::IntakeOutcome;
