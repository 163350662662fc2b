//! # chainwatch-core
//!
//! Foundation crate for the Chainwatch supply-chain engines.
//! Defines the location, event, and recommendation models, the error
//! hierarchy, configuration, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::{ChainwatchConfig, Objective, OptimizationConfig};
pub use errors::{ChainwatchError, ChainwatchResult};
pub use models::{
    Coordinate, DataIssue, Event, Impact, IssueCategory, IssueField, LocationRecord,
    Priority, QualityReport, Recommendation, Severity, Site,
};
