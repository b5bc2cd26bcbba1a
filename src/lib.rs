//! Secretaria — school-administration dashboard client.
//!
//! Facade over the workspace crates; see each for the details:
//!
//! - [`secretaria_core`]: errors, envelope normalization, filtering,
//!   academic standing
//! - [`secretaria_config`]: environment-driven configuration
//! - [`secretaria_models`]: domain entities and DTOs
//! - [`secretaria_auth`]: roles, claims, the rule engine, the session
//! - [`secretaria_client`]: the HTTP transport and screen controllers

pub use secretaria_auth as auth;
pub use secretaria_client as client;
pub use secretaria_config as config;
pub use secretaria_models as models;

pub use secretaria_core::{
    AcademicStanding, ApiError, ApprovalPolicy, StandingReport, ValidationFailure, evaluate,
};
