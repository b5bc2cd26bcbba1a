//! # Secretaria Core
//!
//! Core types and utilities for the secretaria dashboard client.
//!
//! This crate provides the foundational pieces shared by every screen:
//!
//! - [`errors`]: the client-side error taxonomy
//! - [`envelope`]: normalization of list responses (bare array or `{results}`)
//! - [`filtering`]: pure client-side list filtering
//! - [`standing`]: derived academic approval computation
//! - [`serde`]: custom serde helpers for the backend's wire formats
//!
//! # Example
//!
//! ```ignore
//! use secretaria_core::errors::ApiError;
//! use secretaria_core::standing::{ApprovalPolicy, evaluate};
//!
//! let report = evaluate(30, 10, &[8.0, 9.0, 7.0, 6.0], &ApprovalPolicy::default());
//! assert!(report.standing.is_approved());
//! ```

pub mod envelope;
pub mod errors;
pub mod filtering;
pub mod serde;
pub mod standing;

// Re-export commonly used types at crate root
pub use envelope::ListEnvelope;
pub use errors::{ApiError, ValidationFailure};
pub use filtering::{ListFilter, apply_filter, contains_ci};
pub use standing::{AcademicStanding, ApprovalPolicy, StandingReport, evaluate};
