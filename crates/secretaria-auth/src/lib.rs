//! # Secretaria Auth
//!
//! Roles, access-token claims, the authorization rule engine and the
//! session context for the secretaria dashboard client.
//!
//! Client-side authorization here is a UX convenience: it hides affordances
//! a role may not use and avoids requests that would be rejected anyway.
//! The backend re-checks every action; nothing in this crate is a security
//! boundary.
//!
//! # Example
//!
//! ```ignore
//! use secretaria_auth::{Action, ResourceKind, Role, can_perform};
//!
//! assert!(can_perform(Some(Role::Secretaria), Action::Create, ResourceKind::Students));
//! assert!(!can_perform(None, Action::List, ResourceKind::Students));
//! ```

pub mod claims;
pub mod policy;
pub mod roles;
pub mod session;

// Re-export commonly used types at crate root
pub use claims::{AccessClaims, decode_access_claims};
pub use policy::{
    Action, AdminTab, ResourceKind, Screen, StudentEditScope, StudentField, admin_tabs,
    allowed_screens, can_perform, ensure, student_edit_scope,
};
pub use roles::Role;
pub use session::{Session, SessionError, SessionStore};
