//! # Secretaria Client
//!
//! The HTTP transport and the generalized CRUD screen controllers of the
//! secretaria dashboard.
//!
//! A [`Session`](secretaria_auth::Session) is obtained from [`AuthApi`],
//! injected into an [`ApiClient`], and each screen wraps that client in a
//! [`ScreenController`] parameterized by its [`Collection`]:
//!
//! ```ignore
//! use std::sync::Arc;
//! use secretaria_client::{ApiClient, AuthApi, ScreenController, StudentsScreen};
//! use secretaria_config::ApiConfig;
//!
//! let config = ApiConfig::from_env();
//! let session = AuthApi::new(&config).login("529.982.247-25", "secret").await?;
//! let client = Arc::new(ApiClient::new(&config, session));
//!
//! let students = StudentsScreen::new(client.clone());
//! students.load().await?;
//! ```

pub mod auth_api;
pub mod http;
pub mod resource;
pub mod screen;

// Re-export commonly used types at crate root
pub use auth_api::AuthApi;
pub use http::ApiClient;
pub use resource::{
    Books, CalendarEvents, Collection, Grades, Guardians, Loans, PendingTasks, Reservations,
    Rooms, Students, Suspensions, Teachers, Terms, UpdateStyle, Warnings, WeeklyPlans,
};
pub use screen::{Confirmation, RemoveOutcome, ScreenController, ScreenState};

/// Per-entity screen aliases, one per dashboard screen.
pub type StudentsScreen = ScreenController<Students>;
pub type GuardiansScreen = ScreenController<Guardians>;
pub type TeachersScreen = ScreenController<Teachers>;
pub type RoomsScreen = ScreenController<Rooms>;
pub type BooksScreen = ScreenController<Books>;
pub type LoansScreen = ScreenController<Loans>;
pub type WarningsScreen = ScreenController<Warnings>;
pub type SuspensionsScreen = ScreenController<Suspensions>;
pub type PendingTasksScreen = ScreenController<PendingTasks>;
pub type GradesScreen = ScreenController<Grades>;
pub type TermsScreen = ScreenController<Terms>;
pub type ReservationsScreen = ScreenController<Reservations>;
pub type CalendarScreen = ScreenController<CalendarEvents>;
pub type PlannerScreen = ScreenController<WeeklyPlans>;
