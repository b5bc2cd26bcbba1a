//! # Secretaria Models
//!
//! Domain models and DTOs for the secretaria dashboard client.
//!
//! This crate provides all data structures exchanged with the REST backend,
//! including entity records, create/update DTOs with validation, and the
//! per-screen client-side filter criteria.
//!
//! # Modules
//!
//! - [`auth`]: login and password-reset models
//! - [`books`] / [`loans`]: library catalogue and lending
//! - [`calendar`]: school calendar events
//! - [`discipline`]: warnings and suspensions
//! - [`enums`]: closed wire vocabularies
//! - [`grades`]: grades and terms (bimesters)
//! - [`guardians`] / [`students`] / [`teachers`]: people
//! - [`ids`]: strongly-typed entity IDs
//! - [`planner`]: weekly lesson plans
//! - [`reservations`] / [`rooms`]: rooms and their bookings
//! - [`tasks`]: pending tasks

pub mod auth;
pub mod books;
pub mod calendar;
pub mod discipline;
pub mod enums;
pub mod grades;
pub mod guardians;
pub mod ids;
pub mod loans;
pub mod planner;
pub mod reservations;
pub mod rooms;
pub mod students;
pub mod tasks;
pub mod teachers;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, MessageResponse, PasswordResetConfirm, PasswordResetRequest, TokenPair, normalize_cpf};
pub use enums::{
    ClassGroup, EventKind, LoanKind, RoomKind, Shift, Subject, SuspensionReason, TaskStatus,
    WarningReason,
};
pub use ids::{
    BookId, EventId, GradeId, GuardianId, LoanId, PlanId, ReservationId, RoomId, StudentId,
    SuspensionId, TaskId, TeacherId, TermId, WarningId,
};

pub use books::{Book, BookFilter, CreateBookDto};
pub use calendar::{CalendarEvent, CreateEventDto, EventFilter};
pub use discipline::{
    CreateSuspensionDto, CreateWarningDto, DisciplinaryRecord, Suspension, Warning, WarningFilter,
    merge_history,
};
pub use grades::{
    CreateGradeDto, CreateTermDto, Grade, GradeFilter, Term, average_by_subject, grade_values,
};
pub use guardians::{CreateGuardianDto, Guardian, GuardianFilter};
pub use loans::{CreateLoanDto, Loan, LoanFilter};
pub use planner::{CreatePlanDto, PlanFilter, WeeklyPlan};
pub use reservations::{CreateReservationDto, Reservation, ReservationFilter};
pub use rooms::{CreateRoomDto, Room, RoomFilter};
pub use students::{
    CreateStudentDto, DropoutSummary, Student, StudentFilter, UpdateStudentDto, dropout_summary,
};
pub use tasks::{CreateTaskDto, PendingTask, TaskFilter};
pub use teachers::{CreateTeacherDto, Teacher, TeacherFilter};
