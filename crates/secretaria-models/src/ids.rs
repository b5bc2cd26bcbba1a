//! Strongly-typed ID newtypes for domain entities.
//!
//! The backend hands out opaque integer primary keys. Wrapping each entity's
//! key in its own newtype prevents accidental misuse (e.g., passing a
//! `RoomId` where a `StudentId` is expected).
//!
//! # Example
//!
//! ```ignore
//! use secretaria_models::ids::{StudentId, GuardianId};
//!
//! fn get_student(id: StudentId) { /* ... */ }
//!
//! let student_id = StudentId::new(42);
//! get_student(student_id);        // OK
//! // get_student(GuardianId::new(42)); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a strongly-typed ID newtype.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wrap a raw backend key.
            #[inline]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the inner key value.
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Student entities.
    StudentId
);

define_id!(
    /// Strongly-typed ID for Guardian entities.
    GuardianId
);

define_id!(
    /// Strongly-typed ID for Teacher entities.
    TeacherId
);

define_id!(
    /// Strongly-typed ID for Room entities.
    RoomId
);

define_id!(
    /// Strongly-typed ID for Book entities.
    BookId
);

define_id!(
    /// Strongly-typed ID for Loan entities.
    LoanId
);

define_id!(
    /// Strongly-typed ID for Warning disciplinary records.
    WarningId
);

define_id!(
    /// Strongly-typed ID for Suspension disciplinary records.
    SuspensionId
);

define_id!(
    /// Strongly-typed ID for PendingTask entities.
    TaskId
);

define_id!(
    /// Strongly-typed ID for Grade entities.
    GradeId
);

define_id!(
    /// Strongly-typed ID for Term (bimester) entities.
    TermId
);

define_id!(
    /// Strongly-typed ID for Reservation entities.
    ReservationId
);

define_id!(
    /// Strongly-typed ID for CalendarEvent entities.
    EventId
);

define_id!(
    /// Strongly-typed ID for WeeklyPlan entities.
    PlanId
);
