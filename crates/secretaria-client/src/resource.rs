//! Collection descriptions wiring entities to their endpoints.
//!
//! Each marker type ties together a wire path, the [`ResourceKind`] the
//! rule engine knows it by, and the record/payload types the screen
//! controller exchanges with it.

use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use secretaria_auth::ResourceKind;
use secretaria_models::{
    Book, CalendarEvent, CreateBookDto, CreateEventDto, CreateGradeDto, CreateGuardianDto,
    CreateLoanDto, CreatePlanDto, CreateReservationDto, CreateRoomDto, CreateStudentDto,
    CreateSuspensionDto, CreateTaskDto, CreateTeacherDto, CreateTermDto, CreateWarningDto, Grade,
    Guardian, Loan, PendingTask, Reservation, Room, Student, Suspension, Teacher, Term,
    UpdateStudentDto, Warning, WeeklyPlan,
};
use secretaria_models::ids::{
    BookId, EventId, GradeId, GuardianId, LoanId, PlanId, ReservationId, RoomId, StudentId,
    SuspensionId, TaskId, TeacherId, TermId, WarningId,
};

/// How updates go over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStyle {
    /// Full replacement via PUT.
    Put,
    /// Partial update via PATCH.
    Patch,
}

/// A REST collection the dashboard manages.
pub trait Collection {
    /// Wire path under the API base, without slashes.
    const PATH: &'static str;
    /// The resource as the rule engine knows it.
    const KIND: ResourceKind;
    const UPDATE_STYLE: UpdateStyle = UpdateStyle::Put;

    type Id: std::fmt::Display + Copy + Send + Sync;
    type Record: DeserializeOwned + Clone + Send + Sync;
    type Create: Serialize + Validate + Send + Sync;
    type Update: Serialize + Validate + Send + Sync;
}

macro_rules! collection {
    (
        $(#[$meta:meta])*
        $name:ident {
            path: $path:literal,
            kind: $kind:ident,
            id: $id:ty,
            record: $record:ty,
            create: $create:ty,
            update: $update:ty
            $(, update_style: $style:ident)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl Collection for $name {
            const PATH: &'static str = $path;
            const KIND: ResourceKind = ResourceKind::$kind;
            $(const UPDATE_STYLE: UpdateStyle = UpdateStyle::$style;)?

            type Id = $id;
            type Record = $record;
            type Create = $create;
            type Update = $update;
        }
    };
}

collection!(
    /// `/alunos/` — updates are partial because every non-secretary role is
    /// restricted to a field subset.
    Students {
        path: "alunos",
        kind: Students,
        id: StudentId,
        record: Student,
        create: CreateStudentDto,
        update: UpdateStudentDto,
        update_style: Patch
    }
);

collection!(
    /// `/responsaveis/`
    Guardians {
        path: "responsaveis",
        kind: Guardians,
        id: GuardianId,
        record: Guardian,
        create: CreateGuardianDto,
        update: CreateGuardianDto
    }
);

collection!(
    /// `/professores/`
    Teachers {
        path: "professores",
        kind: Teachers,
        id: TeacherId,
        record: Teacher,
        create: CreateTeacherDto,
        update: CreateTeacherDto
    }
);

collection!(
    /// `/salas/`
    Rooms {
        path: "salas",
        kind: Rooms,
        id: RoomId,
        record: Room,
        create: CreateRoomDto,
        update: CreateRoomDto
    }
);

collection!(
    /// `/livros/`
    Books {
        path: "livros",
        kind: Books,
        id: BookId,
        record: Book,
        create: CreateBookDto,
        update: CreateBookDto
    }
);

collection!(
    /// `/emprestimos/`
    Loans {
        path: "emprestimos",
        kind: Loans,
        id: LoanId,
        record: Loan,
        create: CreateLoanDto,
        update: CreateLoanDto
    }
);

collection!(
    /// `/advertencias/`
    Warnings {
        path: "advertencias",
        kind: DisciplinaryRecords,
        id: WarningId,
        record: Warning,
        create: CreateWarningDto,
        update: CreateWarningDto
    }
);

collection!(
    /// `/suspensoes/`
    Suspensions {
        path: "suspensoes",
        kind: DisciplinaryRecords,
        id: SuspensionId,
        record: Suspension,
        create: CreateSuspensionDto,
        update: CreateSuspensionDto
    }
);

collection!(
    /// `/atividades-pendentes/`
    PendingTasks {
        path: "atividades-pendentes",
        kind: PendingTasks,
        id: TaskId,
        record: PendingTask,
        create: CreateTaskDto,
        update: CreateTaskDto
    }
);

collection!(
    /// `/notas/`
    Grades {
        path: "notas",
        kind: Grades,
        id: GradeId,
        record: Grade,
        create: CreateGradeDto,
        update: CreateGradeDto
    }
);

collection!(
    /// `/bimestres/`
    Terms {
        path: "bimestres",
        kind: Terms,
        id: TermId,
        record: Term,
        create: CreateTermDto,
        update: CreateTermDto
    }
);

collection!(
    /// `/reservas/`
    Reservations {
        path: "reservas",
        kind: Reservations,
        id: ReservationId,
        record: Reservation,
        create: CreateReservationDto,
        update: CreateReservationDto
    }
);

collection!(
    /// `/eventos-calendario/`
    CalendarEvents {
        path: "eventos-calendario",
        kind: CalendarEvents,
        id: EventId,
        record: CalendarEvent,
        create: CreateEventDto,
        update: CreateEventDto
    }
);

collection!(
    /// `/planejamentos-semanais/`
    WeeklyPlans {
        path: "planejamentos-semanais",
        kind: WeeklyPlans,
        id: PlanId,
        record: WeeklyPlan,
        create: CreatePlanDto,
        update: CreatePlanDto
    }
);
