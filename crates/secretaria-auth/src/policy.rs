//! The authorization rule engine.
//!
//! A single static rule table decides, per role, which actions on which
//! resources the dashboard exposes. Every screen consults this table —
//! nothing checks role strings inline — so the rules cannot drift between
//! screens.
//!
//! These checks gate UI affordances only. The backend independently
//! re-authorizes every request; a client that skipped these checks would be
//! rejected there, so this table is never the trust boundary.
//!
//! Ownership scoping (students seeing only themselves, guardians only their
//! wards, teachers only their classes) happens server-side through filtered
//! list responses and is not re-implemented here.

use secretaria_core::ApiError;

use crate::roles::Role;

/// What a screen wants to do with a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    List,
    View,
    Create,
    Update,
    Delete,
}

impl Action {
    pub const ALL: &'static [Self] = &[
        Self::List,
        Self::View,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    pub const fn is_mutation(self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Delete)
    }
}

/// Every resource subject to authorization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Students,
    Guardians,
    Teachers,
    Rooms,
    Books,
    Loans,
    DisciplinaryRecords,
    PendingTasks,
    Grades,
    Terms,
    Reservations,
    CalendarEvents,
    WeeklyPlans,
    AdminPanel,
}

impl ResourceKind {
    pub const ALL: &'static [Self] = &[
        Self::Students,
        Self::Guardians,
        Self::Teachers,
        Self::Rooms,
        Self::Books,
        Self::Loans,
        Self::DisciplinaryRecords,
        Self::PendingTasks,
        Self::Grades,
        Self::Terms,
        Self::Reservations,
        Self::CalendarEvents,
        Self::WeeklyPlans,
        Self::AdminPanel,
    ];
}

/// Decide whether `role` may perform `action` on `resource`.
///
/// Pure lookup, no side effects. A missing or unknown role (`None`) denies
/// every action.
pub fn can_perform(role: Option<Role>, action: Action, resource: ResourceKind) -> bool {
    use Action::*;
    use ResourceKind::*;
    use Role::*;

    let Some(role) = role else {
        return false;
    };

    match (resource, action) {
        // Reading is broad: list responses are ownership-scoped server-side.
        (Students, List | View) => true,
        (Students, Create | Delete) => role == Secretaria,
        // Field-limited for Professor and Auxiliar; see `student_edit_scope`.
        (Students, Update) => {
            matches!(role, Secretaria | Professor | AuxiliarAdministrativo)
        }

        (Guardians, List | View) => matches!(role, Secretaria | Responsavel),
        (Guardians, Create | Update | Delete) => role == Secretaria,

        (Teachers, List | View) => matches!(role, Secretaria | Professor),
        (Teachers, Create | Update | Delete) => role == Secretaria,

        (Rooms, List | View) => true,
        (Rooms, Create | Update | Delete) => role == Secretaria,

        // The administrative assistant owns the library; the secretary is a
        // reader there.
        (Books, List | View) => true,
        (Books, Create | Update | Delete) => role == AuxiliarAdministrativo,
        (Loans, List | View) => true,
        (Loans, Create | Update | Delete) => role == AuxiliarAdministrativo,

        (DisciplinaryRecords, List | View) => true,
        (DisciplinaryRecords, Create | Update | Delete) => role == Secretaria,

        (PendingTasks, List | View) => true,
        (PendingTasks, Create | Update | Delete) => {
            matches!(role, Secretaria | Professor)
        }

        (Grades, List | View) => true,
        (Grades, Create | Update | Delete) => matches!(role, Secretaria | Professor),

        (Terms, _) => role == Secretaria,

        (Reservations, List | View) => true,
        (Reservations, Create | Delete) => matches!(role, Secretaria | Professor),
        // Teachers cancel and rebook; only the secretary edits in place.
        (Reservations, Update) => role == Secretaria,

        (CalendarEvents, List | View) => true,
        (CalendarEvents, Create | Update | Delete) => {
            matches!(role, Secretaria | AuxiliarAdministrativo)
        }

        (WeeklyPlans, List | View) => true,
        (WeeklyPlans, Create | Update | Delete) => matches!(role, Secretaria | Professor),

        (AdminPanel, List | View) => {
            matches!(role, Secretaria | Professor | AuxiliarAdministrativo)
        }
        (AdminPanel, _) => false,
    }
}

/// [`can_perform`] as a guard, for call sites that propagate errors.
pub fn ensure(role: Option<Role>, action: Action, resource: ResourceKind) -> Result<(), ApiError> {
    if can_perform(role, action, resource) {
        Ok(())
    } else {
        let who = role.map_or("no role", Role::as_str);
        Err(ApiError::denied(format!(
            "{who} may not {action:?} {resource:?}"
        )))
    }
}

/// Student fields, for field-level update gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentField {
    Name,
    Email,
    Phone,
    Cpf,
    BirthDate,
    ClassGroup,
    EnrollmentMonth,
    AcademicYear,
    Guardian,
    Attendance,
    ActiveFlag,
    Comment,
}

/// Which student fields a role may edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentEditScope {
    /// Every field (the secretary).
    All,
    /// Only the descriptive comment (teachers).
    CommentOnly,
    /// Only the absence/presence counters (the administrative assistant).
    AttendanceOnly,
    /// Nothing.
    Nothing,
}

impl StudentEditScope {
    pub fn permits(self, field: StudentField) -> bool {
        match self {
            Self::All => true,
            Self::CommentOnly => field == StudentField::Comment,
            Self::AttendanceOnly => field == StudentField::Attendance,
            Self::Nothing => false,
        }
    }
}

/// The field mask applied to student updates, per role.
pub fn student_edit_scope(role: Option<Role>) -> StudentEditScope {
    match role {
        Some(Role::Secretaria) => StudentEditScope::All,
        Some(Role::Professor) => StudentEditScope::CommentOnly,
        Some(Role::AuxiliarAdministrativo) => StudentEditScope::AttendanceOnly,
        _ => StudentEditScope::Nothing,
    }
}

/// Top-level dashboard screens, for sidebar gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Dropout overview ("Controle de Evasão").
    Dropout,
    Administration,
    /// Grades/attendance performance panel.
    Performance,
    Loans,
    Planner,
    Reservations,
    Calendar,
    Profile,
}

/// The sidebar entries a role sees, in display order.
pub fn allowed_screens(role: Option<Role>) -> &'static [Screen] {
    use Screen::*;
    match role {
        Some(Role::Secretaria) => &[Dropout, Administration, Performance, Loans, Calendar],
        Some(Role::Professor) => &[
            Profile,
            Planner,
            Administration,
            Reservations,
            Performance,
            Calendar,
        ],
        Some(Role::AuxiliarAdministrativo) => &[Administration, Loans, Profile, Calendar],
        Some(Role::Aluno) | Some(Role::Responsavel) => &[Profile, Performance, Calendar],
        None => &[],
    }
}

/// Tabs of the administration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminTab {
    Students,
    Guardians,
    Teachers,
    Rooms,
}

/// Which administration tabs a role sees. The secretary sees all four;
/// teachers and the administrative assistant only the student tab.
pub fn admin_tabs(role: Option<Role>) -> &'static [AdminTab] {
    use AdminTab::*;
    match role {
        Some(Role::Secretaria) => &[Students, Guardians, Teachers, Rooms],
        Some(Role::Professor) | Some(Role::AuxiliarAdministrativo) => &[Students],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_denies_everything() {
        for resource in ResourceKind::ALL {
            for action in Action::ALL {
                assert!(
                    !can_perform(None, *action, *resource),
                    "None must be denied {action:?} on {resource:?}"
                );
            }
        }
    }

    #[test]
    fn lookup_is_deterministic() {
        for role in Role::ALL {
            for resource in ResourceKind::ALL {
                for action in Action::ALL {
                    let first = can_perform(Some(*role), *action, *resource);
                    let second = can_perform(Some(*role), *action, *resource);
                    assert_eq!(first, second);
                }
            }
        }
    }

    #[test]
    fn secretaria_owns_student_lifecycle() {
        assert!(can_perform(
            Some(Role::Secretaria),
            Action::Create,
            ResourceKind::Students
        ));
        assert!(can_perform(
            Some(Role::Secretaria),
            Action::Delete,
            ResourceKind::Students
        ));
        for role in [Role::Professor, Role::AuxiliarAdministrativo, Role::Aluno] {
            assert!(!can_perform(Some(role), Action::Create, ResourceKind::Students));
            assert!(!can_perform(Some(role), Action::Delete, ResourceKind::Students));
        }
    }

    #[test]
    fn auxiliar_owns_the_library_and_secretaria_reads_it() {
        for resource in [ResourceKind::Books, ResourceKind::Loans] {
            assert!(can_perform(
                Some(Role::AuxiliarAdministrativo),
                Action::Create,
                resource
            ));
            assert!(can_perform(Some(Role::Secretaria), Action::List, resource));
            assert!(!can_perform(Some(Role::Secretaria), Action::Create, resource));
            assert!(!can_perform(Some(Role::Secretaria), Action::Delete, resource));
        }
    }

    #[test]
    fn students_and_guardians_are_read_only_everywhere() {
        for role in [Role::Aluno, Role::Responsavel] {
            for resource in ResourceKind::ALL {
                for action in Action::ALL {
                    if action.is_mutation() {
                        assert!(
                            !can_perform(Some(role), *action, *resource),
                            "{role:?} must not {action:?} {resource:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn professor_reservation_rights_exclude_update() {
        let role = Some(Role::Professor);
        assert!(can_perform(role, Action::Create, ResourceKind::Reservations));
        assert!(can_perform(role, Action::Delete, ResourceKind::Reservations));
        assert!(!can_perform(role, Action::Update, ResourceKind::Reservations));
    }

    #[test]
    fn calendar_mutation_is_secretaria_or_auxiliar() {
        assert!(can_perform(
            Some(Role::AuxiliarAdministrativo),
            Action::Create,
            ResourceKind::CalendarEvents
        ));
        assert!(!can_perform(
            Some(Role::Professor),
            Action::Create,
            ResourceKind::CalendarEvents
        ));
        for role in Role::ALL {
            assert!(can_perform(
                Some(*role),
                Action::List,
                ResourceKind::CalendarEvents
            ));
        }
    }

    #[test]
    fn student_field_masks_match_roles() {
        assert_eq!(student_edit_scope(Some(Role::Secretaria)), StudentEditScope::All);
        assert_eq!(
            student_edit_scope(Some(Role::Professor)),
            StudentEditScope::CommentOnly
        );
        assert_eq!(
            student_edit_scope(Some(Role::AuxiliarAdministrativo)),
            StudentEditScope::AttendanceOnly
        );
        assert_eq!(student_edit_scope(Some(Role::Aluno)), StudentEditScope::Nothing);
        assert_eq!(student_edit_scope(None), StudentEditScope::Nothing);

        assert!(StudentEditScope::CommentOnly.permits(StudentField::Comment));
        assert!(!StudentEditScope::CommentOnly.permits(StudentField::Name));
        assert!(StudentEditScope::AttendanceOnly.permits(StudentField::Attendance));
        assert!(!StudentEditScope::AttendanceOnly.permits(StudentField::Comment));
    }

    #[test]
    fn sidebar_gating_matches_the_business_rules() {
        assert!(allowed_screens(Some(Role::Secretaria)).contains(&Screen::Dropout));
        assert!(!allowed_screens(Some(Role::Secretaria)).contains(&Screen::Reservations));
        assert!(allowed_screens(Some(Role::Professor)).contains(&Screen::Planner));
        assert!(!allowed_screens(Some(Role::Aluno)).contains(&Screen::Administration));
        assert!(allowed_screens(None).is_empty());
        for role in Role::ALL {
            assert!(allowed_screens(Some(*role)).contains(&Screen::Calendar));
        }
    }

    #[test]
    fn admin_tabs_collapse_to_students_for_non_secretaria() {
        assert_eq!(admin_tabs(Some(Role::Secretaria)).len(), 4);
        assert_eq!(admin_tabs(Some(Role::Professor)), &[AdminTab::Students]);
        assert_eq!(
            admin_tabs(Some(Role::AuxiliarAdministrativo)),
            &[AdminTab::Students]
        );
        assert!(admin_tabs(Some(Role::Responsavel)).is_empty());
    }

    #[test]
    fn ensure_reports_denials_as_authorization_errors() {
        let err = ensure(Some(Role::Aluno), Action::Delete, ResourceKind::Students).unwrap_err();
        assert!(matches!(err, ApiError::AuthorizationDenied { .. }));
        assert!(ensure(Some(Role::Secretaria), Action::Delete, ResourceKind::Students).is_ok());
    }
}
