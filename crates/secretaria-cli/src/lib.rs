//! Terminal front end for the secretaria dashboard client.
//!
//! Mirrors the dashboard's screens as subcommands: each handler builds the
//! screen controller for its entity and renders the loaded snapshot as a
//! table. Destructive commands go through the same confirmation gate the
//! dashboard uses.

use std::sync::Arc;

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Password};

use secretaria_auth::{Session, SessionStore, allowed_screens};
use secretaria_client::{
    ApiClient, AuthApi, CalendarScreen, Confirmation, GradesScreen, LoansScreen,
    ReservationsScreen, StudentsScreen,
};
use secretaria_config::{ApiConfig, approval_policy_from_env};
use secretaria_core::{ApiError, evaluate};
use secretaria_models::{
    CalendarEvent, ClassGroup, CreateEventDto, CreateReservationDto, EventKind, Grade,
    GradeFilter, Loan, LoanFilter, ReservationId, RoomId, Student, StudentFilter, StudentId,
    UpdateStudentDto, grade_values,
};

#[derive(Parser)]
#[command(name = "secretaria")]
#[command(about = "School administration dashboard client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with CPF and password
    Login {
        /// CPF (prompted when omitted)
        #[arg(long)]
        cpf: Option<String>,
    },
    /// Discard the stored session
    Logout,
    /// Show the screens the logged-in role may open
    Screens,
    /// Student administration
    Students {
        #[command(subcommand)]
        command: StudentsCommand,
    },
    /// Loan management
    Loans {
        #[command(subcommand)]
        command: LoansCommand,
    },
    /// Grade listing
    Grades {
        /// Restrict to one student's grades
        #[arg(long)]
        student: Option<i64>,
    },
    /// Compute a student's approval standing
    Standing {
        /// Student ID
        student: i64,
    },
    /// School calendar
    Calendar {
        #[command(subcommand)]
        command: CalendarCommand,
    },
    /// Room reservations
    Reservations {
        #[command(subcommand)]
        command: ReservationsCommand,
    },
}

#[derive(Subcommand)]
enum StudentsCommand {
    /// List students, optionally filtered
    List {
        /// Substring of the student name
        #[arg(long)]
        name: Option<String>,
        /// Exact class code (e.g. 2B)
        #[arg(long)]
        turma: Option<String>,
    },
    /// Update attendance counters (administrative assistant scope)
    SetAttendance {
        student: i64,
        #[arg(long)]
        absences: u32,
        #[arg(long)]
        presences: u32,
    },
    /// Replace the descriptive comment (teacher scope)
    Comment { student: i64, text: String },
    /// Delete a student (secretary only)
    Remove {
        student: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum LoansCommand {
    /// List loans
    List {
        /// Only loans not yet returned
        #[arg(long)]
        outstanding: bool,
    },
    /// Register a loan's return
    Return { loan: i64 },
}

#[derive(Subcommand)]
enum CalendarCommand {
    /// List calendar events
    List,
    /// Publish an event
    Add {
        title: String,
        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// prova | trabalho | feriado | evento
        #[arg(long, default_value = "evento")]
        kind: String,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
enum ReservationsCommand {
    /// List reservations
    List,
    /// Book a room
    Reserve {
        /// Room ID
        #[arg(long)]
        room: i64,
        /// Reservation date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Start time (HH:MM)
        #[arg(long)]
        start: String,
        /// End time (HH:MM)
        #[arg(long)]
        end: String,
        #[arg(long)]
        purpose: Option<String>,
    },
    /// Cancel a reservation
    Cancel {
        reservation: i64,
        #[arg(long)]
        yes: bool,
    },
}

pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = ApiConfig::from_env();
    let store = SessionStore::new(config.session_file.clone());

    match cli.command {
        Commands::Login { cpf } => login(&config, &store, cpf).await,
        Commands::Logout => {
            store.clear()?;
            println!("Session cleared.");
            Ok(())
        }
        Commands::Screens => {
            let session = require_session(&store)?;
            let role = session
                .role
                .map_or_else(|| "unknown".to_string(), |r| r.to_string());
            println!("Role: {role}");
            for screen in allowed_screens(session.role) {
                println!("  - {screen:?}");
            }
            Ok(())
        }
        Commands::Students { command } => {
            let client = authenticated_client(&config, &store)?;
            students(client, command).await
        }
        Commands::Loans { command } => {
            let client = authenticated_client(&config, &store)?;
            loans(client, command).await
        }
        Commands::Grades { student } => {
            let client = authenticated_client(&config, &store)?;
            grades(client, student).await
        }
        Commands::Standing { student } => {
            let client = authenticated_client(&config, &store)?;
            standing(client, StudentId::new(student)).await
        }
        Commands::Calendar { command } => {
            let client = authenticated_client(&config, &store)?;
            calendar(client, command).await
        }
        Commands::Reservations { command } => {
            let client = authenticated_client(&config, &store)?;
            reservations(client, command).await
        }
    }
}

async fn login(
    config: &ApiConfig,
    store: &SessionStore,
    cpf: Option<String>,
) -> anyhow::Result<()> {
    let cpf = match cpf {
        Some(cpf) => cpf,
        None => Input::<String>::new().with_prompt("CPF").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let session = AuthApi::new(config).login(&cpf, &password).await?;
    store.save(&session)?;

    match session.role {
        Some(role) => println!("Logged in as {role}."),
        None => println!("Logged in, but the token carries no known role; most screens will deny access."),
    }
    Ok(())
}

fn require_session(store: &SessionStore) -> anyhow::Result<Session> {
    let session = store
        .load()?
        .ok_or(ApiError::AuthenticationMissing)
        .context("run `secretaria login` first")?;
    let now = chrono::Utc::now().timestamp();
    if session.is_expired(now) {
        return Err(anyhow::Error::new(ApiError::AuthenticationMissing)
            .context("the stored session has expired — run `secretaria login` again"));
    }
    Ok(session)
}

fn authenticated_client(
    config: &ApiConfig,
    store: &SessionStore,
) -> anyhow::Result<Arc<ApiClient>> {
    let session = require_session(store)?;
    Ok(Arc::new(ApiClient::new(config, session)))
}

async fn students(client: Arc<ApiClient>, command: StudentsCommand) -> anyhow::Result<()> {
    let screen = StudentsScreen::new(client);
    match command {
        StudentsCommand::List { name, turma } => {
            screen.load().await?;
            let class_group = turma
                .as_deref()
                .map(|code| code.parse::<ClassGroup>())
                .transpose()
                .map_err(anyhow::Error::msg)?;
            let filter = StudentFilter {
                name,
                class_group,
                ..StudentFilter::default()
            };
            let rows = screen.filtered(&filter);
            println!("{} student(s)", rows.len());
            for student in rows {
                print_student(&student);
            }
        }
        StudentsCommand::SetAttendance {
            student,
            absences,
            presences,
        } => {
            screen
                .update(
                    StudentId::new(student),
                    &UpdateStudentDto::attendance(absences, presences),
                )
                .await?;
            println!("Attendance updated.");
        }
        StudentsCommand::Comment { student, text } => {
            screen
                .update(StudentId::new(student), &UpdateStudentDto::comment(text))
                .await?;
            println!("Comment saved.");
        }
        StudentsCommand::Remove { student, yes } => {
            let confirmation = confirm_gate(yes, "Remove this student?")?;
            match screen.remove(StudentId::new(student), confirmation).await? {
                secretaria_client::RemoveOutcome::Removed => println!("Student removed."),
                secretaria_client::RemoveOutcome::Cancelled => println!("Cancelled."),
            }
        }
    }
    Ok(())
}

async fn loans(client: Arc<ApiClient>, command: LoansCommand) -> anyhow::Result<()> {
    let screen = LoansScreen::new(client);
    match command {
        LoansCommand::List { outstanding } => {
            screen.load().await?;
            let filter = LoanFilter {
                outstanding_only: outstanding,
                ..LoanFilter::default()
            };
            let rows = screen.filtered(&filter);
            println!("{} loan(s)", rows.len());
            for loan in rows {
                print_loan(&loan);
            }
        }
        LoansCommand::Return { loan } => {
            screen.return_loan(secretaria_models::LoanId::new(loan)).await?;
            println!("Return registered.");
        }
    }
    Ok(())
}

async fn grades(client: Arc<ApiClient>, student: Option<i64>) -> anyhow::Result<()> {
    let mut screen = GradesScreen::new(client);
    if let Some(student) = student {
        screen = screen.with_query("aluno", student.to_string());
    }
    screen.load().await?;
    let rows = screen.filtered(&GradeFilter::default());
    println!("{} grade(s)", rows.len());
    for grade in rows {
        print_grade(&grade);
    }
    Ok(())
}

async fn standing(client: Arc<ApiClient>, student_id: StudentId) -> anyhow::Result<()> {
    let students = StudentsScreen::new(client.clone());
    students.load().await?;
    let student = students
        .records()
        .into_iter()
        .find(|s| s.id == student_id)
        .with_context(|| format!("student {student_id} not found"))?;

    let grades_screen = GradesScreen::new(client).with_query("aluno", student_id.to_string());
    grades_screen.load().await?;
    let values = grade_values(&grades_screen.records());

    let policy = approval_policy_from_env();
    let report = evaluate(student.presences, student.absences, &values, &policy);

    println!("Student: {} ({})", student.name, student_id);
    println!(
        "Average: {:.2} over {} grade(s)",
        report.average_grade, report.grades_counted
    );
    println!(
        "Attendance: {:.1}% over {} class(es)",
        report.attendance_percentage(),
        report.classes_held
    );
    println!("Standing: {:?}", report.standing);
    Ok(())
}

async fn calendar(client: Arc<ApiClient>, command: CalendarCommand) -> anyhow::Result<()> {
    let screen = CalendarScreen::new(client);
    match command {
        CalendarCommand::List => {
            screen.load().await?;
            for event in screen.records() {
                print_event(&event);
            }
        }
        CalendarCommand::Add {
            title,
            date,
            kind,
            description,
        } => {
            let kind: EventKind = kind.parse().map_err(anyhow::Error::msg)?;
            screen
                .create(&CreateEventDto {
                    title,
                    description,
                    date,
                    kind,
                })
                .await?;
            println!("Event published.");
        }
    }
    Ok(())
}

async fn reservations(client: Arc<ApiClient>, command: ReservationsCommand) -> anyhow::Result<()> {
    let screen = ReservationsScreen::new(client);
    match command {
        ReservationsCommand::List => {
            screen.load().await?;
            for reservation in screen.records() {
                println!(
                    "#{} {} {} {}–{} ({})",
                    reservation.id,
                    reservation.room_name.as_deref().unwrap_or("?"),
                    reservation.date,
                    reservation.start_time.format("%H:%M"),
                    reservation.end_time.format("%H:%M"),
                    reservation.teacher_name.as_deref().unwrap_or("-"),
                );
            }
        }
        ReservationsCommand::Reserve {
            room,
            date,
            start,
            end,
            purpose,
        } => {
            let start_time = parse_time(&start)?;
            let end_time = parse_time(&end)?;
            screen
                .create(&CreateReservationDto {
                    teacher: None,
                    room: RoomId::new(room),
                    date,
                    start_time,
                    end_time,
                    purpose,
                })
                .await?;
            println!("Room reserved.");
        }
        ReservationsCommand::Cancel { reservation, yes } => {
            let confirmation = confirm_gate(yes, "Cancel this reservation?")?;
            match screen
                .remove(ReservationId::new(reservation), confirmation)
                .await?
            {
                secretaria_client::RemoveOutcome::Removed => println!("Reservation cancelled."),
                secretaria_client::RemoveOutcome::Cancelled => println!("Kept."),
            }
        }
    }
    Ok(())
}

fn confirm_gate(skip_prompt: bool, prompt: &str) -> anyhow::Result<Confirmation> {
    if skip_prompt {
        return Ok(Confirmation::Confirmed);
    }
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(if confirmed {
        Confirmation::Confirmed
    } else {
        Confirmation::Cancelled
    })
}

fn parse_time(raw: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .with_context(|| format!("invalid time: {raw}"))
}

fn print_student(student: &Student) {
    let class = student
        .class_group
        .map_or_else(|| "--".to_string(), |g| g.code().to_string());
    let status = if student.active { "ativo" } else { "evadido" };
    println!(
        "#{:<4} {:<30} {:<4} {:>3}P/{:<3}F  {}",
        student.id, student.name, class, student.presences, student.absences, status
    );
}

fn print_loan(loan: &Loan) {
    let state = if loan.returned { "returned" } else { "outstanding" };
    println!(
        "#{:<4} {:<25} {:<30} {}  {}",
        loan.id,
        loan.student_name.as_deref().unwrap_or("?"),
        loan.resource_label(),
        loan.loan_date,
        state
    );
}

fn print_grade(grade: &Grade) {
    println!(
        "#{:<4} {:<25} {:<6} bim.{:<3} {:>5.2}",
        grade.id,
        grade.student_name.as_deref().unwrap_or("?"),
        grade.subject.code(),
        grade.term_label.as_deref().unwrap_or("?"),
        grade.value
    );
}

fn print_event(event: &CalendarEvent) {
    println!(
        "{}  [{}] {}",
        event.date,
        event.kind.label(),
        event.title
    );
}
