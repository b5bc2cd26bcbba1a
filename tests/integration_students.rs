mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::json;

use common::{client_for, fake_name, serve, student_json};
use secretaria_client::{Confirmation, RemoveOutcome, ScreenState, StudentsScreen};
use secretaria_core::ApiError;
use secretaria_models::{
    ClassGroup, CreateStudentDto, StudentFilter, StudentId, UpdateStudentDto,
};

fn create_dto(name: &str) -> CreateStudentDto {
    CreateStudentDto {
        name: name.to_string(),
        email: "novo@escola.example".to_string(),
        phone: None,
        cpf: "529.982.247-25".to_string(),
        birth_date: None,
        class_group: Some(ClassGroup::FirstA),
        enrollment_month: Some("02".to_string()),
        academic_year: Some(2025),
        guardian: None,
        absences: 0,
        presences: 0,
        active: true,
    }
}

#[tokio::test]
async fn load_accepts_a_bare_array() {
    let router = Router::new().route(
        "/api/alunos/",
        get(|| async { Json(json!([student_json(1, "Maria Silva", "1A")])) }),
    );
    let base = serve(router).await;
    let screen = StudentsScreen::new(client_for(&base, Some("Secretaria")));

    screen.load().await.unwrap();
    let records = screen.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Maria Silva");
}

#[tokio::test]
async fn load_accepts_the_results_envelope() {
    let router = Router::new().route(
        "/api/alunos/",
        get(|| async {
            Json(json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": [
                    student_json(1, "Maria Silva", "1A"),
                    student_json(2, "João Souza", "2B"),
                ]
            }))
        }),
    );
    let base = serve(router).await;
    let screen = StudentsScreen::new(client_for(&base, Some("Secretaria")));

    screen.load().await.unwrap();
    assert_eq!(screen.records().len(), 2);
}

#[tokio::test]
async fn forbidden_load_leaves_an_errored_screen_with_no_records() {
    let router = Router::new().route(
        "/api/alunos/",
        get(|| async {
            (
                StatusCode::FORBIDDEN,
                Json(json!({"detail": "Você não tem permissão."})),
            )
        }),
    );
    let base = serve(router).await;
    let screen = StudentsScreen::new(client_for(&base, Some("Aluno")));

    let err = screen.load().await.unwrap_err();
    assert!(matches!(err, ApiError::AuthorizationDenied { .. }));
    assert!(screen.records().is_empty());
    assert!(matches!(screen.state(), ScreenState::Errored(_)));
}

#[tokio::test]
async fn filtering_narrows_the_loaded_snapshot() {
    let router = Router::new().route(
        "/api/alunos/",
        get(|| async {
            Json(json!([
                student_json(1, "Maria Silva", "1A"),
                student_json(2, "Ana Maria", "2B"),
                student_json(3, "João Souza", "1A"),
            ]))
        }),
    );
    let base = serve(router).await;
    let screen = StudentsScreen::new(client_for(&base, Some("Secretaria")));
    screen.load().await.unwrap();

    let filter = StudentFilter {
        name: Some("maria".to_string()),
        ..StudentFilter::default()
    };
    assert_eq!(screen.filtered(&filter).len(), 2);

    let filter = StudentFilter {
        name: Some("maria".to_string()),
        class_group: Some(ClassGroup::FirstA),
        ..StudentFilter::default()
    };
    let narrowed = screen.filtered(&filter);
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].name, "Maria Silva");

    // Empty criteria must be the identity on the snapshot.
    assert_eq!(screen.filtered(&StudentFilter::default()).len(), 3);
}

#[tokio::test]
async fn denied_create_never_reaches_the_network() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/api/alunos/",
            post(
                |State(hits): State<Arc<AtomicUsize>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    StatusCode::CREATED.into_response()
                },
            )
            .get(|| async { Json(json!([])) }),
        )
        .with_state(hits.clone());
    let base = serve(router).await;

    let screen = StudentsScreen::new(client_for(&base, Some("Aluno")));
    let err = screen.create(&create_dto("Novo Aluno")).await.unwrap_err();
    assert!(matches!(err, ApiError::AuthorizationDenied { .. }));

    let screen = StudentsScreen::new(client_for(&base, None));
    let err = screen.create(&create_dto("Novo Aluno")).await.unwrap_err();
    assert!(matches!(err, ApiError::AuthorizationDenied { .. }));

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn create_as_secretaria_posts_then_reloads() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/api/alunos/",
            post(
                |State(hits): State<Arc<AtomicUsize>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (StatusCode::CREATED, Json(student_json(9, "Novo Aluno", "1A")))
                },
            )
            .get(|| async { Json(json!([student_json(9, "Novo Aluno", "1A")])) }),
        )
        .with_state(hits.clone());
    let base = serve(router).await;
    let screen = StudentsScreen::new(client_for(&base, Some("Secretaria")));

    screen.create(&create_dto(&fake_name())).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(screen.records().len(), 1);
}

#[tokio::test]
async fn auxiliar_updates_attendance_via_patch() {
    let patches = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/api/alunos/", get(|| async { Json(json!([])) }))
        .route(
            "/api/alunos/{id}/",
            patch(
                |State(patches): State<Arc<AtomicUsize>>,
                 Json(body): Json<serde_json::Value>| async move {
                    patches.fetch_add(1, Ordering::SeqCst);
                    let keys: Vec<&str> =
                        body.as_object().unwrap().keys().map(String::as_str).collect();
                    assert_eq!(keys, vec!["faltas_aluno", "presencas_aluno"]);
                    Json(student_json(1, "Maria Silva", "1A"))
                },
            ),
        )
        .with_state(patches.clone());
    let base = serve(router).await;
    let screen = StudentsScreen::new(client_for(&base, Some("Auxiliar administrativo")));

    screen
        .update(StudentId::new(1), &UpdateStudentDto::attendance(5, 35))
        .await
        .unwrap();
    assert_eq!(patches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancelled_removal_sends_nothing() {
    let deletes = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/api/alunos/", get(|| async { Json(json!([])) }))
        .route(
            "/api/alunos/{id}/",
            axum::routing::delete(
                |State(deletes): State<Arc<AtomicUsize>>| async move {
                    deletes.fetch_add(1, Ordering::SeqCst);
                    StatusCode::NO_CONTENT.into_response()
                },
            ),
        )
        .with_state(deletes.clone());
    let base = serve(router).await;
    let screen = StudentsScreen::new(client_for(&base, Some("Secretaria")));

    let outcome = screen
        .remove(StudentId::new(1), Confirmation::Cancelled)
        .await
        .unwrap();
    assert_eq!(outcome, RemoveOutcome::Cancelled);
    assert_eq!(deletes.load(Ordering::SeqCst), 0);

    let outcome = screen
        .remove(StudentId::new(1), Confirmation::Confirmed)
        .await
        .unwrap();
    assert_eq!(outcome, RemoveOutcome::Removed);
    assert_eq!(deletes.load(Ordering::SeqCst), 1);
}
