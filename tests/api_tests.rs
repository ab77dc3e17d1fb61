use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_root() {
    let app = common::create_test_app();
    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_health_info() {
    let app = common::create_test_app();
    let response = send(&app, Method::GET, "/api/health/info", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["service"], "studypath-backend");
}

#[tokio::test]
async fn test_overview_starts_at_zero() {
    let app = common::create_test_app();
    let response = send(&app, Method::GET, "/api/stats/overview", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totalQuestions"], 0);
    assert_eq!(body["data"]["totalCorrect"], 0);
    assert_eq!(body["data"]["averageScore"], 0.0);
    assert_eq!(body["data"]["accuracy"], 0);
    assert_eq!(body["data"]["activeSubjects"], 0);
}

#[tokio::test]
async fn test_record_answers_promote_subject() {
    let app = common::create_test_app();

    let mut last = json!(null);
    for _ in 0..5 {
        let response = send(
            &app,
            Method::POST,
            "/api/subjects/algebra/answers",
            Some(json!({"score": 90, "correct": true})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        last = body_json(response).await;
    }

    assert_eq!(last["data"]["completedQuestions"], 5);
    assert_eq!(last["data"]["correctAnswers"], 5);
    // one step per answer, so sustained 90s land on advanced by the second call
    assert_eq!(last["data"]["currentDifficulty"], "advanced");

    let response = send(&app, Method::GET, "/api/subjects", None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = send(&app, Method::GET, "/api/stats/overview", None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["totalQuestions"], 5);
    assert_eq!(body["data"]["accuracy"], 100);
}

#[tokio::test]
async fn test_record_answer_clamps_score() {
    let app = common::create_test_app();
    let response = send(
        &app,
        Method::POST,
        "/api/subjects/history/answers",
        Some(json!({"score": 250, "correct": false})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["sessionScores"][0], 100);
    assert_eq!(body["data"]["correctAnswers"], 0);
}

#[tokio::test]
async fn test_unknown_subject_reads_as_defaults() {
    let app = common::create_test_app();
    let response = send(&app, Method::GET, "/api/subjects/brand-new", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["subjectId"], "brand-new");
    assert_eq!(body["data"]["completedQuestions"], 0);
    assert_eq!(body["data"]["currentDifficulty"], "beginner");
}

#[tokio::test]
async fn test_flashcard_study_flow() {
    let app = common::create_test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/flashcard-sets",
        Some(json!({
            "title": "Derivatives",
            "subjectId": "calculus",
            "cards": [
                {"front": "d/dx sin x", "back": "cos x"},
                {"front": "d/dx e^x", "back": "e^x", "difficulty": "intermediate"},
                {"front": "d/dx ln x", "back": "1/x", "difficulty": "advanced"}
            ]
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let set_id = body["data"]["id"].as_str().unwrap().to_string();
    let card_id = body["data"]["flashcards"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(body["data"]["masteredCards"], 0);

    // three correct reviews push the first card to high confidence
    let mut reviewed = json!(null);
    for _ in 0..3 {
        let response = send(
            &app,
            Method::POST,
            &format!("/api/flashcard-sets/{set_id}/cards/{card_id}/review"),
            Some(json!({"correct": true})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        reviewed = body_json(response).await;
    }
    assert_eq!(reviewed["data"]["confidence"], "high");
    assert_eq!(reviewed["data"]["reviewCount"], 3);

    // the difficult queue now excludes the mastered card
    let response = send(
        &app,
        Method::GET,
        &format!("/api/flashcard-sets/{set_id}/study?mode=difficult"),
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // the random queue is a full permutation
    let response = send(
        &app,
        Method::GET,
        &format!("/api/flashcard-sets/{set_id}/study?mode=random"),
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // completing the pass recounts mastery and appends a session
    let response = send(
        &app,
        Method::POST,
        &format!("/api/flashcard-sets/{set_id}/complete"),
        Some(json!({
            "cardsStudied": 3,
            "correctAnswers": 3,
            "averageResponseTimeMs": 2100.0,
            "startedAt": 1000
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["set"]["masteredCards"], 1);
    assert_eq!(body["data"]["session"]["cardsStudied"], 3);

    let response = send(&app, Method::GET, "/api/study-sessions", None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["setId"], set_id);
}

#[tokio::test]
async fn test_create_set_requires_title() {
    let app = common::create_test_app();
    let response = send(
        &app,
        Method::POST,
        "/api/flashcard-sets",
        Some(json!({"title": "  ", "subjectId": "calculus"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_study_mode_is_rejected() {
    let app = common::create_test_app();
    let response = send(
        &app,
        Method::GET,
        "/api/flashcard-sets/whatever/study?mode=bogus",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_set_is_404() {
    let app = common::create_test_app();
    let response = send(&app, Method::GET, "/api/flashcard-sets/missing", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        &app,
        Method::POST,
        "/api/flashcard-sets/missing/complete",
        Some(json!({"cardsStudied": 0, "correctAnswers": 0})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_404_not_found() {
    let app = common::create_test_app();
    let response = send(&app, Method::GET, "/nonexistent/path", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let app = common::create_test_app_with_dir(dir.path());
    let response = send(
        &app,
        Method::POST,
        "/api/subjects/algebra/answers",
        Some(json!({"score": 80, "correct": true})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    drop(app);

    let app = common::create_test_app_with_dir(dir.path());
    let response = send(&app, Method::GET, "/api/subjects/algebra", None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["completedQuestions"], 1);
    assert_eq!(body["data"]["sessionScores"][0], 80);
}
