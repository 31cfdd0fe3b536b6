//! Comprehensive integration tests for the leave query engine.
//!
//! This test suite covers all query scenarios including:
//! - Session building from raw ERP snapshots
//! - Eligibility rules (apply, alternatives, next eligible date)
//! - Structured topic answers (balances, air ticket leaves)
//! - Profile-field topic answers (manager, shift, probation, ...)
//! - Policy fallback search (matches, degraded results, failures)
//! - The profile endpoint
//! - Error cases

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use leave_engine::api::{create_router, AppState, SessionState};
use leave_engine::config::SearchConfig;
use leave_engine::eligibility::NextEligibility;
use leave_engine::erp::RawSnapshot;
use leave_engine::error::{EngineError, EngineResult};
use leave_engine::models::DocumentSection;
use leave_engine::search::EmbeddingProvider;

// =============================================================================
// Test Helpers
// =============================================================================

/// Embedding provider that returns the same vector for every query.
struct FixedEmbedding(Vec<f32>);

#[async_trait]
impl EmbeddingProvider for FixedEmbedding {
    async fn embed(&self, _text: &str) -> EngineResult<Vec<f32>> {
        Ok(self.0.clone())
    }
}

/// Embedding provider that always fails.
struct FailingEmbedding;

#[async_trait]
impl EmbeddingProvider for FailingEmbedding {
    async fn embed(&self, _text: &str) -> EngineResult<Vec<f32>> {
        Err(EngineError::EmbeddingFailed {
            message: "Connection failed".to_string(),
        })
    }
}

/// One employee's snapshot with three policy rows and three balance
/// rows, one of which ("905") has no matching policy row.
fn create_test_snapshot() -> RawSnapshot {
    serde_json::from_value(json!({
        "employee": [{
            "Emp_ID_N": 682,
            "Emp_EFullName_V": "Amina Hassan",
            "Emp_RpProfessionDesc_V": "Senior Accountant",
            "Dpm_Desc_V": "Finance",
            "Emp_SponsorDesc_V": "Al Noor Group",
            "Emp_DOJ_D": "15-Aug-2020",
            "Ctm_Description_V": "Unlimited",
            "Emp_FamilyStatus_V": "Family",
            "Emp_Mobile_V": "0501234567",
            "Emp_EmailID_V": "amina.hassan@example.com",
            "Lph_Desc_V": "Standard Policy",
            "Sfh_ShiftName_V": "Day Shift",
            "Emp_RPNumber_V": "RP-9981",
            "Emp_EmployeeReportsDesc_V": "Omar Farouk",
            "Emp_ProbationEndDate_D": "15-Feb-2021",
            "Eligibility": [{"Eligibility_Desc_V": "Accommodation"}]
        }],
        "leave_types": [
            {
                "Lvm_Code_V": "AL",
                "Lvm_Description_V": "Annual Leave",
                "Lvm_AttachRequired_N": 0,
                "Lvm_ShwSelfService_N": "1",
                "Lpd_EligibilityOnWrkdays_N": 1,
                "Lpd_ID_N": 901
            },
            {
                "Lvm_Code_V": "CL",
                "Lvm_Description_V": "Casual Leave",
                "Lvm_AttachRequired_N": 1,
                "Lvm_ShwSelfService_N": 0,
                "Lpd_EligibilityOnWrkdays_N": 0,
                "Lpd_ID_N": 902
            },
            {
                "Lvm_Code_V": "SL",
                "Lvm_Description_V": "Sick Leave",
                "Lvm_AttachRequired_N": 1,
                "Lvm_ShwSelfService_N": "1",
                "Lpd_EligibilityOnWrkdays_N": 0,
                "Lpd_ID_N": 903
            }
        ],
        "leave_balances": {
            "901": [{
                "Balance": 10,
                "Eligible": 30,
                "Paid": 0,
                "UnPaid": 0,
                "DAYS": 30,
                "Airticket": 1,
                "Maxdays": 30,
                "Lpd_AllowHalfDay_N": 1,
                "Emp_AnnivDate_D": "15-Aug-2026",
                "AirTicketPercent": 50
            }],
            "902": [{
                "Balance": 0,
                "Eligible": 5,
                "Paid": 0,
                "UnPaid": 0,
                "DAYS": 5,
                "Airticket": 0,
                "Maxdays": 5,
                "Lpd_AllowHalfDay_N": 0,
                "Emp_AnnivDate_D": "01-Mar-2027",
                "AirTicketPercent": 0
            }],
            "905": [{
                "Balance": 4,
                "Eligible": 4,
                "Paid": 0,
                "UnPaid": 0,
                "DAYS": 4,
                "Airticket": 0,
                "Maxdays": 4,
                "Lpd_AllowHalfDay_N": 0,
                "Emp_AnnivDate_D": null,
                "AirTicketPercent": 0
            }]
        }
    }))
    .unwrap()
}

fn create_test_session() -> SessionState {
    SessionState::from_snapshot(&create_test_snapshot()).expect("Failed to build session")
}

fn create_test_corpus() -> Vec<DocumentSection> {
    vec![
        DocumentSection {
            section: "Sick Leave".to_string(),
            text: "Employees receive full pay for the first 15 days of sick leave.".to_string(),
            embedding: vec![1.0, 0.0],
        },
        DocumentSection {
            section: "Public Holidays".to_string(),
            text: "The company observes national public holidays as announced.".to_string(),
            embedding: vec![0.0, 1.0],
        },
        DocumentSection {
            section: "Gratuity".to_string(),
            text: "End of service gratuity accrues per completed year of service.".to_string(),
            embedding: vec![0.6, 0.8],
        },
    ]
}

fn create_router_with_provider(provider: Arc<dyn EmbeddingProvider>) -> Router {
    let state = AppState::new(
        create_test_session(),
        create_test_corpus(),
        provider,
        SearchConfig::default(),
    );
    create_router(state)
}

fn create_router_for_test() -> Router {
    create_router_with_provider(Arc::new(FixedEmbedding(vec![1.0, 0.0])))
}

async fn post_ask(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ask")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn ask(router: Router, question: &str) -> (StatusCode, Value) {
    post_ask(router, json!({"employee_id": 682, "question": question})).await
}

async fn get_profile(router: Router) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

// =============================================================================
// SECTION 1: Session Building Tests - 3 tests
// =============================================================================

#[test]
fn test_session_builds_from_full_snapshot() {
    // One snapshot produces the employee record plus both leave tables
    let session = create_test_session();

    assert_eq!(session.employee.id, Some(682));
    assert_eq!(session.employee.name, "Amina Hassan");
    assert!(session.employee.accommodation_eligible);
    assert_eq!(session.engine.catalog().len(), 3);
    assert_eq!(session.engine.balances().len(), 3);
}

#[test]
fn test_balance_rows_keep_payload_order() {
    // Summary rows follow the ERP balance payload, not the catalog
    let session = create_test_session();

    let rows = session.engine.balance_summary();
    let codes: Vec<&str> = rows.iter().map(|row| row.code.as_str()).collect();
    assert_eq!(codes, ["AL", "CL", "905"]);
}

#[test]
fn test_orphan_balance_resolves_by_raw_key() {
    // A balance row without a policy row answers under its raw key
    let session = create_test_session();

    assert_eq!(session.engine.resolve("905"), Some("905"));
    assert_eq!(session.engine.resolve("annual leave"), Some("AL"));

    let answer = session.engine.can_apply_for("905");
    assert!(answer.can_apply);
    assert_eq!(answer.message, "You can apply for 905. Your balance: 4 days.");
}

// =============================================================================
// SECTION 2: Eligibility Rule Tests - 7 tests
// =============================================================================

#[test]
fn test_can_apply_with_usable_balance() {
    // Resolves the description, finds a positive balance, answers yes
    let session = create_test_session();

    let answer = session.engine.can_apply_for("annual leave");
    assert!(answer.can_apply);
    assert_eq!(
        answer.message,
        "You can apply for Annual Leave. Your balance: 10 days."
    );
}

#[test]
fn test_cannot_apply_when_balance_exhausted() {
    // Zero balance answers no with the resolved description
    let session = create_test_session();

    let answer = session.engine.can_apply_for("CL");
    assert!(!answer.can_apply);
    assert_eq!(
        answer.message,
        "You do not have sufficient balance for Casual Leave."
    );
}

#[test]
fn test_alternative_suggested_for_exhausted_leave() {
    // An exhausted leave suggests the first usable one in balance order
    let session = create_test_session();

    let suggestion = session.engine.suggest_alternative_leave("casual leave");
    assert_eq!(suggestion.suggestion.as_deref(), Some("Annual Leave"));
    assert_eq!(
        suggestion.message,
        "You have no balance in Casual Leave. Consider applying for Annual Leave instead."
    );
}

#[test]
fn test_next_eligible_now_and_after_anniversary() {
    // Usable balance answers Now; exhausted with a future anniversary
    // answers the anniversary date
    let session = create_test_session();
    let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    let answer = session.engine.next_eligible_date("AL", today);
    assert_eq!(answer.when, NextEligibility::Now);
    assert_eq!(answer.message, "You can apply for Annual Leave immediately.");

    let answer = session.engine.next_eligible_date("CL", today);
    assert_eq!(answer.when, NextEligibility::OnDate("01-Mar-2027".to_string()));
    assert_eq!(
        answer.message,
        "You can apply for Casual Leave after 01-Mar-2027."
    );
}

#[test]
fn test_attachment_and_self_service_rules() {
    // Policy flags drive the attachment and self-service answers
    let session = create_test_session();

    assert_eq!(session.engine.needs_attachment("CL").required, Some(true));
    assert_eq!(
        session.engine.needs_attachment("AL").message,
        "Annual Leave does NOT require an attachment."
    );
    assert_eq!(session.engine.is_self_service("AL").self_service, Some(true));
    assert_eq!(
        session.engine.is_self_service("CL").message,
        "Casual Leave requires manager processing."
    );
}

#[test]
fn test_listing_rules_follow_policy_flags() {
    // Workday and attachment listings keep catalog order
    let session = create_test_session();

    let workday = session.engine.leave_types_on_workday();
    assert_eq!(workday.len(), 1);
    assert_eq!(workday[0].code, "AL");

    let attachment: Vec<String> = session
        .engine
        .leaves_requiring_attachment()
        .into_iter()
        .map(|leave| leave.code)
        .collect();
    assert_eq!(attachment, ["CL", "SL"]);
}

#[test]
fn test_policy_row_without_balance_is_not_eligible() {
    // A catalog entry with no balance row answers no everywhere
    let session = create_test_session();
    let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    let answer = session.engine.can_apply_for("sick leave");
    assert!(!answer.can_apply);
    assert_eq!(
        answer.message,
        "You do not have sufficient balance for Sick Leave."
    );

    let answer = session.engine.next_eligible_date("SL", today);
    assert_eq!(answer.when, NextEligibility::NotEligible);
    assert_eq!(answer.message, "No balance info for SL.");
}

// =============================================================================
// SECTION 3: Structured Topic Answer Tests - 3 tests
// =============================================================================

#[tokio::test]
async fn test_balance_question_lists_usable_catalog_leaves() {
    // Answer lines cover usable catalog leaves; data rows cover the
    // whole balance table including the orphan row
    let (status, json) = ask(create_router_for_test(), "What is my leave balance?").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["topic"], "leave_balances");
    assert_eq!(json["answer"], "Your leave balances:\nAnnual Leave: 10 days");

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["code"], "AL");
    assert_eq!(rows[0]["balance"], "10");
    assert_eq!(rows[0]["air_ticket"], true);
    assert_eq!(rows[2]["code"], "905");
    assert_eq!(rows[2]["description"], "905");
    assert_eq!(rows[2]["attachment_required"], false);
}

#[tokio::test]
async fn test_air_ticket_question_lists_granting_leaves() {
    // Only the air-ticket-flagged balance appears, with its percentage
    let (status, json) = ask(create_router_for_test(), "Which leaves give an air ticket?").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["topic"], "air_ticket_leaves");
    assert_eq!(
        json["answer"],
        "Leaves eligible for Air Ticket:\nAnnual Leave (AL): 50%"
    );

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["code"], "AL");
    assert_eq!(rows[0]["percent"], "50");
}

#[tokio::test]
async fn test_structured_answer_has_no_search_fields() {
    // Structured topics never carry sections or the degraded marker
    let (status, json) = ask(create_router_for_test(), "What is my leave balance?").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.get("sections").is_none());
    assert!(json.get("degraded").is_none());
    assert_eq!(json["correlation_id"].as_str().unwrap().len(), 36);
}

// =============================================================================
// SECTION 4: Profile Topic Answer Tests - 3 tests
// =============================================================================

#[tokio::test]
async fn test_profile_field_questions_answer_from_employee_record() {
    // Each profile keyword reads straight off the employee record
    let cases = [
        ("Who is my manager?", "manager", "Your manager: Omar Farouk"),
        ("What shift am I on?", "shift", "Your shift: Day Shift"),
        (
            "Which department am I in?",
            "department",
            "Your department: Finance",
        ),
        (
            "What is my RP number?",
            "residency_permit",
            "Your RP Number: RP-9981",
        ),
        (
            "When is my joining date?",
            "joining_date",
            "Your joining date: 15-Aug-2020",
        ),
    ];

    for (question, topic, answer) in cases {
        let (status, json) = ask(create_router_for_test(), question).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["topic"], topic, "topic for {question:?}");
        assert_eq!(json["answer"], answer, "answer for {question:?}");
        assert!(json.get("data").is_none());
    }
}

#[tokio::test]
async fn test_probation_question_reports_past_end_date() {
    // Probation end in 2021 is behind any current clock
    let (status, json) = ask(create_router_for_test(), "Am I still on probation?").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["topic"], "probation");
    assert_eq!(
        json["answer"],
        "You are not on probation. Probation ended on 15-Feb-2021."
    );
}

#[tokio::test]
async fn test_accommodation_question_reads_eligibility_list() {
    // The eligibility list on the employee record carries Accommodation
    let (status, json) = ask(create_router_for_test(), "Do I get company accommodation?").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["topic"], "accommodation");
    assert_eq!(json["answer"], "You are eligible for company accommodation.");
}

// =============================================================================
// SECTION 5: Policy Fallback Search Tests - 5 tests
// =============================================================================

#[tokio::test]
async fn test_policy_question_returns_best_sections() {
    // Query embedding [1, 0] matches Sick Leave exactly and Gratuity at
    // 0.6; Public Holidays falls under the threshold
    let (status, json) = ask(create_router_for_test(), "How many sick days are paid?").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["topic"], "policy_fallback");
    assert!(json.get("degraded").is_none());

    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["section"], "Sick Leave");
    assert!(sections[0]["score"].as_f64().unwrap() > 0.999);
    assert_eq!(sections[1]["section"], "Gratuity");

    let answer = json["answer"].as_str().unwrap();
    assert!(answer.starts_with("Matched Policy Section: Sick Leave (Score: 1.000)"));
    assert!(answer.contains("full pay for the first 15 days"));
    assert!(answer.contains("Matched Policy Section: Gratuity (Score: 0.600)"));
}

#[tokio::test]
async fn test_policy_results_ordered_by_score() {
    // Query embedding [0, 1] ranks Public Holidays over Gratuity
    let router = create_router_with_provider(Arc::new(FixedEmbedding(vec![0.0, 1.0])));
    let (status, json) = ask(router, "When are the public holidays?").await;

    assert_eq!(status, StatusCode::OK);
    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["section"], "Public Holidays");
    assert_eq!(sections[1]["section"], "Gratuity");
}

#[tokio::test]
async fn test_policy_below_threshold_marks_degraded() {
    // No section reaches 0.5, so the top matches come back with the
    // degraded marker set
    let router = create_router_with_provider(Arc::new(FixedEmbedding(vec![-1.0, 0.0])));
    let (status, json) = ask(router, "What does the handbook say about parking?").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["degraded"], true);

    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0]["section"], "Public Holidays");
    assert!(json["answer"]
        .as_str()
        .unwrap()
        .starts_with("Matched Policy Section: Public Holidays (Score: 0.000)"));
}

#[tokio::test]
async fn test_policy_search_survives_provider_failure() {
    // Embedding failures degrade to the no-match answer, not an error
    let router = create_router_with_provider(Arc::new(FailingEmbedding));
    let (status, json) = ask(router, "What is the remote work policy?").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["topic"], "policy_fallback");
    assert_eq!(
        json["answer"],
        "No relevant policy or answer found. Try rephrasing or contact HR."
    );
    assert!(json.get("sections").is_none());
    assert!(json.get("degraded").is_none());
}

#[tokio::test]
async fn test_policy_question_with_empty_corpus() {
    // No corpus means no matches, answered without error
    let state = AppState::new(
        create_test_session(),
        Vec::new(),
        Arc::new(FixedEmbedding(vec![1.0, 0.0])),
        SearchConfig::default(),
    );
    let (status, json) = ask(create_router(state), "What is the gratuity policy?").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["answer"],
        "No relevant policy or answer found. Try rephrasing or contact HR."
    );
}

// =============================================================================
// SECTION 6: Profile Endpoint Tests - 2 tests
// =============================================================================

#[tokio::test]
async fn test_profile_returns_employee_card() {
    // The card carries every display field from the snapshot
    let (status, json) = get_profile(create_router_for_test()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Amina Hassan");
    assert_eq!(json["job_title"], "Senior Accountant");
    assert_eq!(json["department"], "Finance");
    assert_eq!(json["manager"], "Omar Farouk");
    assert_eq!(json["shift"], "Day Shift");
    assert_eq!(json["rp_number"], "RP-9981");
    assert_eq!(json["joining_date"], "15-Aug-2020");
    assert!(json["years_of_service"].is_i64());
}

#[tokio::test]
async fn test_profile_fills_missing_fields() {
    // Sparse snapshots fall back to the placeholder text
    let snapshot: RawSnapshot =
        serde_json::from_value(json!({"employee": [{"Emp_ID_N": 1}]})).unwrap();
    let state = AppState::new(
        SessionState::from_snapshot(&snapshot).unwrap(),
        Vec::new(),
        Arc::new(FixedEmbedding(vec![1.0, 0.0])),
        SearchConfig::default(),
    );
    let (status, json) = get_profile(create_router(state)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "");
    assert_eq!(json["department"], "Not specified");
    assert_eq!(json["manager"], "Not specified");
    assert_eq!(json["years_of_service"], Value::Null);
}

// =============================================================================
// SECTION 7: Error Case Tests - 5 tests
// =============================================================================

#[tokio::test]
async fn test_wrong_employee_id_returns_not_found() {
    // The session is bound to employee 682; any other id is rejected
    let (status, json) = post_ask(
        create_router_for_test(),
        json!({"employee_id": 9999, "question": "What is my leave balance?"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "EMPLOYEE_NOT_FOUND");
    assert_eq!(
        json["message"],
        "Employee 9999 not found in the session context"
    );
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    // Unparseable body is reported as malformed JSON
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ask")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_question_field_returns_validation_error() {
    // Well-formed JSON missing a required field is a validation error
    let (status, json) = post_ask(create_router_for_test(), json!({"employee_id": 682})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_wrong_employee_id_type_returns_400() {
    // A string employee_id fails deserialization
    let (status, json) = post_ask(
        create_router_for_test(),
        json!({"employee_id": "682", "question": "What is my leave balance?"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    // JSON bodies must declare their content type
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ask")
                .body(Body::from(
                    json!({"employee_id": 682, "question": "hi"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
}
