//! HTTP request handlers for the leave query API.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::eligibility::EligibilityEngine;
use crate::router::{route_question, QueryTopic};
use crate::search::search_sections;

use super::request::AskRequest;
use super::response::{ApiError, AskData, AskResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask_handler))
        .route("/profile", get(profile_handler))
        .with_state(state)
}

/// Handler for the POST /ask endpoint.
///
/// Routes the question to a structured topic where possible and falls
/// back to semantic policy search otherwise.
async fn ask_handler(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    let start_time = Instant::now();
    info!(correlation_id = %correlation_id, "Processing question");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // The session holds exactly one employee's tables
    let session = state.session();
    if session.employee.id != Some(request.employee_id) {
        warn!(
            correlation_id = %correlation_id,
            employee_id = request.employee_id,
            "Employee does not match session context"
        );
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::employee_not_found(request.employee_id)),
        )
            .into_response();
    }

    let topic = route_question(&request.question);
    let today = Utc::now().date_naive();
    let engine = &session.engine;
    let employee = &session.employee;

    let mut data = None;
    let mut sections = None;
    let mut degraded = None;

    let answer = match topic {
        QueryTopic::LeaveBalances => {
            let (answer, rows) = balance_answer(engine);
            data = rows;
            answer
        }
        QueryTopic::AirTicketLeaves => {
            let (answer, rows) = air_ticket_answer(engine);
            data = rows;
            answer
        }
        QueryTopic::Manager => format!("Your manager: {}", employee.manager()),
        QueryTopic::Probation => employee.probation_status(today).message,
        QueryTopic::Accommodation => employee.accommodation_status().message,
        QueryTopic::Shift => format!("Your shift: {}", employee.shift()),
        QueryTopic::ResidencyPermit => format!("Your RP Number: {}", employee.rp_number()),
        QueryTopic::Department => format!("Your department: {}", employee.department()),
        QueryTopic::JoiningDate => format!("Your joining date: {}", employee.joining_date()),
        QueryTopic::PolicyFallback => {
            let outcome = search_sections(
                state.provider(),
                &request.question,
                state.corpus(),
                state.search().score_threshold,
                state.search().top_k,
            )
            .await;

            if outcome.results.is_empty() {
                "No relevant policy or answer found. Try rephrasing or contact HR.".to_string()
            } else {
                if outcome.below_threshold {
                    warn!(
                        correlation_id = %correlation_id,
                        "No section reached the score threshold, returning top matches"
                    );
                    degraded = Some(true);
                }
                let answer = outcome
                    .results
                    .iter()
                    .map(|section| {
                        format!(
                            "Matched Policy Section: {} (Score: {:.3})\n{}",
                            section.section, section.score, section.text
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n\n");
                sections = Some(outcome.results);
                answer
            }
        }
    };

    info!(
        correlation_id = %correlation_id,
        topic = ?topic,
        duration_us = start_time.elapsed().as_micros(),
        "Question answered"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(AskResponse {
            correlation_id,
            topic,
            answer,
            data,
            sections,
            degraded,
        }),
    )
        .into_response()
}

/// Handler for the GET /profile endpoint.
async fn profile_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let today = Utc::now().date_naive();
    let summary = state.session().employee.summary(today);

    info!(
        correlation_id = %correlation_id,
        employee = %summary.name,
        "Profile summary requested"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Builds the balance listing answer.
///
/// Lines follow catalog order and show usable balances only; the data
/// rows carry the full summary including zero and orphan balances.
fn balance_answer(engine: &EligibilityEngine) -> (String, Option<AskData>) {
    let lines: Vec<String> = engine
        .catalog()
        .iter()
        .filter_map(|leave_type| {
            engine
                .balance_for(&leave_type.code)
                .filter(|info| info.is_usable())
                .map(|info| {
                    format!(
                        "{}: {} days",
                        leave_type.description,
                        info.balance.normalize()
                    )
                })
        })
        .collect();

    let answer = if lines.is_empty() {
        "You have no leave balances on record.".to_string()
    } else {
        format!("Your leave balances:\n{}", lines.join("\n"))
    };

    (answer, Some(AskData::Balances(engine.balance_summary())))
}

/// Builds the air ticket listing answer.
fn air_ticket_answer(engine: &EligibilityEngine) -> (String, Option<AskData>) {
    let leaves = engine.air_ticket_leaves();
    if leaves.is_empty() {
        return ("No leaves grant air ticket.".to_string(), None);
    }

    let lines: Vec<String> = leaves
        .iter()
        .map(|leave| {
            format!(
                "{} ({}): {}%",
                leave.description,
                leave.code,
                leave.percent.normalize()
            )
        })
        .collect();

    (
        format!("Leaves eligible for Air Ticket:\n{}", lines.join("\n")),
        Some(AskData::AirTickets(leaves)),
    )
}
