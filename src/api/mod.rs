//! HTTP API module for the leave query engine.
//!
//! Exposes one employee session over two endpoints: `POST /ask` for
//! free-form questions and `GET /profile` for the profile summary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AskRequest;
pub use response::{ApiError, ApiErrorResponse, AskData, AskResponse};
pub use state::{AppState, SessionState};
