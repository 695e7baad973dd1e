// ============================
// crates/backend-lib/src/handlers/activities.rs
// ============================
//! Activity listing, signup and unregister handlers.
use crate::directory::ActivityName;
use crate::error::AppError;
use crate::metrics::{
    ACTIVITIES_LISTED, SIGNUP_ACCEPTED, SIGNUP_REJECTED, UNREGISTER_ACCEPTED,
    UNREGISTER_REJECTED,
};
use crate::AppState;
use axum::{
    extract::{FromRequestParts, Path, Query, State},
    response::Redirect,
    Json,
};
use mergington_common::{ActivityView, MessageResponse};
use metrics::counter;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Where `GET /` sends browsers
pub const INDEX_PAGE: &str = "/static/index.html";

/// Query string of signup / unregister.
///
/// A missing or malformed `email` is rejected as [`AppError::InvalidQuery`]
/// so the client still gets a `{"detail": ...}` body.
#[derive(Debug, Deserialize, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ParticipantQuery {
    pub email: String,
}

/// `GET /`
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PAGE)
}

/// `GET /activities`
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<ActivityName, ActivityView>> {
    counter!(ACTIVITIES_LISTED).increment(1);
    Json(state.directory.list())
}

/// `POST /activities/{activity_name}/signup?email=...`
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<ActivityName>,
    query: ParticipantQuery,
) -> Result<Json<MessageResponse>, AppError> {
    match state.directory.signup(&activity_name, &query.email) {
        Ok(message) => {
            counter!(SIGNUP_ACCEPTED).increment(1);
            info!(activity = %activity_name, email = %query.email, "participant signed up");
            Ok(Json(MessageResponse { message }))
        },
        Err(e) => {
            counter!(SIGNUP_REJECTED, "code" => e.error_code()).increment(1);
            warn!(activity = %activity_name, email = %query.email, code = e.error_code(), "signup rejected: {e}");
            Err(e)
        },
    }
}

/// `DELETE /activities/{activity_name}/unregister?email=...`
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<ActivityName>,
    query: ParticipantQuery,
) -> Result<Json<MessageResponse>, AppError> {
    match state.directory.unregister(&activity_name, &query.email) {
        Ok(message) => {
            counter!(UNREGISTER_ACCEPTED).increment(1);
            info!(activity = %activity_name, email = %query.email, "participant unregistered");
            Ok(Json(MessageResponse { message }))
        },
        Err(e) => {
            counter!(UNREGISTER_REJECTED, "code" => e.error_code()).increment(1);
            warn!(activity = %activity_name, email = %query.email, code = e.error_code(), "unregister rejected: {e}");
            Err(e)
        },
    }
}
