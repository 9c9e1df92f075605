//! Standalone ticket handlers

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use super::error::{ApiResult, confirmation};
use crate::infrastructure::AppState;

pub async fn list_tickets(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let tickets = state.directory.list_all_tickets().await?;
    Ok(Json(tickets))
}

pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let ticket = state.directory.get_ticket(&id).await?;
    Ok(Json(ticket))
}

// Meetings that still list the ticket keep the id.
pub async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.directory.delete_ticket(&id).await?;
    Ok(confirmation("Ticket successfully deleted"))
}
