//! Meeting API handlers, including the attendee and ticket sets

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::error::{ApiResult, confirmation};
use crate::domain::{CreateMeetingInput, CreateTicketInput};
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateMeetingRequest {
    #[serde(default)]
    pub name: String,
}

/// Body of attendee/ticket add and remove calls: `{"id": "<member id>"}`
#[derive(Debug, Deserialize, ToSchema)]
pub struct MemberRequest {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTicketRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}

pub async fn list_meetings(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let meetings = state.directory.list_meetings().await?;
    Ok(Json(meetings))
}

pub async fn create_meeting(
    State(state): State<AppState>,
    Json(payload): Json<CreateMeetingRequest>,
) -> ApiResult<impl IntoResponse> {
    let meeting = state
        .directory
        .create_meeting(CreateMeetingInput { name: payload.name })
        .await?;
    Ok((StatusCode::CREATED, Json(meeting)))
}

pub async fn get_meeting(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let meeting = state.directory.get_meeting(&id).await?;
    Ok(Json(meeting))
}

pub async fn delete_meeting(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.directory.delete_meeting(&id).await?;
    Ok(confirmation("Meeting successfully deleted"))
}

#[utoipa::path(
    get,
    path = "/api/meetings/{id}/attendees",
    params(("id" = String, Path, description = "Meeting id")),
    responses(
        (status = 200, description = "User ids attending the meeting"),
        (status = 404, description = "No meeting found for that id")
    )
)]
pub async fn list_attendees(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let attendees = state.membership.list_attendees(&id).await?;
    Ok(Json(attendees))
}

#[utoipa::path(
    post,
    path = "/api/meetings/{id}/attendees",
    params(("id" = String, Path, description = "Meeting id")),
    request_body = MemberRequest,
    responses(
        (status = 200, description = "Attendee successfully added"),
        (status = 400, description = "No user id"),
        (status = 404, description = "No user or meeting found for that id")
    )
)]
pub async fn add_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MemberRequest>,
) -> ApiResult<impl IntoResponse> {
    state.membership.add_attendee(&id, &payload.id).await?;
    Ok(confirmation("Attendee successfully added"))
}

pub async fn remove_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MemberRequest>,
) -> ApiResult<impl IntoResponse> {
    state.membership.remove_attendee(&id, &payload.id).await?;
    Ok(confirmation("Attendee successfully removed"))
}

pub async fn list_meeting_tickets(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let tickets = state.membership.list_tickets(&id).await?;
    Ok(Json(tickets))
}

#[utoipa::path(
    post,
    path = "/api/meetings/{id}/tickets",
    params(("id" = String, Path, description = "Meeting id")),
    request_body = CreateTicketRequest,
    responses(
        (status = 200, description = "Ticket successfully added"),
        (status = 404, description = "No meeting found for that id; the ticket is still created")
    )
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateTicketRequest>,
) -> ApiResult<impl IntoResponse> {
    state
        .membership
        .create_ticket(
            &id,
            CreateTicketInput {
                title: payload.title,
                description: payload.description,
            },
        )
        .await?;
    Ok(confirmation("Ticket successfully added"))
}

pub async fn remove_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MemberRequest>,
) -> ApiResult<impl IntoResponse> {
    state.membership.remove_ticket(&id, &payload.id).await?;
    Ok(confirmation("Ticket successfully removed"))
}
