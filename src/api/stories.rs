//! Story API handlers and the story estimate set

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::error::{ApiResult, confirmation};
use super::meetings::MemberRequest;
use crate::domain::{CreateStoryInput, DomainError};
use crate::infrastructure::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StoryQuery {
    /// Restrict to stories of this meeting
    #[serde(rename = "meetingId")]
    pub meeting_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStoryRequest {
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/stories",
    params(StoryQuery),
    responses(
        (status = 200, description = "Stories, filtered by meeting when meetingId is given")
    )
)]
pub async fn list_stories(
    State(state): State<AppState>,
    Query(query): Query<StoryQuery>,
) -> ApiResult<impl IntoResponse> {
    let stories = match query.meeting_id {
        Some(meeting_id) => state.stories.list_stories_by_meeting(&meeting_id).await?,
        None => state.stories.list_stories().await?,
    };
    Ok(Json(stories))
}

#[utoipa::path(
    post,
    path = "/api/stories",
    params(StoryQuery),
    request_body = CreateStoryRequest,
    responses(
        (status = 201, description = "Story successfully created"),
        (status = 400, description = "No meeting id"),
        (status = 404, description = "No meeting found for that id")
    )
)]
pub async fn create_story(
    State(state): State<AppState>,
    Query(query): Query<StoryQuery>,
    Json(payload): Json<CreateStoryRequest>,
) -> ApiResult<impl IntoResponse> {
    let meeting_id = query
        .meeting_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| DomainError::Validation("No meeting id".to_string()))?;

    state
        .stories
        .create_story(&meeting_id, CreateStoryInput { name: payload.name })
        .await?;
    Ok((StatusCode::CREATED, confirmation("Story successfully created")))
}

pub async fn get_story(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let story = state.stories.get_story(&id).await?;
    Ok(Json(story))
}

#[utoipa::path(
    delete,
    path = "/api/stories/{id}",
    params(("id" = String, Path, description = "Story id")),
    responses(
        (status = 200, description = "Story successfully removed, also when it did not exist")
    )
)]
pub async fn delete_story(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.stories.delete_story(&id).await?;
    Ok(confirmation("Story successfully removed"))
}

pub async fn list_estimates(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let estimates = state.membership.list_estimates(&id).await?;
    Ok(Json(estimates))
}

pub async fn add_estimate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MemberRequest>,
) -> ApiResult<impl IntoResponse> {
    state.membership.add_estimate(&id, &payload.id).await?;
    Ok(confirmation("Estimate successfully added"))
}

pub async fn remove_estimate(
    State(state): State<AppState>,
    Path((id, estimate_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    state.membership.remove_estimate(&id, &estimate_id).await?;
    Ok(confirmation("Estimate successfully removed"))
}
