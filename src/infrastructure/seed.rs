//! Demo data for local runs (`SEED_DEMO=1`)

use crate::domain::{
    CreateMeetingInput, CreateStoryInput, CreateTicketInput, CreateUserInput, DomainError,
};
use crate::infrastructure::AppState;

const DEMO_MEETING: &str = "Sprint 42 planning";

/// Seed one meeting with attendees, tickets and a story.
///
/// Skipped when a meeting with the demo name already exists.
pub async fn seed_demo_data(state: &AppState) -> Result<(), DomainError> {
    let existing = state.directory.list_meetings().await?;
    if existing.iter().any(|m| m.name == DEMO_MEETING) {
        tracing::info!("Demo meeting already present, skipping seed");
        return Ok(());
    }

    let meeting = state
        .directory
        .create_meeting(CreateMeetingInput {
            name: DEMO_MEETING.to_owned(),
        })
        .await?;

    for name in ["Ada", "Grace", "Linus"] {
        let user = state
            .directory
            .create_user(CreateUserInput {
                name: name.to_owned(),
                email: Some(format!("{}@example.com", name.to_lowercase())),
            })
            .await?;
        state.membership.add_attendee(&meeting.id, &user.id).await?;
    }

    for title in ["Login page", "Password reset"] {
        state
            .membership
            .create_ticket(
                &meeting.id,
                CreateTicketInput {
                    title: title.to_owned(),
                    description: None,
                },
            )
            .await?;
    }

    let story = state
        .stories
        .create_story(
            &meeting.id,
            CreateStoryInput {
                name: "As a user I can sign in".to_owned(),
            },
        )
        .await?;
    state.membership.add_estimate(&story.id, "3").await?;

    Ok(())
}
