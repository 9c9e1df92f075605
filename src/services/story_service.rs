//! Story Service - resolves and embeds the meeting back-reference

use std::sync::Arc;

use crate::domain::{
    CreateStoryInput, DomainError, MeetingRef, MeetingRepository, Story, StoryRepository,
};

#[derive(Clone)]
pub struct StoryService {
    stories: Arc<dyn StoryRepository>,
    meetings: Arc<dyn MeetingRepository>,
}

impl StoryService {
    pub fn new(stories: Arc<dyn StoryRepository>, meetings: Arc<dyn MeetingRepository>) -> Self {
        Self { stories, meetings }
    }

    /// Create a story under an existing meeting.
    ///
    /// The meeting is looked up first and its snapshot embedded. A meeting
    /// deleted between lookup and insert also ends in `NotFound`.
    pub async fn create_story(
        &self,
        meeting_id: &str,
        input: CreateStoryInput,
    ) -> Result<Story, DomainError> {
        if input.name.trim().is_empty() {
            return Err(DomainError::Validation("Story name is required".to_string()));
        }

        let meeting = self
            .meetings
            .find_by_id(meeting_id)
            .await?
            .ok_or(DomainError::NotFound("meeting"))?;

        let story = self
            .stories
            .create_for_meeting(MeetingRef::from(&meeting), input)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Meeting {} vanished before story insert", meeting_id);
                DomainError::NotFound("meeting")
            })?;

        tracing::info!("Story {} created for meeting {}", story.id, meeting_id);
        Ok(story)
    }

    /// Stories referencing `meeting_id`; empty when none, whether or not the
    /// meeting exists.
    pub async fn list_stories_by_meeting(
        &self,
        meeting_id: &str,
    ) -> Result<Vec<Story>, DomainError> {
        self.stories.find_by_meeting(meeting_id).await
    }

    pub async fn list_stories(&self) -> Result<Vec<Story>, DomainError> {
        self.stories.find_all().await
    }

    pub async fn get_story(&self, story_id: &str) -> Result<Story, DomainError> {
        self.stories
            .find_by_id(story_id)
            .await?
            .ok_or(DomainError::NotFound("story"))
    }

    /// Delete by id. Deleting a missing story is a successful no-op.
    pub async fn delete_story(&self, story_id: &str) -> Result<(), DomainError> {
        let removed = self.stories.delete(story_id).await?;
        if !removed {
            tracing::debug!("delete of missing story {} ignored", story_id);
        }
        Ok(())
    }
}
