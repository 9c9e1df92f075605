use estimation_hub::db;
use estimation_hub::domain::{
    CreateMeetingInput, CreateStoryInput, DomainError, MeetingRef, StoryRepository,
};
use estimation_hub::infrastructure::{AppState, SeaOrmStoryRepository};
use estimation_hub::models::meeting;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

// Helper to create a test meeting
async fn create_test_meeting(state: &AppState, name: &str) -> String {
    state
        .directory
        .create_meeting(CreateMeetingInput {
            name: name.to_string(),
        })
        .await
        .expect("Failed to create meeting")
        .id
}

fn story_input(name: &str) -> CreateStoryInput {
    CreateStoryInput {
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_create_story_under_missing_meeting_fails() {
    let state = setup_test_state().await;

    let err = state
        .stories
        .create_story("no-such-meeting", story_input("story a"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound("meeting")));

    // Nothing was persisted
    assert!(state.stories.list_stories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_story_embeds_meeting_reference() {
    let state = setup_test_state().await;
    let meeting_id = create_test_meeting(&state, "meeting a").await;

    let story = state
        .stories
        .create_story(&meeting_id, story_input("story a"))
        .await
        .expect("Create story failed");

    assert_eq!(story.meeting.id, meeting_id);
    assert_eq!(story.meeting.name, "meeting a");
    assert!(story.estimates.is_empty());

    let stored = state.stories.get_story(&story.id).await.unwrap();
    assert_eq!(stored, story);
}

#[tokio::test]
async fn test_story_snapshot_survives_meeting_rename() {
    let state = setup_test_state().await;
    let meeting_id = create_test_meeting(&state, "Before").await;
    let story = state
        .stories
        .create_story(&meeting_id, story_input("story a"))
        .await
        .unwrap();

    let mut active: meeting::ActiveModel = meeting::Entity::find_by_id(meeting_id.clone())
        .one(state.db())
        .await
        .unwrap()
        .unwrap()
        .into();
    active.name = Set("After".to_string());
    active.update(state.db()).await.unwrap();

    let stored = state.stories.get_story(&story.id).await.unwrap();
    assert_eq!(stored.meeting.name, "Before");

    // Identity linkage still drives filtering
    let listed = state
        .stories
        .list_stories_by_meeting(&meeting_id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_list_stories_by_meeting_filters_on_identity() {
    let state = setup_test_state().await;
    let m1 = create_test_meeting(&state, "m1").await;
    let m2 = create_test_meeting(&state, "m2").await;
    let empty = create_test_meeting(&state, "empty").await;

    for name in ["a", "b"] {
        state.stories.create_story(&m1, story_input(name)).await.unwrap();
    }
    state.stories.create_story(&m2, story_input("c")).await.unwrap();

    let m1_stories = state.stories.list_stories_by_meeting(&m1).await.unwrap();
    assert_eq!(m1_stories.len(), 2);
    assert!(m1_stories.iter().all(|s| s.meeting.id == m1));

    let m2_stories = state.stories.list_stories_by_meeting(&m2).await.unwrap();
    assert_eq!(m2_stories.len(), 1);
    assert_eq!(m2_stories[0].name, "c");

    assert!(state
        .stories
        .list_stories_by_meeting(&empty)
        .await
        .unwrap()
        .is_empty());
    assert!(state
        .stories
        .list_stories_by_meeting("no-such-meeting")
        .await
        .unwrap()
        .is_empty());

    assert_eq!(state.stories.list_stories().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete_story_is_idempotent() {
    let state = setup_test_state().await;
    let meeting_id = create_test_meeting(&state, "m1").await;
    let story = state
        .stories
        .create_story(&meeting_id, story_input("story a"))
        .await
        .unwrap();

    state.stories.delete_story(&story.id).await.expect("Delete failed");
    state
        .stories
        .delete_story(&story.id)
        .await
        .expect("Repeated delete should succeed");
    state
        .stories
        .delete_story("never-existed")
        .await
        .expect("Deleting a missing story should succeed");

    let err = state.stories.get_story(&story.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound("story")));
}

#[tokio::test]
async fn test_meeting_delete_does_not_cascade() {
    let state = setup_test_state().await;
    let meeting_id = create_test_meeting(&state, "m1").await;
    let story = state
        .stories
        .create_story(&meeting_id, story_input("story a"))
        .await
        .unwrap();

    state.directory.delete_meeting(&meeting_id).await.unwrap();

    // The story keeps its back-reference to the deleted meeting
    let stored = state.stories.get_story(&story.id).await.unwrap();
    assert_eq!(stored.meeting.id, meeting_id);

    // New stories can no longer be created under it
    let err = state
        .stories
        .create_story(&meeting_id, story_input("story b"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_insert_is_conditional_on_meeting_row() {
    // Simulates a meeting deleted between lookup and insert
    let state = setup_test_state().await;
    let repo = SeaOrmStoryRepository::new(state.db().clone());

    let stale = MeetingRef {
        id: "deleted-meeting".to_string(),
        name: "Gone".to_string(),
    };
    let created = repo
        .create_for_meeting(stale, story_input("late story"))
        .await
        .expect("Store call failed");
    assert!(created.is_none());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_story_without_name_is_rejected() {
    let state = setup_test_state().await;
    let meeting_id = create_test_meeting(&state, "m1").await;

    let err = state
        .stories
        .create_story(&meeting_id, story_input(""))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}
