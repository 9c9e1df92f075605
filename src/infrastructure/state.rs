//! Application state containing repositories and services

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{
    MeetingRepository, MembershipRepository, StoryRepository, TicketRepository, UserRepository,
};
use crate::infrastructure::{
    SeaOrmMeetingRepository, SeaOrmMembershipRepository, SeaOrmStoryRepository,
    SeaOrmTicketRepository, SeaOrmUserRepository,
};
use crate::services::{DirectoryService, MembershipService, StoryService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Users, meetings and tickets as standalone entities
    pub directory: DirectoryService,
    /// Attendee, ticket and estimate sets
    pub membership: MembershipService,
    /// Stories and their meeting back-reference
    pub stories: StoryService,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(SeaOrmUserRepository::new(db.clone()));
        let meetings: Arc<dyn MeetingRepository> =
            Arc::new(SeaOrmMeetingRepository::new(db.clone()));
        let tickets: Arc<dyn TicketRepository> = Arc::new(SeaOrmTicketRepository::new(db.clone()));
        let story_repo: Arc<dyn StoryRepository> =
            Arc::new(SeaOrmStoryRepository::new(db.clone()));
        let memberships: Arc<dyn MembershipRepository> =
            Arc::new(SeaOrmMembershipRepository::new(db.clone()));

        Self {
            db,
            directory: DirectoryService::new(users.clone(), meetings.clone(), tickets.clone()),
            membership: MembershipService::new(memberships, users, tickets),
            stories: StoryService::new(story_repo, meetings),
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
