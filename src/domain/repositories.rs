//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{DomainError, MembershipField, SetMutation};

/// User data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating a user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub email: Option<String>,
}

/// Meeting with its membership sets, in store order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub name: String,
    pub attendees: Vec<String>,
    pub tickets: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating a meeting
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMeetingInput {
    pub name: String,
}

/// Snapshot of a meeting embedded in a story at creation time.
///
/// Only `id` is authoritative; `name` is whatever the meeting was called
/// when the story was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRef {
    pub id: String,
    pub name: String,
}

impl From<&Meeting> for MeetingRef {
    fn from(meeting: &Meeting) -> Self {
        Self {
            id: meeting.id.clone(),
            name: meeting.name.clone(),
        }
    }
}

/// Ticket data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
}

/// Input for creating a ticket
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTicketInput {
    pub title: String,
    pub description: Option<String>,
}

/// Story with its meeting back-reference and estimate set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub name: String,
    pub meeting: MeetingRef,
    pub estimates: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for creating a story
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoryInput {
    pub name: String,
}

/// Repository trait for User entity
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find all users
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    async fn create(&self, input: CreateUserInput) -> Result<User, DomainError>;

    /// Delete a user by ID, returning whether a row was removed
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}

/// Repository trait for Meeting entity
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Meeting>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Meeting>, DomainError>;

    /// Create a meeting with empty attendee and ticket sets
    async fn create(&self, input: CreateMeetingInput) -> Result<Meeting, DomainError>;

    /// Delete a meeting by ID. Does not touch stories or members.
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}

/// Repository trait for Ticket entity
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Ticket>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Ticket>, DomainError>;

    async fn create(&self, input: CreateTicketInput) -> Result<Ticket, DomainError>;

    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}

/// Repository trait for Story entity
#[async_trait]
pub trait StoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Story>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Story>, DomainError>;

    /// Stories whose meeting reference has the given identity
    async fn find_by_meeting(&self, meeting_id: &str) -> Result<Vec<Story>, DomainError>;

    /// Insert a story under `meeting`, only if the meeting row still exists.
    ///
    /// Returns `None` when the meeting was gone at insert time.
    async fn create_for_meeting(
        &self,
        meeting: MeetingRef,
        input: CreateStoryInput,
    ) -> Result<Option<Story>, DomainError>;

    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}

/// Atomic single-document updates on membership sets
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Apply `mutation` to `field` of the parent `parent_id` in one store
    /// operation. Returns `false` when no parent document matched.
    async fn apply(
        &self,
        field: MembershipField,
        parent_id: &str,
        mutation: SetMutation,
    ) -> Result<bool, DomainError>;

    /// Current members in store order, or `None` when the parent is missing
    async fn members(
        &self,
        field: MembershipField,
        parent_id: &str,
    ) -> Result<Option<Vec<String>>, DomainError>;
}
