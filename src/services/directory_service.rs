//! Directory Service - independent lifecycle of users, meetings and tickets
//!
//! Deletes are idempotent and never cascade: removing a meeting leaves its
//! stories and members as they are, and removing a user or ticket leaves any
//! membership set that still references it untouched.

use std::sync::Arc;

use crate::domain::{
    CreateMeetingInput, CreateUserInput, DomainError, Meeting, MeetingRepository, Ticket,
    TicketRepository, User, UserRepository,
};

#[derive(Clone)]
pub struct DirectoryService {
    users: Arc<dyn UserRepository>,
    meetings: Arc<dyn MeetingRepository>,
    tickets: Arc<dyn TicketRepository>,
}

impl DirectoryService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        meetings: Arc<dyn MeetingRepository>,
        tickets: Arc<dyn TicketRepository>,
    ) -> Self {
        Self {
            users,
            meetings,
            tickets,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.users.find_all().await
    }

    pub async fn create_user(&self, input: CreateUserInput) -> Result<User, DomainError> {
        if input.name.trim().is_empty() {
            return Err(DomainError::Validation("User name is required".to_string()));
        }
        let user = self.users.create(input).await?;
        tracing::info!("User {} created", user.id);
        Ok(user)
    }

    pub async fn get_user(&self, id: &str) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("user"))
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), DomainError> {
        if self.users.delete(id).await? {
            tracing::info!("User {} deleted", id);
        }
        Ok(())
    }

    pub async fn list_meetings(&self) -> Result<Vec<Meeting>, DomainError> {
        self.meetings.find_all().await
    }

    pub async fn create_meeting(&self, input: CreateMeetingInput) -> Result<Meeting, DomainError> {
        if input.name.trim().is_empty() {
            return Err(DomainError::Validation("Meeting name is required".to_string()));
        }
        let meeting = self.meetings.create(input).await?;
        tracing::info!("Meeting {} created", meeting.id);
        Ok(meeting)
    }

    pub async fn get_meeting(&self, id: &str) -> Result<Meeting, DomainError> {
        self.meetings
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("meeting"))
    }

    pub async fn delete_meeting(&self, id: &str) -> Result<(), DomainError> {
        if self.meetings.delete(id).await? {
            tracing::info!("Meeting {} deleted", id);
        }
        Ok(())
    }

    pub async fn list_all_tickets(&self) -> Result<Vec<Ticket>, DomainError> {
        self.tickets.find_all().await
    }

    pub async fn get_ticket(&self, id: &str) -> Result<Ticket, DomainError> {
        self.tickets
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("ticket"))
    }

    pub async fn delete_ticket(&self, id: &str) -> Result<(), DomainError> {
        if self.tickets.delete(id).await? {
            tracing::info!("Ticket {} deleted", id);
        }
        Ok(())
    }
}
