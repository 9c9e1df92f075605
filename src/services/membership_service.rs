//! Membership Service - set-valued fields on meetings and stories
//!
//! Every add is a set-union and every remove drops all matching ids, each
//! applied as one atomic update on the parent. Repeating a call with the same
//! arguments leaves the same set and reports success again.

use std::sync::Arc;

use crate::domain::{
    CreateTicketInput, DomainError, MembershipField, MembershipRepository, SetMutation, Ticket,
    TicketRepository, UserRepository,
};

#[derive(Clone)]
pub struct MembershipService {
    memberships: Arc<dyn MembershipRepository>,
    users: Arc<dyn UserRepository>,
    tickets: Arc<dyn TicketRepository>,
}

fn require_id(member_id: &str, what: &str) -> Result<(), DomainError> {
    if member_id.trim().is_empty() {
        return Err(DomainError::Validation(format!("No {} id", what)));
    }
    Ok(())
}

impl MembershipService {
    pub fn new(
        memberships: Arc<dyn MembershipRepository>,
        users: Arc<dyn UserRepository>,
        tickets: Arc<dyn TicketRepository>,
    ) -> Self {
        Self {
            memberships,
            users,
            tickets,
        }
    }

    /// Set-union `member_id` into `field` of `parent_id`.
    pub async fn add_member(
        &self,
        field: MembershipField,
        parent_id: &str,
        member_id: &str,
    ) -> Result<(), DomainError> {
        let matched = self
            .memberships
            .apply(field, parent_id, SetMutation::AddToSet(member_id.to_owned()))
            .await?;

        if !matched {
            tracing::debug!("add to {} skipped: parent {} missing", field, parent_id);
            return Err(DomainError::NotFound(field.parent_name()));
        }

        tracing::debug!("added {} to {} of {}", member_id, field, parent_id);
        Ok(())
    }

    /// Remove every occurrence of `member_id` from `field` of `parent_id`.
    /// Succeeds whether or not the parent or the member exists.
    pub async fn remove_member(
        &self,
        field: MembershipField,
        parent_id: &str,
        member_id: &str,
    ) -> Result<(), DomainError> {
        let matched = self
            .memberships
            .apply(field, parent_id, SetMutation::PullAll(member_id.to_owned()))
            .await?;

        // Nothing to remove from a missing parent
        if !matched {
            tracing::debug!("remove from {} skipped: parent {} missing", field, parent_id);
            return Ok(());
        }

        tracing::debug!("removed {} from {} of {}", member_id, field, parent_id);
        Ok(())
    }

    /// Members in store order. An existing parent with no members yields an
    /// empty list; a missing parent is `NotFound`.
    pub async fn list_members(
        &self,
        field: MembershipField,
        parent_id: &str,
    ) -> Result<Vec<String>, DomainError> {
        self.memberships
            .members(field, parent_id)
            .await?
            .ok_or(DomainError::NotFound(field.parent_name()))
    }

    // Meeting.attendees

    /// Attach an existing user to a meeting.
    pub async fn add_attendee(&self, meeting_id: &str, user_id: &str) -> Result<(), DomainError> {
        require_id(user_id, "user")?;

        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::NotFound("user"));
        }

        self.add_member(MembershipField::MeetingAttendees, meeting_id, user_id)
            .await
    }

    pub async fn remove_attendee(
        &self,
        meeting_id: &str,
        user_id: &str,
    ) -> Result<(), DomainError> {
        require_id(user_id, "user")?;
        self.remove_member(MembershipField::MeetingAttendees, meeting_id, user_id)
            .await
    }

    pub async fn list_attendees(&self, meeting_id: &str) -> Result<Vec<String>, DomainError> {
        self.list_members(MembershipField::MeetingAttendees, meeting_id)
            .await
    }

    // Meeting.tickets

    /// Create a ticket, then attach it to the meeting.
    ///
    /// The two steps are separate store calls. When the attach fails the
    /// ticket stays behind as a standalone entity.
    pub async fn create_ticket(
        &self,
        meeting_id: &str,
        input: CreateTicketInput,
    ) -> Result<Ticket, DomainError> {
        if input.title.trim().is_empty() {
            return Err(DomainError::Validation("Ticket title is required".to_string()));
        }

        let ticket = self.tickets.create(input).await?;

        if let Err(e) = self
            .add_member(MembershipField::MeetingTickets, meeting_id, &ticket.id)
            .await
        {
            tracing::warn!(
                "Ticket {} created but not attached to meeting {}: {}",
                ticket.id,
                meeting_id,
                e
            );
            return Err(e);
        }

        tracing::info!("Ticket {} added to meeting {}", ticket.id, meeting_id);
        Ok(ticket)
    }

    /// Detach a ticket from the meeting. The ticket itself is kept.
    pub async fn remove_ticket(
        &self,
        meeting_id: &str,
        ticket_id: &str,
    ) -> Result<(), DomainError> {
        require_id(ticket_id, "ticket")?;
        self.remove_member(MembershipField::MeetingTickets, meeting_id, ticket_id)
            .await
    }

    pub async fn list_tickets(&self, meeting_id: &str) -> Result<Vec<String>, DomainError> {
        self.list_members(MembershipField::MeetingTickets, meeting_id)
            .await
    }

    // Story.estimates: opaque ids, no existence check

    pub async fn add_estimate(&self, story_id: &str, estimate_id: &str) -> Result<(), DomainError> {
        require_id(estimate_id, "estimate")?;
        self.add_member(MembershipField::StoryEstimates, story_id, estimate_id)
            .await
    }

    pub async fn remove_estimate(
        &self,
        story_id: &str,
        estimate_id: &str,
    ) -> Result<(), DomainError> {
        require_id(estimate_id, "estimate")?;
        self.remove_member(MembershipField::StoryEstimates, story_id, estimate_id)
            .await
    }

    pub async fn list_estimates(&self, story_id: &str) -> Result<Vec<String>, DomainError> {
        self.list_members(MembershipField::StoryEstimates, story_id)
            .await
    }
}
