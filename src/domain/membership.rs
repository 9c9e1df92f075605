//! Set-valued fields and the mutations allowed on them.
//!
//! A membership set is a JSON array of identities stored on the parent
//! document. It is only ever changed through a [`SetMutation`], applied as one
//! atomic update filtered by the parent id.

use std::fmt;

/// The set-valued fields that carry membership edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipField {
    /// Meeting.attendees: User ids
    MeetingAttendees,
    /// Meeting.tickets: Ticket ids
    MeetingTickets,
    /// Story.estimates: opaque estimate ids
    StoryEstimates,
}

impl MembershipField {
    /// Table holding the parent documents
    pub fn parent_table(self) -> &'static str {
        match self {
            MembershipField::MeetingAttendees | MembershipField::MeetingTickets => "meetings",
            MembershipField::StoryEstimates => "stories",
        }
    }

    /// JSON array column on the parent row
    pub fn column(self) -> &'static str {
        match self {
            MembershipField::MeetingAttendees => "attendees",
            MembershipField::MeetingTickets => "tickets",
            MembershipField::StoryEstimates => "estimates",
        }
    }

    /// Parent entity name as used in not-found messages
    pub fn parent_name(self) -> &'static str {
        match self {
            MembershipField::MeetingAttendees | MembershipField::MeetingTickets => "meeting",
            MembershipField::StoryEstimates => "story",
        }
    }
}

impl fmt::Display for MembershipField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.parent_table(), self.column())
    }
}

/// Atomic mutation on a membership set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetMutation {
    /// Set-union: append the id only if no equal id is present
    AddToSet(String),
    /// Remove every element equal to the id, duplicates included
    PullAll(String),
}
