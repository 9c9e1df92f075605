//! Services Layer
//!
//! Business logic over the repository traits. Handlers call these; nothing
//! here knows about HTTP.

pub mod directory_service;
pub mod membership_service;
pub mod story_service;

pub use directory_service::DirectoryService;
pub use membership_service::MembershipService;
pub use story_service::StoryService;
