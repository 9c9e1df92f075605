//! Repository implementations using SeaORM

pub mod meeting_repository;
pub mod membership_repository;
pub mod story_repository;
pub mod ticket_repository;
pub mod user_repository;

pub use meeting_repository::SeaOrmMeetingRepository;
pub use membership_repository::SeaOrmMembershipRepository;
pub use story_repository::SeaOrmStoryRepository;
pub use ticket_repository::SeaOrmTicketRepository;
pub use user_repository::SeaOrmUserRepository;
