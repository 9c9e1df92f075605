pub mod meeting;
pub mod story;
pub mod ticket;
pub mod user;
