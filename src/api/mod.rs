pub mod error;
pub mod health;
pub mod meetings;
pub mod stories;
pub mod tickets;
pub mod users;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::infrastructure::AppState;

pub use error::{ApiError, ApiResult};

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user).delete(users::delete_user))
        // Meetings
        .route(
            "/meetings",
            get(meetings::list_meetings).post(meetings::create_meeting),
        )
        .route(
            "/meetings/:id",
            get(meetings::get_meeting).delete(meetings::delete_meeting),
        )
        .route(
            "/meetings/:id/attendees",
            get(meetings::list_attendees)
                .post(meetings::add_attendee)
                .delete(meetings::remove_attendee),
        )
        .route(
            "/meetings/:id/tickets",
            get(meetings::list_meeting_tickets)
                .post(meetings::create_ticket)
                .delete(meetings::remove_ticket),
        )
        // Tickets
        .route("/tickets", get(tickets::list_tickets))
        .route(
            "/tickets/:id",
            get(tickets::get_ticket).delete(tickets::delete_ticket),
        )
        // Stories
        .route(
            "/stories",
            get(stories::list_stories).post(stories::create_story),
        )
        .route(
            "/stories/:id",
            get(stories::get_story).delete(stories::delete_story),
        )
        .route(
            "/stories/:id/estimates",
            get(stories::list_estimates).post(stories::add_estimate),
        )
        .route(
            "/stories/:id/estimates/:estimate_id",
            delete(stories::remove_estimate),
        )
        .with_state(state)
}
