use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::meetings::list_attendees,
        api::meetings::add_attendee,
        api::meetings::create_ticket,
        api::stories::list_stories,
        api::stories::create_story,
        api::stories::delete_story,
    ),
    components(
        schemas(
            api::meetings::MemberRequest,
            api::meetings::CreateTicketRequest,
            api::stories::CreateStoryRequest,
        )
    ),
    tags(
        (name = "estimation_hub", description = "Meeting and estimation API")
    )
)]
pub struct ApiDoc;
