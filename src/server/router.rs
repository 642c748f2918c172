//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here with its utoipa annotation; the collected
//! OpenAPI document is served through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and the
/// interactive documentation at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Campus", description = "Campus API"), tags(
        (name = controller::org::ORG_TAG, description = "Classes and sections"),
        (name = controller::library::LIBRARY_TAG, description = "Library circulation"),
        (name = controller::transport::TRANSPORT_TAG, description = "Bus fleet and tracking"),
        (name = controller::study::STUDY_TAG, description = "Study material publishing"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::org::create_class_section))
        .routes(routes!(controller::org::delete_class_section))
        .routes(routes!(
            controller::library::create_book,
            controller::library::list_books
        ))
        .routes(routes!(controller::library::get_book))
        .routes(routes!(controller::library::issue_loan))
        .routes(routes!(controller::library::list_overdue_loans))
        .routes(routes!(controller::library::get_loan))
        .routes(routes!(controller::library::renew_loan))
        .routes(routes!(controller::library::return_loan))
        .routes(routes!(
            controller::transport::create_bus,
            controller::transport::list_buses
        ))
        .routes(routes!(controller::transport::list_bus_routes))
        .routes(routes!(controller::transport::create_route))
        .routes(routes!(controller::transport::delete_route))
        .routes(routes!(controller::transport::create_trip))
        .routes(routes!(controller::transport::advance_trip))
        .routes(routes!(controller::transport::record_location))
        .routes(routes!(controller::transport::get_latest_location))
        .routes(routes!(controller::transport::list_locations))
        .routes(routes!(controller::transport::list_trip_locations))
        .routes(routes!(controller::transport::assign_student))
        .routes(routes!(controller::transport::unassign_student))
        .routes(routes!(controller::transport::get_bus_roster))
        .routes(routes!(
            controller::study::create_section,
            controller::study::list_sections
        ))
        .routes(routes!(controller::study::publish_section))
        .routes(routes!(controller::study::delete_section))
        .routes(routes!(controller::study::create_material))
        .routes(routes!(controller::study::list_materials))
        .routes(routes!(controller::study::list_visible_materials))
        .routes(routes!(controller::study::publish_material))
        .routes(routes!(controller::study::reorder_material))
        .routes(routes!(controller::study::delete_material))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

#[cfg(test)]
mod tests {
    use campus_test_utils::{TestBuilder, TestError};

    use super::*;

    /// Expect the route table and OpenAPI document to assemble without path
    /// conflicts
    #[tokio::test]
    async fn router_builds_with_state() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let _router: Router = routes().with_state(test.to_app_state());

        Ok(())
    }
}
