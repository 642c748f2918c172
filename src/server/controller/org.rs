use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        org::{ClassSectionDto, CreateClassSectionDto},
    },
    server::{error::Error, model::app::AppState, service::org::class_section::ClassSectionService},
};

pub static ORG_TAG: &str = "org";

/// Create a section of a class
#[utoipa::path(
    post,
    path = "/api/org/class-sections",
    tag = ORG_TAG,
    request_body = CreateClassSectionDto,
    responses(
        (status = 201, description = "Class section created", body = ClassSectionDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 422, description = "Name already used in this class", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_class_section(
    State(state): State<AppState>,
    Json(dto): Json<CreateClassSectionDto>,
) -> Result<impl IntoResponse, Error> {
    let class_section_service = ClassSectionService::new(&state.db);

    let section = class_section_service
        .create(dto.class_id, dto.name, dto.class_teacher_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ClassSectionDto::from(section))))
}

/// Delete a class section, freeing its name for reuse
#[utoipa::path(
    delete,
    path = "/api/org/class-sections/{section_id}",
    tag = ORG_TAG,
    params(("section_id" = i32, Path, description = "Class section ID")),
    responses(
        (status = 204, description = "Class section deleted"),
        (status = 404, description = "Class section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_class_section(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let class_section_service = ClassSectionService::new(&state.db);

    class_section_service.delete(section_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
