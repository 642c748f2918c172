use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        study::{
            CreateMaterialDto, CreateStudySectionDto, MaterialDto, PublishDto, ReorderDto,
            StudySectionDto,
        },
    },
    server::{
        error::Error,
        model::app::AppState,
        service::study::publishing::{NewMaterial, PublishingService},
    },
};

pub static STUDY_TAG: &str = "study";

#[derive(Deserialize, IntoParams)]
pub struct SectionListParams {
    pub class_id: i32,
    pub class_section_id: Option<i32>,
}

/// Create a study-material section under a class
#[utoipa::path(
    post,
    path = "/api/study/sections",
    tag = STUDY_TAG,
    request_body = CreateStudySectionDto,
    responses(
        (status = 201, description = "Section created", body = StudySectionDto),
        (status = 404, description = "Class, class section or subject not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_section(
    State(state): State<AppState>,
    Json(dto): Json<CreateStudySectionDto>,
) -> Result<impl IntoResponse, Error> {
    let publishing_service = PublishingService::new(&state.db);

    let section = publishing_service
        .create_section(
            dto.class_id,
            dto.class_section_id,
            dto.subject_id,
            dto.title,
            dto.sort_order.unwrap_or(0),
            dto.created_by,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(StudySectionDto::from(section))))
}

/// List a class's study sections, optionally narrowed to one class section
#[utoipa::path(
    get,
    path = "/api/study/sections",
    tag = STUDY_TAG,
    params(SectionListParams),
    responses(
        (status = 200, description = "Sections listed", body = Vec<StudySectionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sections(
    State(state): State<AppState>,
    Query(params): Query<SectionListParams>,
) -> Result<impl IntoResponse, Error> {
    let publishing_service = PublishingService::new(&state.db);

    let sections = publishing_service
        .list_sections(params.class_id, params.class_section_id)
        .await?;
    let sections: Vec<StudySectionDto> = sections.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(sections)))
}

/// Publish or unpublish a section
#[utoipa::path(
    put,
    path = "/api/study/sections/{section_id}/publish",
    tag = STUDY_TAG,
    params(("section_id" = i32, Path, description = "Study section ID")),
    request_body = PublishDto,
    responses(
        (status = 200, description = "Publish flag updated", body = StudySectionDto),
        (status = 404, description = "Section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn publish_section(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
    Json(dto): Json<PublishDto>,
) -> Result<impl IntoResponse, Error> {
    let publishing_service = PublishingService::new(&state.db);

    let section = publishing_service
        .set_section_published(section_id, dto.is_published)
        .await?;

    Ok((StatusCode::OK, Json(StudySectionDto::from(section))))
}

/// Delete a section and everything underneath it
#[utoipa::path(
    delete,
    path = "/api/study/sections/{section_id}",
    tag = STUDY_TAG,
    params(("section_id" = i32, Path, description = "Study section ID")),
    responses(
        (status = 204, description = "Section deleted"),
        (status = 404, description = "Section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_section(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let publishing_service = PublishingService::new(&state.db);

    publishing_service.delete_section(section_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Attach a material to a section
#[utoipa::path(
    post,
    path = "/api/study/materials",
    tag = STUDY_TAG,
    request_body = CreateMaterialDto,
    responses(
        (status = 201, description = "Material created", body = MaterialDto),
        (status = 404, description = "Section not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_material(
    State(state): State<AppState>,
    Json(dto): Json<CreateMaterialDto>,
) -> Result<impl IntoResponse, Error> {
    let publishing_service = PublishingService::new(&state.db);

    let material = publishing_service
        .create_material(
            dto.section_id,
            NewMaterial {
                title: dto.title,
                material_type: dto.material_type.into(),
                file_path: dto.file_path,
                hls_path: dto.hls_path,
                file_size: dto.file_size,
                duration: dto.duration,
                sort_order: dto.sort_order.unwrap_or(0),
                uploaded_by: dto.uploaded_by,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(MaterialDto::from(material))))
}

/// Every material under a section regardless of publish state, for staff
#[utoipa::path(
    get,
    path = "/api/study/sections/{section_id}/materials",
    tag = STUDY_TAG,
    params(("section_id" = i32, Path, description = "Study section ID")),
    responses(
        (status = 200, description = "Materials listed", body = Vec<MaterialDto>),
        (status = 404, description = "Section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_materials(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let publishing_service = PublishingService::new(&state.db);

    let materials = publishing_service.list_materials(section_id).await?;
    let materials: Vec<MaterialDto> = materials.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(materials)))
}

/// Materials a student can see: both the section and the material are published
#[utoipa::path(
    get,
    path = "/api/study/sections/{section_id}/materials/visible",
    tag = STUDY_TAG,
    params(("section_id" = i32, Path, description = "Study section ID")),
    responses(
        (status = 200, description = "Visible materials listed", body = Vec<MaterialDto>),
        (status = 404, description = "Section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_visible_materials(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let publishing_service = PublishingService::new(&state.db);

    let materials = publishing_service.visible_materials(section_id).await?;
    let materials: Vec<MaterialDto> = materials.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(materials)))
}

/// Publish or unpublish a material
#[utoipa::path(
    put,
    path = "/api/study/materials/{material_id}/publish",
    tag = STUDY_TAG,
    params(("material_id" = i32, Path, description = "Material ID")),
    request_body = PublishDto,
    responses(
        (status = 200, description = "Publish flag updated", body = MaterialDto),
        (status = 404, description = "Material not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn publish_material(
    State(state): State<AppState>,
    Path(material_id): Path<i32>,
    Json(dto): Json<PublishDto>,
) -> Result<impl IntoResponse, Error> {
    let publishing_service = PublishingService::new(&state.db);

    let material = publishing_service
        .set_material_published(material_id, dto.is_published)
        .await?;

    Ok((StatusCode::OK, Json(MaterialDto::from(material))))
}

/// Move a material to a new slot within its section
#[utoipa::path(
    put,
    path = "/api/study/materials/{material_id}/reorder",
    tag = STUDY_TAG,
    params(("material_id" = i32, Path, description = "Material ID")),
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Material moved", body = MaterialDto),
        (status = 404, description = "Material not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_material(
    State(state): State<AppState>,
    Path(material_id): Path<i32>,
    Json(dto): Json<ReorderDto>,
) -> Result<impl IntoResponse, Error> {
    let publishing_service = PublishingService::new(&state.db);

    let material = publishing_service
        .reorder_material(material_id, dto.sort_order)
        .await?;

    Ok((StatusCode::OK, Json(MaterialDto::from(material))))
}

/// Delete a material
#[utoipa::path(
    delete,
    path = "/api/study/materials/{material_id}",
    tag = STUDY_TAG,
    params(("material_id" = i32, Path, description = "Material ID")),
    responses(
        (status = 204, description = "Material deleted"),
        (status = 404, description = "Material not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_material(
    State(state): State<AppState>,
    Path(material_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let publishing_service = PublishingService::new(&state.db);

    publishing_service.delete_material(material_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
