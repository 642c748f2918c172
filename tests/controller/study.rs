use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use campus::{
    model::study::{CreateMaterialDto, MaterialTypeDto, PublishDto},
    server::controller::study::{create_material, list_visible_materials, publish_section},
    server::model::app::AppState,
};
use campus_test_utils::{TestBuilder, TestContext, TestError};
use entity::study_material::MaterialType;

struct Seed {
    school: i32,
    class: i32,
    subject: i32,
    staff: i32,
}

async fn seed(test: &TestContext) -> Result<Seed, TestError> {
    let school = test.org().insert_school("Northside").await?;
    let class = test.org().insert_class(school.id, "Grade 5").await?;
    let subject = test.org().insert_subject(school.id, "Science").await?;
    let staff = test.org().insert_user(school.id, "staff@northside.test").await?;

    Ok(Seed {
        school: school.id,
        class: class.id,
        subject: subject.id,
        staff: staff.id,
    })
}

/// Expect 422 when creating a video without an HLS path
#[tokio::test]
async fn create_material_rejects_video_without_hls() -> Result<(), TestError> {
    let test = TestBuilder::new().with_study_tables().build().await?;
    let ids = seed(&test).await?;
    let section = test
        .study()
        .insert_section(ids.school, ids.class, ids.subject, ids.staff, true)
        .await?;
    let state: AppState = test.to_app_state();

    let result = create_material(
        State(state),
        Json(CreateMaterialDto {
            section_id: section.id,
            title: "Lesson 1".to_string(),
            material_type: MaterialTypeDto::Video,
            file_path: "uploads/lesson1.mp4".to_string(),
            hls_path: None,
            file_size: None,
            duration: Some(600),
            sort_order: None,
            uploaded_by: ids.staff,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 200 with an empty body list while the section is unpublished
#[tokio::test]
async fn visible_materials_empty_for_unpublished_section() -> Result<(), TestError> {
    let test = TestBuilder::new().with_study_tables().build().await?;
    let ids = seed(&test).await?;
    let section = test
        .study()
        .insert_section(ids.school, ids.class, ids.subject, ids.staff, false)
        .await?;
    test.study()
        .insert_material(ids.school, section.id, ids.staff, MaterialType::Pdf, true, 1)
        .await?;
    let state: AppState = test.to_app_state();

    let result = list_visible_materials(State(state), Path(section.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 when flipping a section's publish flag
#[tokio::test]
async fn publish_section_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_study_tables().build().await?;
    let ids = seed(&test).await?;
    let section = test
        .study()
        .insert_section(ids.school, ids.class, ids.subject, ids.staff, false)
        .await?;
    let state: AppState = test.to_app_state();

    let result = publish_section(
        State(state),
        Path(section.id),
        Json(PublishDto { is_published: true }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 when publishing a section that does not exist
#[tokio::test]
async fn publish_section_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_study_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = publish_section(
        State(state),
        Path(999),
        Json(PublishDto { is_published: true }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
