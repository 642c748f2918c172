use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use campus::{
    model::org::CreateClassSectionDto,
    server::controller::org::{create_class_section, delete_class_section},
    server::model::app::AppState,
};
use campus_test_utils::{TestBuilder, TestError};

/// Expect 201 then 422 when reusing a section name within a class
#[tokio::test]
async fn duplicate_section_name_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_org_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let class = test.org().insert_class(school.id, "Grade 5").await?;
    let state: AppState = test.to_app_state();

    let dto = || CreateClassSectionDto {
        class_id: class.id,
        name: "A".to_string(),
        class_teacher_id: None,
    };

    let resp = create_class_section(State(state.clone()), Json(dto()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let result = create_class_section(State(state), Json(dto())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 204 on delete and 404 on a second delete
#[tokio::test]
async fn delete_section_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_org_tables().build().await?;
    let school = test.org().insert_school("Northside").await?;
    let class = test.org().insert_class(school.id, "Grade 5").await?;
    let section = test.org().insert_class_section(class.id, "A").await?;
    let state: AppState = test.to_app_state();

    let resp = delete_class_section(State(state.clone()), Path(section.id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let result = delete_class_section(State(state), Path(section.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
