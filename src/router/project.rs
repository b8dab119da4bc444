//! Project CRUD routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::AppState;
use crate::error::Result;
use crate::project::{Project, ProjectBody};
use crate::router::Valid;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(all))
        .route("/find/{id}", get(find))
        .route("/new", post(new))
        .route("/delete/{id}", delete(remove))
        .route("/update/{id}", put(update))
}

/// Reads answer with 302 Found, a literal contract kept from the
/// original service.
async fn all(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Project>>)> {
    let projects = state.projects.list_all().await?;
    Ok((StatusCode::FOUND, Json(projects)))
}

async fn find(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Project>)> {
    let project = state.projects.find_by_id(id).await?;
    Ok((StatusCode::FOUND, Json(project)))
}

async fn new(
    State(state): State<AppState>,
    Valid(body): Valid<ProjectBody>,
) -> Result<(StatusCode, Json<Project>)> {
    let project = state.projects.create(&body).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<()> {
    state.projects.delete_by_id(id).await
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Valid(body): Valid<ProjectBody>,
) -> Result<Json<Project>> {
    Ok(Json(state.projects.update(id, &body).await?))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;
    use sqlx::SqlitePool;

    use crate::employee::Employee;
    use crate::project::Project;
    use crate::{app, make_request, router};

    #[sqlx::test(fixtures("../../fixtures/projects.sql"))]
    async fn test_all_returns_found_and_every_project(pool: SqlitePool) {
        let app = app(router::state(pool));

        let response =
            make_request(app, Method::GET, "/project/all", String::default())
                .await;
        assert_eq!(response.status(), StatusCode::FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let projects: Vec<Project> = serde_json::from_slice(&body).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].company_name, "Software GmbH");
        assert_eq!(projects[0].employee_list.len(), 2);
        assert_eq!(projects[1].project_name, "LoginPage");
        assert_eq!(projects[1].employee_list.len(), 1);
    }

    #[sqlx::test(fixtures("../../fixtures/projects.sql"))]
    async fn test_find_attaches_the_derived_employee_list(pool: SqlitePool) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::GET,
            "/project/find/1",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let project: Project = serde_json::from_slice(&body).unwrap();
        assert_eq!(project.id, 1);
        assert_eq!(project.project_name, "HomePage");
        assert_eq!(project.employee_list.len(), 2);
        assert_eq!(project.employee_list[0].first_name, "Harry");
    }

    #[sqlx::test]
    async fn test_find_unknown_id_is_not_found(pool: SqlitePool) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::GET,
            "/project/find/9",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "Project with id: 9 could not be found!");
    }

    #[sqlx::test]
    async fn test_new_returns_created_and_the_stored_project(
        pool: SqlitePool,
    ) {
        let app = app(router::state(pool));

        let req_body = json!({
            "companyName": "Tosch",
            "projectName": "Configuration",
        });
        let response = make_request(
            app,
            Method::POST,
            "/project/new",
            req_body.to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let project: Project = serde_json::from_slice(&body).unwrap();
        assert!(project.id >= 1);
        assert_eq!(project.company_name, "Tosch");
        assert_eq!(project.project_name, "Configuration");
        assert!(project.employee_list.is_empty());
    }

    #[sqlx::test]
    async fn test_new_with_null_project_name_is_bad_request(
        pool: SqlitePool,
    ) {
        let app = app(router::state(pool.clone()));

        let req_body = json!({
            "companyName": "Tosch",
            "projectName": null,
        });
        let response = make_request(
            app,
            Method::POST,
            "/project/new",
            req_body.to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Nothing reached the store.
        let projects = crate::project::ProjectService::new(pool)
            .list_all()
            .await
            .unwrap();
        assert!(projects.is_empty());
    }

    #[sqlx::test(fixtures("../../fixtures/projects.sql"))]
    async fn test_delete_then_find_is_not_found(pool: SqlitePool) {
        let app = app(router::state(pool));

        let response = make_request(
            app.clone(),
            Method::DELETE,
            "/project/delete/2",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = make_request(
            app.clone(),
            Method::GET,
            "/project/find/2",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Mary was assigned to the deleted project and is now unlinked.
        let response = make_request(
            app,
            Method::GET,
            "/employee/find/3",
            String::default(),
        )
        .await;
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let mary: Employee = serde_json::from_slice(&body).unwrap();
        assert_eq!(mary.project_id, None);
    }

    #[sqlx::test]
    async fn test_delete_unknown_id_is_not_found(pool: SqlitePool) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::DELETE,
            "/project/delete/5",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "Project with id: 5 could not be found!");
    }

    #[sqlx::test(fixtures("../../fixtures/projects.sql"))]
    async fn test_update_returns_ok_and_the_updated_project(
        pool: SqlitePool,
    ) {
        let app = app(router::state(pool));

        let req_body = json!({
            "companyName": "Bank AG",
            "projectName": "LogoutPage",
        });
        let response = make_request(
            app.clone(),
            Method::PUT,
            "/project/update/2",
            req_body.to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let project: Project = serde_json::from_slice(&body).unwrap();
        assert_eq!(project.id, 2);
        assert_eq!(project.company_name, "Bank AG");
        assert_eq!(project.project_name, "LogoutPage");
        assert_eq!(project.employee_list.len(), 1);

        let response = make_request(
            app,
            Method::GET,
            "/project/find/2",
            String::default(),
        )
        .await;
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let found: Project = serde_json::from_slice(&body).unwrap();
        assert_eq!(found, project);
    }

    #[sqlx::test]
    async fn test_update_unknown_id_is_not_found(pool: SqlitePool) {
        let app = app(router::state(pool));

        let req_body = json!({
            "companyName": "Tosch",
            "projectName": "Configuration",
        });
        let response = make_request(
            app,
            Method::PUT,
            "/project/update/5",
            req_body.to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, "Project with id: 5 could not be found!");
    }
}
