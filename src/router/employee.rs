//! Employee CRUD routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::AppState;
use crate::employee::{Employee, EmployeeBody};
use crate::error::Result;
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
) -> Result<(StatusCode, Json<Vec<Employee>>)> {
    let employees = state.employees.list_all().await?;
    Ok((StatusCode::FOUND, Json(employees)))
}

async fn find(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Employee>)> {
    let employee = state.employees.find_by_id(id).await?;
    Ok((StatusCode::FOUND, Json(employee)))
}

async fn new(
    State(state): State<AppState>,
    Valid(body): Valid<EmployeeBody>,
) -> Result<(StatusCode, Json<Employee>)> {
    let employee = state.employees.create(&body).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<()> {
    state.employees.delete_by_id(id).await
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Valid(body): Valid<EmployeeBody>,
) -> Result<Json<Employee>> {
    Ok(Json(state.employees.update(id, &body).await?))
}
