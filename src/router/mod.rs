pub mod employee;
pub mod project;
pub mod status;

use axum::Json;
use axum::extract::{FromRequest, Request};
use validator::Validate;

use crate::error::ServerError;

/// JSON body extractor running payload validation before any handler logic.
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ServerError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Build an [`crate::AppState`] over a test pool.
#[cfg(test)]
pub(crate) fn state(pool: sqlx::SqlitePool) -> crate::AppState {
    use std::sync::Arc;

    crate::AppState {
        config: Arc::new(crate::config::Configuration::default()),
        employees: crate::employee::EmployeeService::new(pool.clone()),
        projects: crate::project::ProjectService::new(pool.clone()),
        db: crate::database::Database { sqlite: pool },
    }
}
