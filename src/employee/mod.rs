mod repository;
mod service;

pub use repository::*;
pub use service::*;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee as saved on database.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub speciality: Speciality,
    /// Project the employee is assigned to, if any.
    #[serde(rename = "project")]
    pub project_id: Option<i64>,
}

/// Field of work of an [`Employee`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Speciality {
    Frontend,
    Backend,
    Devops,
    Security,
    Cloud,
}

/// Mutable fields of an [`Employee`], as sent by clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeBody {
    #[validate(length(min = 1, message = "First name must not be empty."))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name must not be empty."))]
    pub last_name: String,
    #[validate(email(message = "Email must be formatted."))]
    pub email: String,
    pub speciality: Speciality,
    #[serde(rename = "project", default)]
    pub project_id: Option<i64>,
}
