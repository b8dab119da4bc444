mod repository;
mod service;

pub use repository::*;
pub use service::*;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::employee::Employee;

/// Project as saved on database.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow,
)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub company_name: String,
    pub project_name: String,
    /// Employees assigned to this project. Derived, never written back.
    #[sqlx(skip)]
    #[serde(default)]
    pub employee_list: Vec<Employee>,
}

/// Mutable fields of a [`Project`], as sent by clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBody {
    #[validate(length(min = 1, message = "Company name must not be empty."))]
    pub company_name: String,
    #[validate(length(min = 1, message = "Project name must not be empty."))]
    pub project_name: String,
}
