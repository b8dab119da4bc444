//! Handle database requests.

use sqlx::SqlitePool;

use crate::employee::{Employee, EmployeeBody};
use crate::error::Result;

const COLUMNS: &str = "id, first_name, last_name, email, speciality, project_id";

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    /// Create a new [`EmployeeRepository`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every stored [`Employee`], store order.
    pub async fn find_all(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {COLUMNS} FROM employees"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    /// Find an [`Employee`] using `id` field.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {COLUMNS} FROM employees WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Insert a new [`Employee`]; the store assigns its id.
    pub async fn insert(&self, body: &EmployeeBody) -> Result<Employee> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            r#"INSERT INTO employees (first_name, last_name, email, speciality, project_id)
                VALUES (?, ?, ?, ?, ?)
                RETURNING {COLUMNS}"#
        ))
        .bind(&body.first_name)
        .bind(&body.last_name)
        .bind(&body.email)
        .bind(body.speciality)
        .bind(body.project_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Overwrite every mutable field of a stored [`Employee`].
    pub async fn update(&self, employee: &Employee) -> Result<()> {
        sqlx::query(
            r#"UPDATE employees
                SET first_name = ?, last_name = ?, email = ?, speciality = ?, project_id = ?
                WHERE id = ?"#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(employee.speciality)
        .bind(employee.project_id)
        .bind(employee.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete an [`Employee`].
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
