//! Handle database requests.

use sqlx::SqlitePool;

use crate::employee::Employee;
use crate::error::Result;
use crate::project::{Project, ProjectBody};

const COLUMNS: &str = "id, company_name, project_name";

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    /// Create a new [`ProjectRepository`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every stored [`Project`], store order, employee lists not attached.
    pub async fn find_all(&self) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(&format!(
            "SELECT {COLUMNS} FROM projects"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    /// Find a [`Project`] using `id` field.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(&format!(
            "SELECT {COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    /// Explicit fetch of the employees assigned to a project.
    pub async fn find_employees(&self, project_id: i64) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"SELECT id, first_name, last_name, email, speciality, project_id
                FROM employees WHERE project_id = ?"#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    /// Insert a new [`Project`]; the store assigns its id.
    pub async fn insert(&self, body: &ProjectBody) -> Result<Project> {
        let project = sqlx::query_as::<_, Project>(&format!(
            r#"INSERT INTO projects (company_name, project_name)
                VALUES (?, ?)
                RETURNING {COLUMNS}"#
        ))
        .bind(&body.company_name)
        .bind(&body.project_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    /// Overwrite every mutable field of a stored [`Project`].
    pub async fn update(&self, project: &Project) -> Result<()> {
        sqlx::query(
            "UPDATE projects SET company_name = ?, project_name = ? WHERE id = ?",
        )
        .bind(&project.company_name)
        .bind(&project.project_name)
        .bind(project.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a [`Project`]; assigned employees are unlinked by the store.
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
