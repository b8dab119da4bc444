use sqlx::SqlitePool;

use crate::error::{Entity, Result, ServerError};
use crate::project::{Project, ProjectBody, ProjectRepository};

/// Project manager.
///
/// Owns the employee ↔ project linkage: every returned [`Project`] carries
/// its derived employee list, fetched explicitly at this boundary.
#[derive(Clone)]
pub struct ProjectService {
    pub repo: ProjectRepository,
}

impl ProjectService {
    /// Create a new [`ProjectService`].
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: ProjectRepository::new(pool),
        }
    }

    /// Every stored [`Project`] with its assigned employees, store order.
    pub async fn list_all(&self) -> Result<Vec<Project>> {
        let mut projects = self.repo.find_all().await?;
        for project in &mut projects {
            project.employee_list = self.repo.find_employees(project.id).await?;
        }

        Ok(projects)
    }

    /// Find a [`Project`] by id, with its assigned employees.
    pub async fn find_by_id(&self, id: i64) -> Result<Project> {
        let mut project =
            self.repo.find_by_id(id).await?.ok_or(ServerError::NotFound {
                kind: Entity::Project,
                id,
            })?;
        project.employee_list = self.repo.find_employees(id).await?;

        Ok(project)
    }

    /// Persist a validated payload and return the stored [`Project`].
    pub async fn create(&self, body: &ProjectBody) -> Result<Project> {
        self.repo.insert(body).await
    }

    /// Delete a [`Project`] by id, confirming existence first.
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.find_by_id(id).await?;
        self.repo.delete(id).await
    }

    /// Overwrite company and project names of the [`Project`] matching `id`.
    ///
    /// The employee list is derived and left untouched.
    pub async fn update(&self, id: i64, body: &ProjectBody) -> Result<Project> {
        let mut project = self.find_by_id(id).await?;

        project.company_name = body.company_name.clone();
        project.project_name = body.project_name.clone();

        self.repo.update(&project).await?;
        Ok(project)
    }
}
