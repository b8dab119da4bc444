use sqlx::SqlitePool;

use crate::employee::{Employee, EmployeeBody, EmployeeRepository};
use crate::error::{Entity, Result, ServerError};

/// Employee manager.
#[derive(Clone)]
pub struct EmployeeService {
    pub repo: EmployeeRepository,
}

impl EmployeeService {
    /// Create a new [`EmployeeService`].
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: EmployeeRepository::new(pool),
        }
    }

    /// Every stored [`Employee`], store order.
    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        self.repo.find_all().await
    }

    /// Find an [`Employee`] by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Employee> {
        self.repo.find_by_id(id).await?.ok_or(ServerError::NotFound {
            kind: Entity::Employee,
            id,
        })
    }

    /// Persist a validated payload and return the stored [`Employee`].
    pub async fn create(&self, body: &EmployeeBody) -> Result<Employee> {
        self.repo.insert(body).await
    }

    /// Delete an [`Employee`] by id, confirming existence first.
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.find_by_id(id).await?;
        self.repo.delete(id).await
    }

    /// Overwrite every mutable field of the [`Employee`] matching `id`.
    pub async fn update(&self, id: i64, body: &EmployeeBody) -> Result<Employee> {
        let mut employee = self.find_by_id(id).await?;

        employee.first_name = body.first_name.clone();
        employee.last_name = body.last_name.clone();
        employee.email = body.email.clone();
        employee.speciality = body.speciality;
        employee.project_id = body.project_id;

        self.repo.update(&employee).await?;
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::SqlitePool;

    use super::*;
    use crate::employee::Speciality;

    fn body() -> EmployeeBody {
        EmployeeBody {
            first_name: "Hermione".into(),
            last_name: "Granger".into(),
            email: "hg@gmail.com".into(),
            speciality: Speciality::Security,
            project_id: None,
        }
    }

    #[sqlx::test]
    async fn test_create_assigns_id_and_keeps_fields(pool: SqlitePool) {
        let service = EmployeeService::new(pool);

        let employee = service.create(&body()).await.unwrap();
        assert!(employee.id >= 1);
        assert_eq!(employee.first_name, "Hermione");
        assert_eq!(employee.last_name, "Granger");
        assert_eq!(employee.email, "hg@gmail.com");
        assert_eq!(employee.speciality, Speciality::Security);
        assert_eq!(employee.project_id, None);
    }

    #[sqlx::test(fixtures("../../fixtures/employees.sql"))]
    async fn test_update_then_find_reflects_new_fields(pool: SqlitePool) {
        let service = EmployeeService::new(pool);

        let updated = service.update(1, &body()).await.unwrap();
        assert_eq!(updated.id, 1);

        let found = service.find_by_id(1).await.unwrap();
        assert_eq!(found, updated);
        assert_eq!(found.first_name, "Hermione");
        assert_eq!(found.speciality, Speciality::Security);
    }

    #[sqlx::test(fixtures("../../fixtures/employees.sql"))]
    async fn test_delete_then_find_is_not_found(pool: SqlitePool) {
        let service = EmployeeService::new(pool);

        service.delete_by_id(1).await.unwrap();
        let err = service.find_by_id(1).await.unwrap_err();
        assert_eq!(err.to_string(), "Employee with id: 1 could not be found!");
    }

    #[sqlx::test]
    async fn test_unknown_id_carries_id_in_message(pool: SqlitePool) {
        let service = EmployeeService::new(pool);

        let err = service.delete_by_id(5).await.unwrap_err();
        assert_eq!(err.to_string(), "Employee with id: 5 could not be found!");

        let err = service.update(5, &body()).await.unwrap_err();
        assert_eq!(err.to_string(), "Employee with id: 5 could not be found!");
    }
}
