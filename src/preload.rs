//! Demo data inserted on an empty store.

use crate::AppState;
use crate::employee::{EmployeeBody, Speciality};
use crate::error::Result;
use crate::project::ProjectBody;

/// Seed the canonical demo company, unless employees already exist.
pub async fn run(state: &AppState) -> Result<()> {
    if !state.employees.list_all().await?.is_empty() {
        return Ok(());
    }

    let homepage = state
        .projects
        .create(&ProjectBody {
            company_name: "Software GmbH".into(),
            project_name: "HomePage".into(),
        })
        .await?;
    let login = state
        .projects
        .create(&ProjectBody {
            company_name: "Bank GmbH".into(),
            project_name: "LoginPage".into(),
        })
        .await?;
    tracing::info!(id = homepage.id, "preloading {}", homepage.project_name);
    tracing::info!(id = login.id, "preloading {}", login.project_name);

    let demo = [
        ("Harry", "Potter", "hp@gmail.com", Speciality::Frontend, Some(homepage.id)),
        ("Peter", "Parker", "pp@gmail.com", Speciality::Backend, Some(homepage.id)),
        ("Mary", "Jane", "mj@gmail.com", Speciality::Devops, Some(homepage.id)),
        ("Tony", "Stark", "ts@gmail.com", Speciality::Security, None),
        ("Andrew", "Garfield", "ag@gmail.com", Speciality::Cloud, Some(login.id)),
        ("Tom", "Santos", "tsantos@gmail.com", Speciality::Devops, Some(login.id)),
    ];

    for (first_name, last_name, email, speciality, project_id) in demo {
        let employee = state
            .employees
            .create(&EmployeeBody {
                first_name: first_name.into(),
                last_name: last_name.into(),
                email: email.into(),
                speciality,
                project_id,
            })
            .await?;
        tracing::info!(
            id = employee.id,
            "preloading {} {}",
            employee.first_name,
            employee.last_name
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use sqlx::SqlitePool;

    use crate::router;

    #[sqlx::test]
    async fn test_run_is_idempotent(pool: SqlitePool) {
        let state = router::state(pool);

        super::run(&state).await.unwrap();
        super::run(&state).await.unwrap();

        let employees = state.employees.list_all().await.unwrap();
        assert_eq!(employees.len(), 6);

        let projects = state.projects.list_all().await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].employee_list.len(), 3);
        assert_eq!(projects[1].employee_list.len(), 2);
    }

    #[sqlx::test(fixtures("../fixtures/employees.sql"))]
    async fn test_run_skips_a_populated_store(pool: SqlitePool) {
        let state = router::state(pool);

        super::run(&state).await.unwrap();

        let employees = state.employees.list_all().await.unwrap();
        assert_eq!(employees.len(), 2);
    }
}
