use std::sync::Arc;

use models::Employee;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::employee::views::{EmployeeDetails, EmployeeInput, EmployeeShort};
use crate::errors::ServiceError;
use crate::repository::Repository;

/// Application service for employee records.
/// Validates input, assigns identifiers and shapes short/full projections;
/// storage semantics stay in the repository.
pub struct EmployeeService<R: Repository<Employee> + ?Sized> {
    repo: Arc<R>,
}

impl<R: Repository<Employee> + ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<EmployeeShort>, ServiceError> {
        let all = self.repo.list().await?;
        debug!(count = all.len(), "list employees");
        Ok(all.iter().map(EmployeeShort::from).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<EmployeeDetails, ServiceError> {
        self.find(id).await.map(|e| EmployeeDetails::from(&e))
    }

    pub async fn get_short(&self, id: Uuid) -> Result<EmployeeShort, ServiceError> {
        self.find(id).await.map(|e| EmployeeShort::from(&e))
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: EmployeeInput) -> Result<EmployeeShort, ServiceError> {
        input.validate()?;
        let employee = Employee {
            id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            roles: Vec::new(),
            applied_promocodes_count: input.applied_promocodes_count,
        };
        let created = self.repo.create(employee).await?;
        info!(id = %created.id, "employee_created");
        Ok(EmployeeShort::from(&created))
    }

    /// Overwrites the editable fields; id and roles are preserved.
    #[instrument(skip(self, input), fields(id = %id))]
    pub async fn update(&self, id: Uuid, input: EmployeeInput) -> Result<EmployeeDetails, ServiceError> {
        input.validate()?;
        let mut employee = self.find(id).await?;
        employee.email = input.email;
        employee.first_name = input.first_name;
        employee.last_name = input.last_name;
        employee.applied_promocodes_count = input.applied_promocodes_count;

        // Removed between the read above and this write.
        if !self.repo.update(employee.clone()).await? {
            return Err(ServiceError::not_found("employee"));
        }
        info!("employee_updated");
        Ok(EmployeeDetails::from(&employee))
    }

    /// Idempotent; reports whether anything was removed.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let removed = self.repo.delete(id).await?;
        info!(removed, "employee_deleted");
        Ok(removed)
    }

    async fn find(&self, id: Uuid) -> Result<Employee, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("employee"))
    }
}
