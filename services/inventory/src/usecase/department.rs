use assetdesk_domain::id::DepartmentId;

use crate::domain::policy::can_manage_departments;
use crate::domain::repository::{DepartmentStore, Record, Store};
use crate::domain::types::{Department, NewDepartment};
use crate::error::InventoryError;
use crate::usecase::context::CallerContext;
use crate::usecase::listing::{Listing, degrade};

pub struct DepartmentInput {
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

/// Department CRUD. Every operation, reads included, is super-admin only.
pub struct DepartmentService<D: DepartmentStore> {
    pub departments: D,
}

impl<D: DepartmentStore> DepartmentService<D> {
    pub async fn list(&self, caller: &CallerContext) -> Result<Listing<Department>, InventoryError> {
        caller.require(can_manage_departments, "list departments")?;
        Ok(degrade(Department::KIND, self.departments.get_all().await))
    }

    pub async fn list_active(
        &self,
        caller: &CallerContext,
    ) -> Result<Listing<Department>, InventoryError> {
        caller.require(can_manage_departments, "list departments")?;
        Ok(degrade(Department::KIND, self.departments.get_active().await))
    }

    pub async fn get(
        &self,
        caller: &CallerContext,
        id: DepartmentId,
    ) -> Result<Department, InventoryError> {
        caller.require(can_manage_departments, "view department")?;
        self.departments
            .get(id)
            .await?
            .ok_or_else(|| InventoryError::not_found(Department::KIND, id))
    }

    pub async fn create(
        &self,
        caller: &CallerContext,
        input: DepartmentInput,
    ) -> Result<Department, InventoryError> {
        caller.require(can_manage_departments, "create department")?;
        let created = self
            .departments
            .insert(NewDepartment {
                name: input.name,
                description: input.description,
                active: input.active,
            })
            .await?;
        tracing::info!(department_id = %created.id, "department created");
        Ok(created)
    }

    pub async fn update(
        &self,
        caller: &CallerContext,
        id: DepartmentId,
        input: DepartmentInput,
    ) -> Result<Department, InventoryError> {
        caller.require(can_manage_departments, "update department")?;
        let mut department = self
            .departments
            .get(id)
            .await?
            .ok_or_else(|| InventoryError::not_found(Department::KIND, id))?;
        department.name = input.name;
        department.description = input.description;
        department.active = input.active;
        self.departments.save(&department).await
    }

    /// Idempotent: deleting a missing department succeeds.
    pub async fn delete(
        &self,
        caller: &CallerContext,
        id: DepartmentId,
    ) -> Result<(), InventoryError> {
        caller.require(can_manage_departments, "delete department")?;
        self.departments.delete(id).await?;
        tracing::info!(department_id = %id, "department deleted");
        Ok(())
    }
}
