use chrono::{DateTime, Utc};

use assetdesk_domain::id::{DepartmentId, TaskId, UserId, VmId};

use crate::domain::repository::{Record, Store};
use crate::domain::types::{
    Department, DeploymentStatus, DeploymentTask, NewDeploymentTask, User, VirtualMachine,
};
use crate::error::InventoryError;
use crate::usecase::context::CallerContext;
use crate::usecase::link::{
    owning_department, resolve_department, resolve_optional, resolve_user, resolve_vm,
};
use crate::usecase::listing::{Listing, list_in_scope};

pub struct DeploymentTaskInput {
    pub task_name: Option<String>,
    pub description: Option<String>,
    pub vm_id: Option<VmId>,
    pub requested_by: Option<UserId>,
    pub status: Option<DeploymentStatus>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub department_id: Option<DepartmentId>,
}

pub struct DeploymentTaskService<T, V, U, D>
where
    T: Store<DeploymentTask>,
    V: Store<VirtualMachine>,
    U: Store<User>,
    D: Store<Department>,
{
    pub tasks: T,
    pub vms: V,
    pub users: U,
    pub departments: D,
}

impl<T, V, U, D> DeploymentTaskService<T, V, U, D>
where
    T: Store<DeploymentTask>,
    V: Store<VirtualMachine>,
    U: Store<User>,
    D: Store<Department>,
{
    pub async fn list(
        &self,
        caller: &CallerContext,
        requested: Option<DepartmentId>,
    ) -> Result<Listing<DeploymentTask>, InventoryError> {
        Ok(list_in_scope(&self.tasks, caller.list_scope(requested)).await)
    }

    pub async fn get(&self, id: TaskId) -> Result<DeploymentTask, InventoryError> {
        self.tasks
            .get(id)
            .await?
            .ok_or_else(|| InventoryError::not_found(DeploymentTask::KIND, id))
    }

    /// VM and requester are mandatory. Status defaults to `PENDING` and
    /// `created_at` to the current time.
    pub async fn create(
        &self,
        input: DeploymentTaskInput,
    ) -> Result<DeploymentTask, InventoryError> {
        let vm = resolve_vm(&self.vms, input.vm_id).await?;
        let requester = resolve_user(&self.users, input.requested_by).await?;
        let explicit = resolve_department(&self.departments, input.department_id).await?;
        let department_id = owning_department(explicit.as_ref(), vm.department_id, None)?;
        let created = self
            .tasks
            .insert(NewDeploymentTask {
                task_name: input.task_name,
                description: input.description,
                vm_id: vm.id,
                requested_by: requester.id,
                status: input.status.unwrap_or_default(),
                created_at: input.created_at.unwrap_or_else(Utc::now),
                completed_at: input.completed_at,
                scheduled_date: input.scheduled_date,
                department_id,
            })
            .await?;
        tracing::info!(task_id = %created.id, vm_id = %vm.id, "deployment task created");
        Ok(created)
    }

    /// VM, requester, status and `created_at` change only when supplied.
    /// `completed_at` is always overwritten, so omitting it clears it.
    pub async fn update(
        &self,
        id: TaskId,
        input: DeploymentTaskInput,
    ) -> Result<DeploymentTask, InventoryError> {
        let mut task = self.get(id).await?;
        let new_vm: Option<VirtualMachine> = resolve_optional(&self.vms, input.vm_id).await?;
        let requester: Option<User> = resolve_optional(&self.users, input.requested_by).await?;
        let explicit = resolve_department(&self.departments, input.department_id).await?;
        let vm = match new_vm {
            Some(vm) => Some(vm),
            None => self.vms.get(task.vm_id).await?,
        };
        let parent = vm.as_ref().and_then(|v| v.department_id);
        task.department_id = owning_department(explicit.as_ref(), parent, task.department_id)?;
        if let Some(vm) = vm {
            task.vm_id = vm.id;
        }
        if let Some(requester) = requester {
            task.requested_by = requester.id;
        }
        if let Some(status) = input.status {
            task.status = status;
        }
        if let Some(created_at) = input.created_at {
            task.created_at = created_at;
        }
        task.task_name = input.task_name;
        task.description = input.description;
        task.completed_at = input.completed_at;
        task.scheduled_date = input.scheduled_date;
        self.tasks.save(&task).await
    }

    /// Idempotent: deleting a missing task succeeds.
    pub async fn delete(&self, id: TaskId) -> Result<(), InventoryError> {
        self.tasks.delete(id).await
    }
}
