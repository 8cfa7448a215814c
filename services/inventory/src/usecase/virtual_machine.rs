use assetdesk_domain::id::{DepartmentId, HardwareId, VmId};

use crate::domain::repository::{ChildStore, Record, Store};
use crate::domain::types::{
    Department, DeploymentTask, Hardware, NewVirtualMachine, VirtualMachine, VmSpec,
};
use crate::error::InventoryError;
use crate::usecase::cascade;
use crate::usecase::context::CallerContext;
use crate::usecase::link::{
    owning_department, resolve_department, resolve_hardware, resolve_optional,
};
use crate::usecase::listing::{Listing, list_in_scope};

pub struct VirtualMachineInput {
    pub spec: VmSpec,
    pub hardware_id: Option<HardwareId>,
    pub department_id: Option<DepartmentId>,
}

pub struct VirtualMachineService<V, H, D, T>
where
    V: Store<VirtualMachine>,
    H: Store<Hardware>,
    D: Store<Department>,
    T: ChildStore<DeploymentTask>,
{
    pub vms: V,
    pub hardware: H,
    pub departments: D,
    pub tasks: T,
}

impl<V, H, D, T> VirtualMachineService<V, H, D, T>
where
    V: Store<VirtualMachine>,
    H: Store<Hardware>,
    D: Store<Department>,
    T: ChildStore<DeploymentTask>,
{
    pub async fn list(
        &self,
        caller: &CallerContext,
        requested: Option<DepartmentId>,
    ) -> Result<Listing<VirtualMachine>, InventoryError> {
        Ok(list_in_scope(&self.vms, caller.list_scope(requested)).await)
    }

    pub async fn get(&self, id: VmId) -> Result<VirtualMachine, InventoryError> {
        self.vms
            .get(id)
            .await?
            .ok_or_else(|| InventoryError::not_found(VirtualMachine::KIND, id))
    }

    /// The host is mandatory; the department defaults to the host's.
    pub async fn create(
        &self,
        input: VirtualMachineInput,
    ) -> Result<VirtualMachine, InventoryError> {
        let host = resolve_hardware(&self.hardware, input.hardware_id).await?;
        let explicit = resolve_department(&self.departments, input.department_id).await?;
        let department_id = owning_department(explicit.as_ref(), host.department_id, None)?;
        let created = self
            .vms
            .insert(NewVirtualMachine {
                spec: input.spec,
                hardware_id: host.id,
                department_id,
            })
            .await?;
        tracing::info!(vm_id = %created.id, hardware_id = %host.id, "virtual machine created");
        Ok(created)
    }

    /// Replaces the whole spec. Host and department move only when supplied;
    /// the VM's tasks follow the department.
    pub async fn update(
        &self,
        id: VmId,
        input: VirtualMachineInput,
    ) -> Result<VirtualMachine, InventoryError> {
        let mut vm = self.get(id).await?;
        let new_host: Option<Hardware> = resolve_optional(&self.hardware, input.hardware_id).await?;
        let explicit = resolve_department(&self.departments, input.department_id).await?;
        let host = match new_host {
            Some(host) => Some(host),
            None => self.hardware.get(vm.hardware_id).await?,
        };
        let parent = host.as_ref().and_then(|h| h.department_id);
        vm.department_id = owning_department(explicit.as_ref(), parent, vm.department_id)?;
        if let Some(host) = host {
            vm.hardware_id = host.id;
        }
        vm.spec = input.spec;
        let saved = self.vms.save(&vm).await?;
        if let Some(department_id) = saved.department_id {
            cascade::vm_moved(&self.tasks, saved.id, department_id).await?;
        }
        Ok(saved)
    }

    /// Idempotent: deleting a missing VM succeeds.
    pub async fn delete(&self, id: VmId) -> Result<(), InventoryError> {
        self.vms.delete(id).await
    }
}
