//! Keeps denormalized departments in step when a parent row moves.
//!
//! Hardware carries its site's department, VMs their host's and tasks their
//! VM's. Moving a parent rewrites the department on every descendant that
//! disagrees. Writes are single-row and not transactional; rerunning the
//! parent's update finishes an interrupted cascade.

use assetdesk_domain::id::{DepartmentId, HardwareId, SiteId, VmId};

use crate::domain::repository::{Child, ChildStore, Record};
use crate::domain::types::{DeploymentTask, Hardware, VirtualMachine};
use crate::error::InventoryError;

pub async fn site_moved<H, V, T>(
    hardware: &H,
    vms: &V,
    tasks: &T,
    site_id: SiteId,
    department_id: DepartmentId,
) -> Result<(), InventoryError>
where
    H: ChildStore<Hardware>,
    V: ChildStore<VirtualMachine>,
    T: ChildStore<DeploymentTask>,
{
    for row in hardware.get_by_parent(site_id).await? {
        let id = row.id;
        follow(hardware, row, department_id).await?;
        hardware_moved(vms, tasks, id, department_id).await?;
    }
    Ok(())
}

pub async fn hardware_moved<V, T>(
    vms: &V,
    tasks: &T,
    hardware_id: HardwareId,
    department_id: DepartmentId,
) -> Result<(), InventoryError>
where
    V: ChildStore<VirtualMachine>,
    T: ChildStore<DeploymentTask>,
{
    for vm in vms.get_by_parent(hardware_id).await? {
        let id = vm.id;
        follow(vms, vm, department_id).await?;
        vm_moved(tasks, id, department_id).await?;
    }
    Ok(())
}

pub async fn vm_moved<T>(
    tasks: &T,
    vm_id: VmId,
    department_id: DepartmentId,
) -> Result<(), InventoryError>
where
    T: ChildStore<DeploymentTask>,
{
    for task in tasks.get_by_parent(vm_id).await? {
        follow(tasks, task, department_id).await?;
    }
    Ok(())
}

/// Save `row` under `department_id` unless it is already there.
async fn follow<R, S>(store: &S, mut row: R, department_id: DepartmentId) -> Result<(), InventoryError>
where
    R: Child,
    S: ChildStore<R>,
{
    let from = row.department_id();
    if from == Some(department_id) {
        return Ok(());
    }
    row.set_department_id(Some(department_id));
    store.save(&row).await?;
    tracing::info!(
        kind = %R::KIND,
        id = %row.id(),
        parent_id = %row.parent_id(),
        from = ?from,
        to = %department_id,
        "department reassigned with parent"
    );
    Ok(())
}
