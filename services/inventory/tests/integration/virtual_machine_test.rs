use assetdesk_domain::id::{DepartmentId, HardwareId, TaskId, VmId};
use assetdesk_domain::role::Role;
use assetdesk_inventory::domain::types::{EntityKind, VmStatus};
use assetdesk_inventory::error::InventoryError;
use assetdesk_inventory::usecase::virtual_machine::VirtualMachineInput;

use crate::helpers::{World, department, hardware, site, task, user, vm, vm_spec};

fn input(hardware: Option<i64>, department: Option<i64>) -> VirtualMachineInput {
    VirtualMachineInput {
        spec: vm_spec("app-01"),
        hardware_id: hardware.map(HardwareId),
        department_id: department.map(DepartmentId),
    }
}

fn world() -> World {
    let world = World::new();
    world.departments.put(department(7));
    world.departments.put(department(9));
    world.sites.put(site(1, Some(7)));
    world.sites.put(site(2, Some(9)));
    world.hardware.put(hardware(10, 1, Some(7)));
    world.hardware.put(hardware(20, 2, Some(9)));
    world
}

#[tokio::test]
async fn should_reject_unknown_hardware_then_create_exactly_one_on_retry() {
    let world = world();
    let service = world.vm_service();

    let result = service.create(input(Some(999), None)).await;
    assert!(
        matches!(
            result,
            Err(InventoryError::BadReference {
                entity: EntityKind::Hardware,
                id: Some(999)
            })
        ),
        "expected BadReference(Hardware), got {result:?}"
    );
    assert_eq!(world.vms.len(), 0);
    assert_eq!(world.vms.writes(), 0);

    let created = service.create(input(Some(10), None)).await.unwrap();
    assert_eq!(world.vms.len(), 1);
    assert_eq!(created.hardware_id, HardwareId(10));
    assert_eq!(created.department_id, Some(DepartmentId(7)));
}

#[tokio::test]
async fn should_require_hardware() {
    let world = world();

    let result = world.vm_service().create(input(None, Some(7))).await;

    assert!(matches!(
        result,
        Err(InventoryError::BadReference {
            entity: EntityKind::Hardware,
            id: None
        })
    ));
}

#[tokio::test]
async fn should_reject_department_that_contradicts_hardware() {
    let world = world();

    let result = world.vm_service().create(input(Some(10), Some(9))).await;

    assert!(matches!(
        result,
        Err(InventoryError::Validation {
            field: "departmentId",
            ..
        })
    ));
    assert_eq!(world.vms.len(), 0);
}

#[tokio::test]
async fn should_keep_omitted_status_at_default() {
    let world = world();
    let mut payload = input(Some(20), None);
    payload.spec.status = VmStatus::default();

    let created = world.vm_service().create(payload).await.unwrap();

    assert_eq!(created.spec.status, VmStatus::Stopped);
    assert_eq!(created.department_id, Some(DepartmentId(9)));
}

#[tokio::test]
async fn should_move_vm_to_new_host_and_its_department() {
    let world = world();
    world.vms.put(vm(5, 10, Some(7)));

    let updated = world
        .vm_service()
        .update(VmId(5), input(Some(20), None))
        .await
        .unwrap();

    assert_eq!(updated.hardware_id, HardwareId(20));
    assert_eq!(updated.department_id, Some(DepartmentId(9)));
    assert_eq!(updated.spec.name, "app-01");
}

#[tokio::test]
async fn should_move_tasks_with_vm_to_new_department() {
    let world = world();
    world.vms.put(vm(5, 10, Some(7)));
    world.vms.put(vm(6, 10, Some(7)));
    world.tasks.put(task(1, 5, 3, Some(7)));
    world.tasks.put(task(2, 6, 3, Some(7)));

    world
        .vm_service()
        .update(VmId(5), input(Some(20), None))
        .await
        .unwrap();

    assert_eq!(
        world.tasks.row(TaskId(1)).unwrap().department_id,
        Some(DepartmentId(9))
    );
    assert_eq!(
        world.tasks.row(TaskId(2)).unwrap().department_id,
        Some(DepartmentId(7))
    );
}

#[tokio::test]
async fn should_keep_host_when_update_omits_it() {
    let world = world();
    world.vms.put(vm(5, 10, Some(7)));

    let updated = world
        .vm_service()
        .update(VmId(5), input(None, None))
        .await
        .unwrap();

    assert_eq!(updated.hardware_id, HardwareId(10));
    assert_eq!(updated.department_id, Some(DepartmentId(7)));
}

#[tokio::test]
async fn should_scope_vm_list_by_caller_department() {
    let world = world();
    world.vms.put(vm(5, 10, Some(7)));
    world.vms.put(vm(6, 20, Some(9)));
    world.users.put(user(3, Role::User, Some(7)));
    world.users.put(user(1, Role::SuperAdmin, None));

    let member = world.caller(3).await;
    let rows = world
        .vm_service()
        .list(&member, Some(DepartmentId(9)))
        .await
        .unwrap()
        .into_rows();
    assert_eq!(rows.iter().map(|v| v.id).collect::<Vec<_>>(), vec![VmId(5)]);

    let root = world.caller(1).await;
    let rows = world
        .vm_service()
        .list(&root, Some(DepartmentId(9)))
        .await
        .unwrap()
        .into_rows();
    assert_eq!(rows.iter().map(|v| v.id).collect::<Vec<_>>(), vec![VmId(6)]);
}

#[tokio::test]
async fn should_delete_vm_idempotently() {
    let world = world();
    world.vms.put(vm(5, 10, Some(7)));

    world.vm_service().delete(VmId(5)).await.unwrap();
    world.vm_service().delete(VmId(5)).await.unwrap();

    assert_eq!(world.vms.len(), 0);
}
