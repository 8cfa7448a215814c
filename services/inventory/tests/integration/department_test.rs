use assetdesk_domain::id::DepartmentId;
use assetdesk_domain::role::Role;
use assetdesk_inventory::domain::policy::AnonymousListAccess;
use assetdesk_inventory::error::InventoryError;
use assetdesk_inventory::usecase::department::DepartmentInput;

use crate::helpers::{World, department, user};

fn input(name: &str, active: bool) -> DepartmentInput {
    DepartmentInput {
        name: name.to_owned(),
        description: Some("ops".to_owned()),
        active,
    }
}

fn world() -> World {
    let world = World::new();
    world.users.put(user(1, Role::SuperAdmin, None));
    world.users.put(user(2, Role::Admin, Some(7)));
    world.users.put(user(3, Role::User, Some(7)));
    world
}

#[tokio::test]
async fn should_let_super_admin_create_department() {
    let world = world();
    let root = world.caller(1).await;

    let created = world
        .department_service()
        .create(&root, input("Networking", true))
        .await
        .unwrap();

    assert_eq!(created.name, "Networking");
    assert_eq!(world.departments.row(created.id), Some(created));
}

#[tokio::test]
async fn should_forbid_department_mutation_without_touching_store() {
    let world = world();
    world.departments.put(department(7));

    for caller_id in [2, 3, 99] {
        let ctx = world.caller(caller_id).await;
        let service = world.department_service();

        let create = service.create(&ctx, input("x", true)).await;
        assert!(
            matches!(create, Err(InventoryError::Forbidden { .. })),
            "expected Forbidden for caller {caller_id}, got {create:?}"
        );
        let update = service.update(&ctx, DepartmentId(7), input("x", true)).await;
        assert!(matches!(update, Err(InventoryError::Forbidden { .. })));
        let delete = service.delete(&ctx, DepartmentId(7)).await;
        assert!(matches!(delete, Err(InventoryError::Forbidden { .. })));
    }

    let anonymous = world.anonymous(AnonymousListAccess::Unrestricted);
    let create = world
        .department_service()
        .create(&anonymous, input("x", true))
        .await;
    assert!(matches!(create, Err(InventoryError::Forbidden { .. })));

    assert_eq!(world.departments.writes(), 0);
    assert_eq!(world.departments.row(DepartmentId(7)), Some(department(7)));
}

#[tokio::test]
async fn should_forbid_department_reads_for_admin() {
    let world = world();
    world.departments.put(department(7));
    let admin = world.caller(2).await;

    let list = world.department_service().list(&admin).await;
    assert!(matches!(list, Err(InventoryError::Forbidden { .. })));
    let get = world.department_service().get(&admin, DepartmentId(7)).await;
    assert!(matches!(get, Err(InventoryError::Forbidden { .. })));
}

#[tokio::test]
async fn should_list_only_active_departments() {
    let world = world();
    world.departments.put(department(7));
    let mut retired = department(8);
    retired.active = false;
    world.departments.put(retired);
    let root = world.caller(1).await;

    let all = world.department_service().list(&root).await.unwrap();
    assert_eq!(all.into_rows().len(), 2);

    let active = world
        .department_service()
        .list_active(&root)
        .await
        .unwrap()
        .into_rows();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, DepartmentId(7));
}

#[tokio::test]
async fn should_degrade_department_list_on_store_failure() {
    let world = world();
    let root = world.caller(1).await;
    world.departments.fail();

    let listing = world.department_service().list(&root).await.unwrap();
    assert!(listing.is_degraded());
    assert!(listing.into_rows().is_empty());
}

#[tokio::test]
async fn should_update_department_fields() {
    let world = world();
    world.departments.put(department(7));
    let root = world.caller(1).await;

    let updated = world
        .department_service()
        .update(&root, DepartmentId(7), input("Renamed", false))
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(!updated.active);
    assert_eq!(updated.description.as_deref(), Some("ops"));
}

#[tokio::test]
async fn should_return_not_found_for_missing_department() {
    let world = world();
    let root = world.caller(1).await;

    let get = world.department_service().get(&root, DepartmentId(42)).await;
    assert!(matches!(get, Err(InventoryError::NotFound { id: 42, .. })));
    let update = world
        .department_service()
        .update(&root, DepartmentId(42), input("x", true))
        .await;
    assert!(matches!(update, Err(InventoryError::NotFound { id: 42, .. })));
}

#[tokio::test]
async fn should_delete_department_idempotently() {
    let world = world();
    world.departments.put(department(7));
    let root = world.caller(1).await;
    let service = world.department_service();

    service.delete(&root, DepartmentId(7)).await.unwrap();
    service.delete(&root, DepartmentId(7)).await.unwrap();

    assert_eq!(world.departments.len(), 0);
}
