//! Entity linking: turn id-shaped foreign keys from a payload into stored rows.
//!
//! Every resolver runs before the owning entity is written, so a failed
//! lookup never leaves a partially linked row behind.

use assetdesk_domain::id::{DepartmentId, HardwareId, SiteId, UserId, VmId};

use crate::domain::repository::{Record, Store};
use crate::domain::types::{Department, Hardware, Site, User, VirtualMachine};
use crate::error::InventoryError;

/// `None` means "no department"; a given id must exist.
pub async fn resolve_department<D: Store<Department>>(
    departments: &D,
    id: Option<DepartmentId>,
) -> Result<Option<Department>, InventoryError> {
    let Some(id) = id else {
        return Ok(None);
    };
    departments
        .get(id)
        .await?
        .map(Some)
        .ok_or_else(|| InventoryError::not_found(Department::KIND, id))
}

pub async fn resolve_site<S: Store<Site>>(
    sites: &S,
    id: Option<SiteId>,
) -> Result<Site, InventoryError> {
    resolve_required(sites, id).await
}

pub async fn resolve_hardware<H: Store<Hardware>>(
    hardware: &H,
    id: Option<HardwareId>,
) -> Result<Hardware, InventoryError> {
    resolve_required(hardware, id).await
}

pub async fn resolve_vm<V: Store<VirtualMachine>>(
    vms: &V,
    id: Option<VmId>,
) -> Result<VirtualMachine, InventoryError> {
    resolve_required(vms, id).await
}

pub async fn resolve_user<U: Store<User>>(
    users: &U,
    id: Option<UserId>,
) -> Result<User, InventoryError> {
    resolve_required(users, id).await
}

/// Resolve a reference only when the payload carries one.
pub async fn resolve_optional<T, S>(store: &S, id: Option<T::Id>) -> Result<Option<T>, InventoryError>
where
    T: Record,
    S: Store<T>,
{
    match id {
        Some(id) => resolve_required(store, Some(id)).await.map(Some),
        None => Ok(None),
    }
}

async fn resolve_required<T, S>(store: &S, id: Option<T::Id>) -> Result<T, InventoryError>
where
    T: Record,
    S: Store<T>,
{
    let id = id.ok_or_else(|| InventoryError::bad_reference(T::KIND, None::<i64>))?;
    store
        .get(id)
        .await?
        .ok_or_else(|| InventoryError::bad_reference(T::KIND, Some(id)))
}

/// Pick the owning department of a child row.
///
/// An explicit department wins but must agree with the parent's department
/// when the parent has one; otherwise the parent's department is inherited,
/// falling back to `current` (the value already stored, on update).
pub fn owning_department(
    explicit: Option<&Department>,
    parent: Option<DepartmentId>,
    current: Option<DepartmentId>,
) -> Result<Option<DepartmentId>, InventoryError> {
    match (explicit, parent) {
        (Some(dept), Some(parent)) if dept.id != parent => Err(InventoryError::validation(
            "departmentId",
            format!("department {} does not match parent department {parent}", dept.id),
        )),
        (Some(dept), _) => Ok(Some(dept.id)),
        (None, Some(parent)) => Ok(Some(parent)),
        (None, None) => Ok(current),
    }
}
