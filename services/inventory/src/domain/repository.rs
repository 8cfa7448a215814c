#![allow(async_fn_in_trait)]

use std::fmt;

use assetdesk_domain::id::DepartmentId;

use crate::domain::types::{Department, EntityKind, User};
use crate::error::InventoryError;

/// A persisted row with a database-assigned id.
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Ord + fmt::Debug + fmt::Display + Into<i64> + From<i64> + Send + Sync;
    /// The row's fields before an id has been assigned.
    type New: Send + Sync;
    const KIND: EntityKind;

    fn id(&self) -> Self::Id;

    /// Department the row is scoped to, if any.
    fn department_id(&self) -> Option<DepartmentId>;

    /// Materialize a new row once the store has assigned its id.
    fn from_new(id: Self::Id, new: Self::New) -> Self;
}

/// Persistence for one record type.
///
/// Single-row writes are atomic; there are no multi-row transactions.
pub trait Store<T: Record>: Send + Sync {
    async fn get(&self, id: T::Id) -> Result<Option<T>, InventoryError>;

    async fn get_all(&self) -> Result<Vec<T>, InventoryError>;

    async fn get_by_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<T>, InventoryError>;

    /// First save: insert and return the row with its assigned id.
    async fn insert(&self, new: T::New) -> Result<T, InventoryError>;

    /// Overwrite every column of an existing row.
    async fn save(&self, record: &T) -> Result<T, InventoryError>;

    /// Hard delete. Deleting a missing id is not an error.
    async fn delete(&self, id: T::Id) -> Result<(), InventoryError>;

    async fn exists(&self, id: T::Id) -> Result<bool, InventoryError>;
}

/// A record that hangs off a parent row and shares its department.
pub trait Child: Record {
    type Parent: Record;

    fn parent_id(&self) -> <Self::Parent as Record>::Id;

    fn set_department_id(&mut self, department_id: Option<DepartmentId>);
}

/// Lookup of the rows attached to one parent.
pub trait ChildStore<T: Child>: Store<T> {
    async fn get_by_parent(
        &self,
        parent_id: <T::Parent as Record>::Id,
    ) -> Result<Vec<T>, InventoryError>;
}

pub trait DepartmentStore: Store<Department> {
    async fn get_active(&self) -> Result<Vec<Department>, InventoryError>;
}

pub trait UserStore: Store<User> {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, InventoryError>;
}

/// Turns a raw password into an opaque stored credential and checks
/// candidates against it.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, raw: &str) -> Result<String, InventoryError>;

    /// `Ok(false)` for a wrong password; `Err` only when `stored` is unreadable.
    fn verify(&self, raw: &str, stored: &str) -> Result<bool, InventoryError>;
}
