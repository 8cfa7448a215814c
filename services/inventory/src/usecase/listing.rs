use crate::domain::policy::Scope;
use crate::domain::repository::{Record, Store};
use crate::error::InventoryError;

/// Outcome of a scoped list query.
///
/// List views never fail on store trouble: an unexpected store error is
/// logged and reported as `Degraded`, which renders as an empty list.
/// Policy failures (`Forbidden`) are still returned as errors by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Rows(Vec<T>),
    Degraded,
}

impl<T> Listing<T> {
    pub fn into_rows(self) -> Vec<T> {
        match self {
            Self::Rows(rows) => rows,
            Self::Degraded => Vec::new(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        match self {
            Self::Rows(rows) => Listing::Rows(rows.into_iter().map(f).collect()),
            Self::Degraded => Listing::Degraded,
        }
    }
}

/// Run the store query that matches `scope`.
pub async fn list_in_scope<T, S>(store: &S, scope: Scope) -> Listing<T>
where
    T: Record,
    S: Store<T>,
{
    let result = match scope {
        Scope::Empty => return Listing::Rows(Vec::new()),
        Scope::All => store.get_all().await,
        Scope::Department(id) => store.get_by_department(id).await,
    };
    degrade(T::KIND, result)
}

/// Convert a store result into a listing, logging failures.
pub fn degrade<T>(
    entity: crate::domain::types::EntityKind,
    result: Result<Vec<T>, InventoryError>,
) -> Listing<T> {
    match result {
        Ok(rows) => Listing::Rows(rows),
        Err(e) => {
            tracing::warn!(%entity, error = %e, "list query failed, returning empty list");
            Listing::Degraded
        }
    }
}
