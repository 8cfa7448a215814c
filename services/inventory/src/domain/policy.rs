//! Access policy: pure decisions over roles and departments. No I/O.

use serde::Deserialize;

use assetdesk_domain::id::DepartmentId;
use assetdesk_domain::role::Role;

/// Which departments a list query may return rows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Department(DepartmentId),
    /// Nothing is visible; the list is empty, not an error.
    Empty,
}

/// How list endpoints treat requests that carry no caller id at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnonymousListAccess {
    /// Scope anonymous requests like a super admin. Matches the historical
    /// behaviour of the site, hardware, VM and deployment-task lists.
    #[default]
    Unrestricted,
    /// Anonymous requests see nothing.
    Denied,
}

pub fn can_manage_departments(role: Role) -> bool {
    role == Role::SuperAdmin
}

pub fn can_manage_users(role: Role) -> bool {
    role == Role::SuperAdmin
}

/// Decide the list scope for an identified caller.
///
/// Only super admins may choose a department; everyone else is pinned to
/// their own department and the requested filter is ignored.
pub fn list_scope(
    role: Role,
    requested: Option<DepartmentId>,
    caller_department: Option<DepartmentId>,
) -> Scope {
    if role == Role::SuperAdmin {
        return requested.map_or(Scope::All, Scope::Department);
    }
    caller_department.map_or(Scope::Empty, Scope::Department)
}

/// Decide the list scope for a request without a caller id.
pub fn anonymous_list_scope(access: AnonymousListAccess, requested: Option<DepartmentId>) -> Scope {
    match access {
        AnonymousListAccess::Unrestricted => list_scope(Role::SuperAdmin, requested, None),
        AnonymousListAccess::Denied => Scope::Empty,
    }
}
