use assetdesk_domain::id::{DepartmentId, UserId};
use assetdesk_domain::role::Role;

use crate::domain::policy::{self, AnonymousListAccess, Scope};
use crate::domain::repository::Store;
use crate::domain::types::User;
use crate::error::InventoryError;

/// Role and department of a caller whose id resolved to a stored user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResolvedCaller {
    role: Role,
    department_id: Option<DepartmentId>,
}

/// Who is calling, resolved once per request and passed explicitly to every
/// use case.
///
/// Every answer is fail-closed: a caller id that cannot be resolved gets the
/// least-privileged answer (not admin, no department) instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerContext {
    caller_id: Option<UserId>,
    resolved: Option<ResolvedCaller>,
    anonymous_access: AnonymousListAccess,
}

impl CallerContext {
    /// Look up the caller. Store failures and unknown ids are logged and
    /// downgraded, never propagated.
    pub async fn resolve<U: Store<User>>(
        users: &U,
        caller_id: Option<UserId>,
        anonymous_access: AnonymousListAccess,
    ) -> Self {
        let Some(id) = caller_id else {
            return Self::anonymous(anonymous_access);
        };
        let resolved = match users.get(id).await {
            Ok(Some(user)) => Some(ResolvedCaller {
                role: user.role,
                department_id: user.department_id,
            }),
            Ok(None) => {
                tracing::warn!(caller_id = %id, "caller not found, treating as unprivileged");
                None
            }
            Err(e) => {
                tracing::warn!(caller_id = %id, error = %e, "caller lookup failed, treating as unprivileged");
                None
            }
        };
        Self {
            caller_id: Some(id),
            resolved,
            anonymous_access,
        }
    }

    pub fn anonymous(anonymous_access: AnonymousListAccess) -> Self {
        Self {
            caller_id: None,
            resolved: None,
            anonymous_access,
        }
    }

    pub fn caller_id(&self) -> Option<UserId> {
        self.caller_id
    }

    /// No caller id was supplied at all.
    pub fn is_anonymous(&self) -> bool {
        self.caller_id.is_none()
    }

    pub fn role(&self) -> Option<Role> {
        self.resolved.map(|c| c.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|role| role >= Role::Admin)
    }

    pub fn is_super_admin(&self) -> bool {
        self.role() == Some(Role::SuperAdmin)
    }

    pub fn current_department_id(&self) -> Option<DepartmentId> {
        self.resolved.and_then(|c| c.department_id)
    }

    /// List scope for resources whose lists honor the anonymous-access policy.
    pub fn list_scope(&self, requested: Option<DepartmentId>) -> Scope {
        if self.is_anonymous() {
            return policy::anonymous_list_scope(self.anonymous_access, requested);
        }
        self.identified_list_scope(requested)
    }

    /// List scope that never grants anything to anonymous callers.
    pub fn identified_list_scope(&self, requested: Option<DepartmentId>) -> Scope {
        match self.resolved {
            Some(caller) => policy::list_scope(caller.role, requested, caller.department_id),
            None => Scope::Empty,
        }
    }

    /// Fail with `Forbidden` unless the caller's role passes `allowed`.
    pub fn require(
        &self,
        allowed: fn(Role) -> bool,
        action: &'static str,
    ) -> Result<(), InventoryError> {
        match self.role() {
            Some(role) if allowed(role) => Ok(()),
            _ => {
                tracing::debug!(caller_id = ?self.caller_id, action, "role check failed");
                Err(InventoryError::Forbidden { action })
            }
        }
    }
}
