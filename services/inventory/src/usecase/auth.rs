use assetdesk_domain::id::UserId;

use crate::domain::repository::{CredentialHasher, Record, Store, UserStore};
use crate::domain::types::{Department, User};
use crate::error::InventoryError;

const INVALID_CREDENTIALS: &str = "invalid username or password";

/// A user together with the department it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user: User,
    /// `None` for users without a department, or when the row has gone.
    pub department: Option<Department>,
}

/// Password login and caller lookup. No session or token is issued; clients
/// send the returned user id as `x-user-id`.
pub struct AuthService<U, D, C>
where
    U: UserStore,
    D: Store<Department>,
    C: CredentialHasher,
{
    pub users: U,
    pub departments: D,
    pub hasher: C,
}

impl<U, D, C> AuthService<U, D, C>
where
    U: UserStore,
    D: Store<Department>,
    C: CredentialHasher,
{
    /// Unknown usernames and wrong passwords fail the same way. A disabled
    /// account is reported only once its password has been verified.
    pub async fn login(&self, username: &str, password: &str) -> Result<Profile, InventoryError> {
        let Some(user) = self.users.get_by_username(username).await? else {
            tracing::info!(username, "login rejected: unknown username");
            return Err(InventoryError::Unauthorized {
                reason: INVALID_CREDENTIALS,
            });
        };
        if password.is_empty() || !self.hasher.verify(password, &user.password_hash)? {
            tracing::info!(user_id = %user.id, "login rejected: wrong password");
            return Err(InventoryError::Unauthorized {
                reason: INVALID_CREDENTIALS,
            });
        }
        if !user.enabled {
            tracing::info!(user_id = %user.id, "login rejected: account disabled");
            return Err(InventoryError::Unauthorized {
                reason: "account is disabled",
            });
        }
        tracing::info!(user_id = %user.id, "login succeeded");
        self.profile(user).await
    }

    /// Profile of the user named by the caller's `x-user-id`.
    pub async fn me(&self, caller_id: Option<UserId>) -> Result<Profile, InventoryError> {
        let id = caller_id.ok_or(InventoryError::Unauthorized {
            reason: "caller identity required",
        })?;
        let user = self
            .users
            .get(id)
            .await?
            .ok_or_else(|| InventoryError::not_found(User::KIND, id))?;
        self.profile(user).await
    }

    async fn profile(&self, user: User) -> Result<Profile, InventoryError> {
        let department = match user.department_id {
            Some(id) => self.departments.get(id).await?,
            None => None,
        };
        Ok(Profile { user, department })
    }
}
