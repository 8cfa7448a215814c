use assetdesk_domain::id::{DepartmentId, UserId};
use assetdesk_domain::role::Role;

use crate::domain::policy::can_manage_users;
use crate::domain::repository::{CredentialHasher, Record, Store};
use crate::domain::types::{Department, NewUser, User};
use crate::error::InventoryError;
use crate::usecase::context::CallerContext;
use crate::usecase::link::resolve_department;
use crate::usecase::listing::{Listing, list_in_scope};

pub struct UserInput {
    pub username: String,
    pub email: String,
    pub enabled: bool,
    pub role: Role,
    pub department_id: Option<DepartmentId>,
    /// Raw password. Required on create; on update an empty value keeps the stored hash.
    pub password: Option<String>,
}

pub struct UserService<U, D, C>
where
    U: Store<User>,
    D: Store<Department>,
    C: CredentialHasher,
{
    pub users: U,
    pub departments: D,
    pub hasher: C,
}

impl<U, D, C> UserService<U, D, C>
where
    U: Store<User>,
    D: Store<Department>,
    C: CredentialHasher,
{
    /// Super admins see every user (or one department on request); everyone
    /// else sees their own department, and anonymous callers see nothing.
    pub async fn list(
        &self,
        caller: &CallerContext,
        requested: Option<DepartmentId>,
    ) -> Result<Listing<User>, InventoryError> {
        Ok(list_in_scope(&self.users, caller.identified_list_scope(requested)).await)
    }

    pub async fn get(&self, id: UserId) -> Result<User, InventoryError> {
        self.users
            .get(id)
            .await?
            .ok_or_else(|| InventoryError::not_found(User::KIND, id))
    }

    pub async fn create(
        &self,
        caller: &CallerContext,
        input: UserInput,
    ) -> Result<User, InventoryError> {
        caller.require(can_manage_users, "create user")?;
        let password = input
            .password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| InventoryError::validation("password", "must not be empty"))?;
        let department = resolve_department(&self.departments, input.department_id).await?;
        let password_hash = self.hasher.hash(password)?;
        let created = self
            .users
            .insert(NewUser {
                username: input.username,
                email: input.email,
                enabled: input.enabled,
                role: input.role,
                department_id: department.map(|d| d.id),
                password_hash,
            })
            .await?;
        tracing::info!(user_id = %created.id, role = %created.role, "user created");
        Ok(created)
    }

    pub async fn update(
        &self,
        caller: &CallerContext,
        id: UserId,
        input: UserInput,
    ) -> Result<User, InventoryError> {
        caller.require(can_manage_users, "update user")?;
        let mut user = self.get(id).await?;
        let department = resolve_department(&self.departments, input.department_id).await?;
        if let Some(password) = input.password.as_deref().filter(|p| !p.is_empty()) {
            user.password_hash = self.hasher.hash(password)?;
        }
        user.username = input.username;
        user.email = input.email;
        user.enabled = input.enabled;
        user.role = input.role;
        if let Some(department) = department {
            user.department_id = Some(department.id);
        }
        self.users.save(&user).await
    }

    /// Fails with `NotFound` when the user does not exist.
    pub async fn delete(&self, caller: &CallerContext, id: UserId) -> Result<(), InventoryError> {
        caller.require(can_manage_users, "delete user")?;
        if !self.users.exists(id).await? {
            return Err(InventoryError::not_found(User::KIND, id));
        }
        self.users.delete(id).await?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }
}
