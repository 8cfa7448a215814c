use sea_orm::DatabaseConnection;

use assetdesk_core::health::ReadinessProbe;

use crate::domain::policy::AnonymousListAccess;
use crate::infra::credential::Argon2CredentialHasher;
use crate::infra::db::{
    DbDepartmentStore, DbDeploymentTaskStore, DbHardwareStore, DbSiteStore, DbUserStore,
    DbVirtualMachineStore,
};
use crate::usecase::auth::AuthService;
use crate::usecase::department::DepartmentService;
use crate::usecase::deployment_task::DeploymentTaskService;
use crate::usecase::hardware::HardwareService;
use crate::usecase::site::SiteService;
use crate::usecase::user::UserService;
use crate::usecase::virtual_machine::VirtualMachineService;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub anonymous_access: AnonymousListAccess,
}

impl AppState {
    pub fn department_store(&self) -> DbDepartmentStore {
        DbDepartmentStore {
            db: self.db.clone(),
        }
    }

    pub fn user_store(&self) -> DbUserStore {
        DbUserStore {
            db: self.db.clone(),
        }
    }

    pub fn site_store(&self) -> DbSiteStore {
        DbSiteStore {
            db: self.db.clone(),
        }
    }

    pub fn hardware_store(&self) -> DbHardwareStore {
        DbHardwareStore {
            db: self.db.clone(),
        }
    }

    pub fn vm_store(&self) -> DbVirtualMachineStore {
        DbVirtualMachineStore {
            db: self.db.clone(),
        }
    }

    pub fn task_store(&self) -> DbDeploymentTaskStore {
        DbDeploymentTaskStore {
            db: self.db.clone(),
        }
    }

    // ── Services ──

    pub fn departments(&self) -> DepartmentService<DbDepartmentStore> {
        DepartmentService {
            departments: self.department_store(),
        }
    }

    pub fn sites(
        &self,
    ) -> SiteService<
        DbSiteStore,
        DbDepartmentStore,
        DbHardwareStore,
        DbVirtualMachineStore,
        DbDeploymentTaskStore,
    > {
        SiteService {
            sites: self.site_store(),
            departments: self.department_store(),
            hardware: self.hardware_store(),
            vms: self.vm_store(),
            tasks: self.task_store(),
        }
    }

    pub fn hardware(
        &self,
    ) -> HardwareService<
        DbHardwareStore,
        DbSiteStore,
        DbDepartmentStore,
        DbVirtualMachineStore,
        DbDeploymentTaskStore,
    > {
        HardwareService {
            hardware: self.hardware_store(),
            sites: self.site_store(),
            departments: self.department_store(),
            vms: self.vm_store(),
            tasks: self.task_store(),
        }
    }

    pub fn vms(
        &self,
    ) -> VirtualMachineService<
        DbVirtualMachineStore,
        DbHardwareStore,
        DbDepartmentStore,
        DbDeploymentTaskStore,
    > {
        VirtualMachineService {
            vms: self.vm_store(),
            hardware: self.hardware_store(),
            departments: self.department_store(),
            tasks: self.task_store(),
        }
    }

    pub fn tasks(
        &self,
    ) -> DeploymentTaskService<
        DbDeploymentTaskStore,
        DbVirtualMachineStore,
        DbUserStore,
        DbDepartmentStore,
    > {
        DeploymentTaskService {
            tasks: self.task_store(),
            vms: self.vm_store(),
            users: self.user_store(),
            departments: self.department_store(),
        }
    }

    pub fn users(&self) -> UserService<DbUserStore, DbDepartmentStore, Argon2CredentialHasher> {
        UserService {
            users: self.user_store(),
            departments: self.department_store(),
            hasher: Argon2CredentialHasher,
        }
    }

    pub fn auth(&self) -> AuthService<DbUserStore, DbDepartmentStore, Argon2CredentialHasher> {
        AuthService {
            users: self.user_store(),
            departments: self.department_store(),
            hasher: Argon2CredentialHasher,
        }
    }
}

impl ReadinessProbe for AppState {
    async fn is_ready(&self) -> bool {
        self.db.ping().await.is_ok()
    }
}
