use assetdesk_domain::id::{DepartmentId, HardwareId, SiteId};

use crate::domain::repository::{ChildStore, Record, Store};
use crate::domain::types::{
    Department, DeploymentTask, Hardware, HardwareSpec, NewHardware, Site, VirtualMachine,
};
use crate::error::InventoryError;
use crate::usecase::cascade;
use crate::usecase::context::CallerContext;
use crate::usecase::link::{owning_department, resolve_department, resolve_optional, resolve_site};
use crate::usecase::listing::{Listing, list_in_scope};

pub struct HardwareInput {
    pub spec: HardwareSpec,
    pub site_id: Option<SiteId>,
    pub department_id: Option<DepartmentId>,
}

pub struct HardwareService<H, S, D, V, T>
where
    H: Store<Hardware>,
    S: Store<Site>,
    D: Store<Department>,
    V: ChildStore<VirtualMachine>,
    T: ChildStore<DeploymentTask>,
{
    pub hardware: H,
    pub sites: S,
    pub departments: D,
    pub vms: V,
    pub tasks: T,
}

impl<H, S, D, V, T> HardwareService<H, S, D, V, T>
where
    H: Store<Hardware>,
    S: Store<Site>,
    D: Store<Department>,
    V: ChildStore<VirtualMachine>,
    T: ChildStore<DeploymentTask>,
{
    pub async fn list(
        &self,
        caller: &CallerContext,
        requested: Option<DepartmentId>,
    ) -> Result<Listing<Hardware>, InventoryError> {
        Ok(list_in_scope(&self.hardware, caller.list_scope(requested)).await)
    }

    pub async fn get(&self, id: HardwareId) -> Result<Hardware, InventoryError> {
        self.hardware
            .get(id)
            .await?
            .ok_or_else(|| InventoryError::not_found(Hardware::KIND, id))
    }

    /// The site is mandatory; the department defaults to the site's.
    pub async fn create(&self, input: HardwareInput) -> Result<Hardware, InventoryError> {
        let site = resolve_site(&self.sites, input.site_id).await?;
        let explicit = resolve_department(&self.departments, input.department_id).await?;
        let department_id = owning_department(explicit.as_ref(), site.department_id, None)?;
        let created = self
            .hardware
            .insert(NewHardware {
                spec: input.spec,
                site_id: site.id,
                department_id,
            })
            .await?;
        tracing::info!(hardware_id = %created.id, site_id = %site.id, "hardware created");
        Ok(created)
    }

    /// Replaces the whole spec. Site and department move only when supplied,
    /// and the department is re-derived from whichever site the row ends up on.
    /// VMs on the host and their tasks follow the department.
    pub async fn update(
        &self,
        id: HardwareId,
        input: HardwareInput,
    ) -> Result<Hardware, InventoryError> {
        let mut hardware = self.get(id).await?;
        let new_site: Option<Site> = resolve_optional(&self.sites, input.site_id).await?;
        let explicit = resolve_department(&self.departments, input.department_id).await?;
        let site = match new_site {
            Some(site) => Some(site),
            None => self.sites.get(hardware.site_id).await?,
        };
        let parent = site.as_ref().and_then(|s| s.department_id);
        hardware.department_id =
            owning_department(explicit.as_ref(), parent, hardware.department_id)?;
        if let Some(site) = site {
            hardware.site_id = site.id;
        }
        hardware.spec = input.spec;
        let saved = self.hardware.save(&hardware).await?;
        if let Some(department_id) = saved.department_id {
            cascade::hardware_moved(&self.vms, &self.tasks, saved.id, department_id).await?;
        }
        Ok(saved)
    }

    /// Idempotent: deleting missing hardware succeeds.
    pub async fn delete(&self, id: HardwareId) -> Result<(), InventoryError> {
        self.hardware.delete(id).await
    }
}
