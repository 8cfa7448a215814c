use assetdesk_domain::id::{DepartmentId, SiteId};

use crate::domain::repository::{ChildStore, Record, Store};
use crate::domain::types::{Department, DeploymentTask, Hardware, NewSite, Site, VirtualMachine};
use crate::error::InventoryError;
use crate::usecase::cascade;
use crate::usecase::context::CallerContext;
use crate::usecase::link::resolve_department;
use crate::usecase::listing::{Listing, list_in_scope};

pub struct SiteInput {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub department_id: Option<DepartmentId>,
}

/// Site CRUD. The hardware, VM and task stores are written only to carry a
/// department move down to the site's descendants.
pub struct SiteService<S, D, H, V, T>
where
    S: Store<Site>,
    D: Store<Department>,
    H: ChildStore<Hardware>,
    V: ChildStore<VirtualMachine>,
    T: ChildStore<DeploymentTask>,
{
    pub sites: S,
    pub departments: D,
    pub hardware: H,
    pub vms: V,
    pub tasks: T,
}

impl<S, D, H, V, T> SiteService<S, D, H, V, T>
where
    S: Store<Site>,
    D: Store<Department>,
    H: ChildStore<Hardware>,
    V: ChildStore<VirtualMachine>,
    T: ChildStore<DeploymentTask>,
{
    pub async fn list(
        &self,
        caller: &CallerContext,
        requested: Option<DepartmentId>,
    ) -> Result<Listing<Site>, InventoryError> {
        Ok(list_in_scope(&self.sites, caller.list_scope(requested)).await)
    }

    pub async fn get(&self, id: SiteId) -> Result<Site, InventoryError> {
        self.sites
            .get(id)
            .await?
            .ok_or_else(|| InventoryError::not_found(Site::KIND, id))
    }

    pub async fn create(&self, input: SiteInput) -> Result<Site, InventoryError> {
        let department = resolve_department(&self.departments, input.department_id).await?;
        self.sites
            .insert(NewSite {
                name: input.name,
                address: input.address,
                city: input.city,
                country: input.country,
                department_id: department.map(|d| d.id),
            })
            .await
    }

    /// Replaces the descriptive fields; the department changes only when one is
    /// supplied, and the site's hardware, VMs and tasks follow it.
    pub async fn update(&self, id: SiteId, input: SiteInput) -> Result<Site, InventoryError> {
        let mut site = self.get(id).await?;
        let department = resolve_department(&self.departments, input.department_id).await?;
        site.name = input.name;
        site.address = input.address;
        site.city = input.city;
        site.country = input.country;
        if let Some(department) = department {
            site.department_id = Some(department.id);
        }
        let saved = self.sites.save(&site).await?;
        if let Some(department_id) = saved.department_id {
            cascade::site_moved(&self.hardware, &self.vms, &self.tasks, saved.id, department_id)
                .await?;
        }
        Ok(saved)
    }

    /// Fails with `NotFound` when the site does not exist.
    pub async fn delete(&self, id: SiteId) -> Result<(), InventoryError> {
        if !self.sites.exists(id).await? {
            return Err(InventoryError::not_found(Site::KIND, id));
        }
        self.sites.delete(id).await
    }
}
