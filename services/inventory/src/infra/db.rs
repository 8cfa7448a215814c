use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use assetdesk_domain::id::DepartmentId;
use assetdesk_inventory_schema::{
    departments, deployment_tasks, hardware, sites, users, virtual_machines,
};

use crate::domain::repository::{
    Child, ChildStore, DepartmentStore, Record, Store, UserStore,
};
use crate::domain::types::{
    Department, DeploymentTask, Hardware, HardwareSpec, Site, User, VirtualMachine, VmSpec,
};
use crate::error::InventoryError;

// Every table has the same shape of access: by id, by department, full
// overwrite on save. The macro wires one schema module to one record type
// through its `*_from_model` and `*_to_active` mappers.
macro_rules! db_store {
    (
        $(#[$meta:meta])*
        $store:ident, $record:ty, $schema:ident,
        department_column = $dept_col:expr,
        from_model = $from_model:path,
        to_active = $to_active:path,
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $store {
            pub db: DatabaseConnection,
        }

        impl Store<$record> for $store {
            async fn get(
                &self,
                id: <$record as Record>::Id,
            ) -> Result<Option<$record>, InventoryError> {
                let model = $schema::Entity::find_by_id(i64::from(id))
                    .one(&self.db)
                    .await
                    .with_context(|| format!("find {} {id}", <$record>::KIND))?;
                Ok(model.map($from_model).transpose()?)
            }

            async fn get_all(&self) -> Result<Vec<$record>, InventoryError> {
                let models = $schema::Entity::find()
                    .order_by_asc($schema::Column::Id)
                    .all(&self.db)
                    .await
                    .with_context(|| format!("list {}", <$record>::KIND))?;
                Ok(models
                    .into_iter()
                    .map($from_model)
                    .collect::<anyhow::Result<_>>()?)
            }

            async fn get_by_department(
                &self,
                department_id: DepartmentId,
            ) -> Result<Vec<$record>, InventoryError> {
                let models = $schema::Entity::find()
                    .filter($dept_col.eq(department_id.0))
                    .order_by_asc($schema::Column::Id)
                    .all(&self.db)
                    .await
                    .with_context(|| {
                        format!("list {} by department {department_id}", <$record>::KIND)
                    })?;
                Ok(models
                    .into_iter()
                    .map($from_model)
                    .collect::<anyhow::Result<_>>()?)
            }

            async fn insert(
                &self,
                new: <$record as Record>::New,
            ) -> Result<$record, InventoryError> {
                // Placeholder id; the column is left unset so the database assigns it.
                let draft = <$record>::from_new(<$record as Record>::Id::from(0), new);
                let mut active = $to_active(&draft);
                active.id = NotSet;
                let model = active
                    .insert(&self.db)
                    .await
                    .with_context(|| format!("insert {}", <$record>::KIND))?;
                Ok($from_model(model)?)
            }

            async fn save(&self, record: &$record) -> Result<$record, InventoryError> {
                let model = $to_active(record)
                    .update(&self.db)
                    .await
                    .with_context(|| format!("update {} {}", <$record>::KIND, record.id()))?;
                Ok($from_model(model)?)
            }

            async fn delete(&self, id: <$record as Record>::Id) -> Result<(), InventoryError> {
                $schema::Entity::delete_by_id(i64::from(id))
                    .exec(&self.db)
                    .await
                    .with_context(|| format!("delete {} {id}", <$record>::KIND))?;
                Ok(())
            }

            async fn exists(&self, id: <$record as Record>::Id) -> Result<bool, InventoryError> {
                let count = $schema::Entity::find_by_id(i64::from(id))
                    .count(&self.db)
                    .await
                    .with_context(|| format!("check {} {id}", <$record>::KIND))?;
                Ok(count > 0)
            }
        }
    };
}

// Children are looked up through their parent's foreign key column.
macro_rules! child_store {
    ($store:ident, $record:ty, $schema:ident, parent_column = $parent_col:expr, from_model = $from_model:path $(,)?) => {
        impl ChildStore<$record> for $store {
            async fn get_by_parent(
                &self,
                parent_id: <<$record as Child>::Parent as Record>::Id,
            ) -> Result<Vec<$record>, InventoryError> {
                let models = $schema::Entity::find()
                    .filter($parent_col.eq(i64::from(parent_id)))
                    .order_by_asc($schema::Column::Id)
                    .all(&self.db)
                    .await
                    .with_context(|| format!("list {} of {parent_id}", <$record>::KIND))?;
                Ok(models
                    .into_iter()
                    .map($from_model)
                    .collect::<anyhow::Result<_>>()?)
            }
        }
    };
}

// ── Department store ─────────────────────────────────────────────────────────

db_store!(
    DbDepartmentStore, Department, departments,
    department_column = departments::Column::Id,
    from_model = department_from_model,
    to_active = department_to_active,
);

impl DepartmentStore for DbDepartmentStore {
    async fn get_active(&self) -> Result<Vec<Department>, InventoryError> {
        let models = departments::Entity::find()
            .filter(departments::Column::Active.eq(true))
            .order_by_asc(departments::Column::Id)
            .all(&self.db)
            .await
            .context("list active departments")?;
        Ok(models
            .into_iter()
            .map(department_from_model)
            .collect::<anyhow::Result<_>>()?)
    }
}

fn department_from_model(model: departments::Model) -> anyhow::Result<Department> {
    Ok(Department {
        id: model.id.into(),
        name: model.name,
        description: model.description,
        active: model.active,
    })
}

fn department_to_active(department: &Department) -> departments::ActiveModel {
    departments::ActiveModel {
        id: Set(department.id.0),
        name: Set(department.name.clone()),
        description: Set(department.description.clone()),
        active: Set(department.active),
    }
}

// ── User store ───────────────────────────────────────────────────────────────

db_store!(
    DbUserStore, User, users,
    department_column = users::Column::DepartmentId,
    from_model = user_from_model,
    to_active = user_to_active,
);

impl UserStore for DbUserStore {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, InventoryError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .with_context(|| format!("find user by username {username}"))?;
        Ok(model.map(user_from_model).transpose()?)
    }
}

fn user_from_model(model: users::Model) -> anyhow::Result<User> {
    Ok(User {
        id: model.id.into(),
        username: model.username,
        email: model.email,
        enabled: model.enabled,
        role: model.role.parse()?,
        department_id: model.department_id.map(DepartmentId),
        password_hash: model.password_hash,
    })
}

fn user_to_active(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(user.id.0),
        username: Set(user.username.clone()),
        email: Set(user.email.clone()),
        enabled: Set(user.enabled),
        role: Set(user.role.as_str().to_owned()),
        department_id: Set(user.department_id.map(i64::from)),
        password_hash: Set(user.password_hash.clone()),
    }
}

// ── Site store ───────────────────────────────────────────────────────────────

db_store!(
    DbSiteStore, Site, sites,
    department_column = sites::Column::DepartmentId,
    from_model = site_from_model,
    to_active = site_to_active,
);

fn site_from_model(model: sites::Model) -> anyhow::Result<Site> {
    Ok(Site {
        id: model.id.into(),
        name: model.name,
        address: model.address,
        city: model.city,
        country: model.country,
        department_id: model.department_id.map(DepartmentId),
    })
}

fn site_to_active(site: &Site) -> sites::ActiveModel {
    sites::ActiveModel {
        id: Set(site.id.0),
        name: Set(site.name.clone()),
        address: Set(site.address.clone()),
        city: Set(site.city.clone()),
        country: Set(site.country.clone()),
        department_id: Set(site.department_id.map(i64::from)),
    }
}

// ── Hardware store ───────────────────────────────────────────────────────────

db_store!(
    DbHardwareStore, Hardware, hardware,
    department_column = hardware::Column::DepartmentId,
    from_model = hardware_from_model,
    to_active = hardware_to_active,
);

child_store!(
    DbHardwareStore, Hardware, hardware,
    parent_column = hardware::Column::SiteId,
    from_model = hardware_from_model,
);

fn hardware_from_model(model: hardware::Model) -> anyhow::Result<Hardware> {
    Ok(Hardware {
        id: model.id.into(),
        spec: HardwareSpec {
            name: model.name,
            hardware_type: model.hardware_type.parse()?,
            model: model.model,
            serial_number: model.serial_number,
            ip_address: model.ip_address,
            cpu_cores: model.cpu_cores,
            ram_gb: model.ram_gb,
            storage_gb: model.storage_gb,
            status: model.status.parse()?,
            purchase_date: model.purchase_date,
            warranty_end_date: model.warranty_end_date,
        },
        site_id: model.site_id.into(),
        department_id: model.department_id.map(DepartmentId),
    })
}

fn hardware_to_active(hw: &Hardware) -> hardware::ActiveModel {
    let spec = &hw.spec;
    hardware::ActiveModel {
        id: Set(hw.id.0),
        name: Set(spec.name.clone()),
        hardware_type: Set(spec.hardware_type.as_str().to_owned()),
        model: Set(spec.model.clone()),
        serial_number: Set(spec.serial_number.clone()),
        ip_address: Set(spec.ip_address.clone()),
        cpu_cores: Set(spec.cpu_cores),
        ram_gb: Set(spec.ram_gb),
        storage_gb: Set(spec.storage_gb),
        status: Set(spec.status.as_str().to_owned()),
        purchase_date: Set(spec.purchase_date),
        warranty_end_date: Set(spec.warranty_end_date),
        site_id: Set(hw.site_id.0),
        department_id: Set(hw.department_id.map(i64::from)),
    }
}

// ── VirtualMachine store ─────────────────────────────────────────────────────

db_store!(
    DbVirtualMachineStore, VirtualMachine, virtual_machines,
    department_column = virtual_machines::Column::DepartmentId,
    from_model = vm_from_model,
    to_active = vm_to_active,
);

child_store!(
    DbVirtualMachineStore, VirtualMachine, virtual_machines,
    parent_column = virtual_machines::Column::HardwareId,
    from_model = vm_from_model,
);

fn vm_from_model(model: virtual_machines::Model) -> anyhow::Result<VirtualMachine> {
    Ok(VirtualMachine {
        id: model.id.into(),
        spec: VmSpec {
            name: model.name,
            hostname: model.hostname,
            ip_address: model.ip_address,
            operating_system: model.operating_system,
            vcpu: model.vcpu,
            vram: model.vram,
            disk_size: model.disk_size,
            status: model.status.parse()?,
        },
        hardware_id: model.hardware_id.into(),
        department_id: model.department_id.map(DepartmentId),
    })
}

fn vm_to_active(vm: &VirtualMachine) -> virtual_machines::ActiveModel {
    let spec = &vm.spec;
    virtual_machines::ActiveModel {
        id: Set(vm.id.0),
        name: Set(spec.name.clone()),
        hostname: Set(spec.hostname.clone()),
        ip_address: Set(spec.ip_address.clone()),
        operating_system: Set(spec.operating_system.clone()),
        vcpu: Set(spec.vcpu),
        vram: Set(spec.vram),
        disk_size: Set(spec.disk_size),
        status: Set(spec.status.as_str().to_owned()),
        hardware_id: Set(vm.hardware_id.0),
        department_id: Set(vm.department_id.map(i64::from)),
    }
}

// ── DeploymentTask store ─────────────────────────────────────────────────────

db_store!(
    DbDeploymentTaskStore, DeploymentTask, deployment_tasks,
    department_column = deployment_tasks::Column::DepartmentId,
    from_model = task_from_model,
    to_active = task_to_active,
);

child_store!(
    DbDeploymentTaskStore, DeploymentTask, deployment_tasks,
    parent_column = deployment_tasks::Column::VmId,
    from_model = task_from_model,
);

fn task_from_model(model: deployment_tasks::Model) -> anyhow::Result<DeploymentTask> {
    Ok(DeploymentTask {
        id: model.id.into(),
        task_name: model.task_name,
        description: model.description,
        vm_id: model.vm_id.into(),
        requested_by: model.requested_by_id.into(),
        status: model.status.parse()?,
        created_at: model.created_at,
        completed_at: model.completed_at,
        scheduled_date: model.scheduled_date,
        department_id: model.department_id.map(DepartmentId),
    })
}

fn task_to_active(task: &DeploymentTask) -> deployment_tasks::ActiveModel {
    deployment_tasks::ActiveModel {
        id: Set(task.id.0),
        task_name: Set(task.task_name.clone()),
        description: Set(task.description.clone()),
        vm_id: Set(task.vm_id.0),
        requested_by_id: Set(task.requested_by.0),
        status: Set(task.status.as_str().to_owned()),
        created_at: Set(task.created_at),
        completed_at: Set(task.completed_at),
        scheduled_date: Set(task.scheduled_date),
        department_id: Set(task.department_id.map(i64::from)),
    }
}
