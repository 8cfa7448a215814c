use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use assetdesk_domain::id::{DepartmentId, HardwareId, SiteId, TaskId, UserId, VmId};
use assetdesk_domain::role::Role;

use crate::domain::repository::{Child, Record};

/// The six resource types managed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Department,
    Site,
    Hardware,
    VirtualMachine,
    DeploymentTask,
    User,
}

impl EntityKind {
    /// Payload field that carries a reference to this entity.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Department => "departmentId",
            Self::Site => "siteId",
            Self::Hardware => "hardwareId",
            Self::VirtualMachine => "vmId",
            Self::DeploymentTask => "taskId",
            Self::User => "requestedById",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Department => "department",
            Self::Site => "site",
            Self::Hardware => "hardware",
            Self::VirtualMachine => "virtual machine",
            Self::DeploymentTask => "deployment task",
            Self::User => "user",
        })
    }
}

/// Returned when a stored enum column holds an unknown value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

// Status/type enums are stored as their SCREAMING_SNAKE_CASE names.
macro_rules! stored_enum {
    (
        $(#[$meta:meta])* $name:ident, $label:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $label,
                        value: other.to_owned(),
                    }),
                }
            }
        }
    };
}

stored_enum!(
    /// Kind of physical asset.
    HardwareType, "hardware type" {
        Server => "SERVER",
        Storage => "STORAGE",
        Network => "NETWORK",
    }
);

stored_enum!(
    /// Operational state of a hardware asset.
    #[derive(Default)]
    HardwareStatus, "hardware status" {
        #[default]
        Operational => "OPERATIONAL",
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Maintenance => "MAINTENANCE",
    }
);

stored_enum!(
    /// Power state of a virtual machine.
    #[derive(Default)]
    VmStatus, "vm status" {
        Running => "RUNNING",
        #[default]
        Stopped => "STOPPED",
        Suspended => "SUSPENDED",
    }
);

stored_enum!(
    /// Progress of a deployment task.
    #[derive(Default)]
    DeploymentStatus, "deployment status" {
        #[default]
        Pending => "PENDING",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Failed => "FAILED",
    }
);

// ── Department ───────────────────────────────────────────────────────────────

/// Root scoping unit; every other resource belongs to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

impl Record for Department {
    type Id = DepartmentId;
    type New = NewDepartment;
    const KIND: EntityKind = EntityKind::Department;

    fn id(&self) -> DepartmentId {
        self.id
    }

    // A department is its own scope.
    fn department_id(&self) -> Option<DepartmentId> {
        Some(self.id)
    }

    fn from_new(id: DepartmentId, new: NewDepartment) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            active: new.active,
        }
    }
}

// ── User ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub enabled: bool,
    pub role: Role,
    /// `None` only for bootstrap and super-admin accounts.
    pub department_id: Option<DepartmentId>,
    /// Opaque hash produced by a `CredentialHasher`.
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub enabled: bool,
    pub role: Role,
    pub department_id: Option<DepartmentId>,
    pub password_hash: String,
}

impl Record for User {
    type Id = UserId;
    type New = NewUser;
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> UserId {
        self.id
    }

    fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }

    fn from_new(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            email: new.email,
            enabled: new.enabled,
            role: new.role,
            department_id: new.department_id,
            password_hash: new.password_hash,
        }
    }
}

// ── Site ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub department_id: Option<DepartmentId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSite {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub department_id: Option<DepartmentId>,
}

impl Record for Site {
    type Id = SiteId;
    type New = NewSite;
    const KIND: EntityKind = EntityKind::Site;

    fn id(&self) -> SiteId {
        self.id
    }

    fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }

    fn from_new(id: SiteId, new: NewSite) -> Self {
        Self {
            id,
            name: new.name,
            address: new.address,
            city: new.city,
            country: new.country,
            department_id: new.department_id,
        }
    }
}

// ── Hardware ─────────────────────────────────────────────────────────────────

/// Descriptive and capacity fields of a hardware asset, replaced wholesale on update.
#[derive(Debug, Clone, PartialEq)]
pub struct HardwareSpec {
    pub name: String,
    pub hardware_type: HardwareType,
    pub model: String,
    pub serial_number: String,
    pub ip_address: Option<String>,
    pub cpu_cores: Option<i32>,
    pub ram_gb: Option<i32>,
    pub storage_gb: Option<i32>,
    pub status: HardwareStatus,
    pub purchase_date: NaiveDate,
    pub warranty_end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hardware {
    pub id: HardwareId,
    pub spec: HardwareSpec,
    pub site_id: SiteId,
    /// Denormalized from the site unless set explicitly.
    pub department_id: Option<DepartmentId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewHardware {
    pub spec: HardwareSpec,
    pub site_id: SiteId,
    pub department_id: Option<DepartmentId>,
}

impl Record for Hardware {
    type Id = HardwareId;
    type New = NewHardware;
    const KIND: EntityKind = EntityKind::Hardware;

    fn id(&self) -> HardwareId {
        self.id
    }

    fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }

    fn from_new(id: HardwareId, new: NewHardware) -> Self {
        Self {
            id,
            spec: new.spec,
            site_id: new.site_id,
            department_id: new.department_id,
        }
    }
}

impl Child for Hardware {
    type Parent = Site;

    fn parent_id(&self) -> SiteId {
        self.site_id
    }

    fn set_department_id(&mut self, department_id: Option<DepartmentId>) {
        self.department_id = department_id;
    }
}

// ── VirtualMachine ───────────────────────────────────────────────────────────

/// Descriptive and capacity fields of a VM, replaced wholesale on update.
#[derive(Debug, Clone, PartialEq)]
pub struct VmSpec {
    pub name: String,
    pub hostname: String,
    pub ip_address: Option<String>,
    pub operating_system: String,
    pub vcpu: i32,
    pub vram: i32,
    pub disk_size: i32,
    pub status: VmStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VirtualMachine {
    pub id: VmId,
    pub spec: VmSpec,
    pub hardware_id: HardwareId,
    /// Denormalized from the hardware unless set explicitly.
    pub department_id: Option<DepartmentId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVirtualMachine {
    pub spec: VmSpec,
    pub hardware_id: HardwareId,
    pub department_id: Option<DepartmentId>,
}

impl Record for VirtualMachine {
    type Id = VmId;
    type New = NewVirtualMachine;
    const KIND: EntityKind = EntityKind::VirtualMachine;

    fn id(&self) -> VmId {
        self.id
    }

    fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }

    fn from_new(id: VmId, new: NewVirtualMachine) -> Self {
        Self {
            id,
            spec: new.spec,
            hardware_id: new.hardware_id,
            department_id: new.department_id,
        }
    }
}

impl Child for VirtualMachine {
    type Parent = Hardware;

    fn parent_id(&self) -> HardwareId {
        self.hardware_id
    }

    fn set_department_id(&mut self, department_id: Option<DepartmentId>) {
        self.department_id = department_id;
    }
}

// ── DeploymentTask ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentTask {
    pub id: TaskId,
    pub task_name: Option<String>,
    pub description: Option<String>,
    pub vm_id: VmId,
    pub requested_by: UserId,
    pub status: DeploymentStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Inherited from the VM unless set explicitly.
    pub department_id: Option<DepartmentId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDeploymentTask {
    pub task_name: Option<String>,
    pub description: Option<String>,
    pub vm_id: VmId,
    pub requested_by: UserId,
    pub status: DeploymentStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub department_id: Option<DepartmentId>,
}

impl Record for DeploymentTask {
    type Id = TaskId;
    type New = NewDeploymentTask;
    const KIND: EntityKind = EntityKind::DeploymentTask;

    fn id(&self) -> TaskId {
        self.id
    }

    fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }

    fn from_new(id: TaskId, new: NewDeploymentTask) -> Self {
        Self {
            id,
            task_name: new.task_name,
            description: new.description,
            vm_id: new.vm_id,
            requested_by: new.requested_by,
            status: new.status,
            created_at: new.created_at,
            completed_at: new.completed_at,
            scheduled_date: new.scheduled_date,
            department_id: new.department_id,
        }
    }
}

impl Child for DeploymentTask {
    type Parent = VirtualMachine;

    fn parent_id(&self) -> VmId {
        self.vm_id
    }

    fn set_department_id(&mut self, department_id: Option<DepartmentId>) {
        self.department_id = department_id;
    }
}
