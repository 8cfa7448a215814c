use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, TimeZone, Utc};

use assetdesk_domain::id::{DepartmentId, HardwareId, SiteId, TaskId, UserId, VmId};
use assetdesk_domain::role::Role;
use assetdesk_inventory::domain::policy::AnonymousListAccess;
use assetdesk_inventory::domain::repository::{
    Child, ChildStore, CredentialHasher, DepartmentStore, Record, Store, UserStore,
};
use assetdesk_inventory::domain::types::{
    Department, DeploymentStatus, DeploymentTask, Hardware, HardwareSpec, HardwareStatus,
    HardwareType, Site, User, VirtualMachine, VmSpec, VmStatus,
};
use assetdesk_inventory::error::InventoryError;
use assetdesk_inventory::usecase::auth::AuthService;
use assetdesk_inventory::usecase::context::CallerContext;
use assetdesk_inventory::usecase::department::DepartmentService;
use assetdesk_inventory::usecase::deployment_task::DeploymentTaskService;
use assetdesk_inventory::usecase::hardware::HardwareService;
use assetdesk_inventory::usecase::site::SiteService;
use assetdesk_inventory::usecase::user::UserService;
use assetdesk_inventory::usecase::virtual_machine::VirtualMachineService;

// ── MemoryStore ──────────────────────────────────────────────────────────────

/// In-memory `Store`. Clones share the same rows, so a test can keep a
/// handle for inspection after handing a clone to a service.
#[derive(Clone)]
pub struct MemoryStore<T: Record> {
    rows: Arc<Mutex<BTreeMap<i64, T>>>,
    next_id: Arc<AtomicI64>,
    failing: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            failing: Arc::new(AtomicBool::new(false)),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl<T: Record> MemoryStore<T> {
    /// Seed a row with a fixed id without counting it as a write.
    pub fn put(&self, row: T) -> T {
        let id: i64 = row.id().into();
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(id, row.clone());
        row
    }

    /// Make every subsequent call fail like a lost database connection.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Number of insert/save/delete calls that reached the store.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn row(&self, id: T::Id) -> Option<T> {
        self.rows.lock().unwrap().get(&id.into()).cloned()
    }

    fn check(&self) -> Result<(), InventoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("store unavailable").into());
        }
        Ok(())
    }
}

impl<T: Record> Store<T> for MemoryStore<T> {
    async fn get(&self, id: T::Id) -> Result<Option<T>, InventoryError> {
        self.check()?;
        Ok(self.row(id))
    }

    async fn get_all(&self) -> Result<Vec<T>, InventoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<T>, InventoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.department_id() == Some(department_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, new: T::New) -> Result<T, InventoryError> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = T::from_new(T::Id::from(id), new);
        self.rows.lock().unwrap().insert(id, row.clone());
        Ok(row)
    }

    async fn save(&self, record: &T) -> Result<T, InventoryError> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .insert(record.id().into(), record.clone());
        Ok(record.clone())
    }

    async fn delete(&self, id: T::Id) -> Result<(), InventoryError> {
        self.check()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().remove(&id.into());
        Ok(())
    }

    async fn exists(&self, id: T::Id) -> Result<bool, InventoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().contains_key(&id.into()))
    }
}

impl<T: Child> ChildStore<T> for MemoryStore<T> {
    async fn get_by_parent(
        &self,
        parent_id: <T::Parent as Record>::Id,
    ) -> Result<Vec<T>, InventoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.parent_id() == parent_id)
            .cloned()
            .collect())
    }
}

impl DepartmentStore for MemoryStore<Department> {
    async fn get_active(&self) -> Result<Vec<Department>, InventoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|d| d.active)
            .cloned()
            .collect())
    }
}

impl UserStore for MemoryStore<User> {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, InventoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

// ── PlainHasher ──────────────────────────────────────────────────────────────

/// Deterministic hasher so tests can assert on the stored credential.
#[derive(Clone, Copy)]
pub struct PlainHasher;

impl CredentialHasher for PlainHasher {
    fn hash(&self, raw: &str) -> Result<String, InventoryError> {
        Ok(format!("hashed:{raw}"))
    }

    fn verify(&self, raw: &str, stored: &str) -> Result<bool, InventoryError> {
        Ok(stored == format!("hashed:{raw}"))
    }
}

// ── World ────────────────────────────────────────────────────────────────────

/// One store per record type, wired into services on demand.
#[derive(Clone, Default)]
pub struct World {
    pub departments: MemoryStore<Department>,
    pub users: MemoryStore<User>,
    pub sites: MemoryStore<Site>,
    pub hardware: MemoryStore<Hardware>,
    pub vms: MemoryStore<VirtualMachine>,
    pub tasks: MemoryStore<DeploymentTask>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a caller id the way a request would.
    pub async fn caller(&self, id: i64) -> CallerContext {
        CallerContext::resolve(&self.users, Some(UserId(id)), AnonymousListAccess::Unrestricted)
            .await
    }

    pub fn anonymous(&self, access: AnonymousListAccess) -> CallerContext {
        CallerContext::anonymous(access)
    }

    pub fn department_service(&self) -> DepartmentService<MemoryStore<Department>> {
        DepartmentService {
            departments: self.departments.clone(),
        }
    }

    pub fn site_service(
        &self,
    ) -> SiteService<
        MemoryStore<Site>,
        MemoryStore<Department>,
        MemoryStore<Hardware>,
        MemoryStore<VirtualMachine>,
        MemoryStore<DeploymentTask>,
    > {
        SiteService {
            sites: self.sites.clone(),
            departments: self.departments.clone(),
            hardware: self.hardware.clone(),
            vms: self.vms.clone(),
            tasks: self.tasks.clone(),
        }
    }

    pub fn hardware_service(
        &self,
    ) -> HardwareService<
        MemoryStore<Hardware>,
        MemoryStore<Site>,
        MemoryStore<Department>,
        MemoryStore<VirtualMachine>,
        MemoryStore<DeploymentTask>,
    > {
        HardwareService {
            hardware: self.hardware.clone(),
            sites: self.sites.clone(),
            departments: self.departments.clone(),
            vms: self.vms.clone(),
            tasks: self.tasks.clone(),
        }
    }

    pub fn vm_service(
        &self,
    ) -> VirtualMachineService<
        MemoryStore<VirtualMachine>,
        MemoryStore<Hardware>,
        MemoryStore<Department>,
        MemoryStore<DeploymentTask>,
    > {
        VirtualMachineService {
            vms: self.vms.clone(),
            hardware: self.hardware.clone(),
            departments: self.departments.clone(),
            tasks: self.tasks.clone(),
        }
    }

    pub fn task_service(
        &self,
    ) -> DeploymentTaskService<
        MemoryStore<DeploymentTask>,
        MemoryStore<VirtualMachine>,
        MemoryStore<User>,
        MemoryStore<Department>,
    > {
        DeploymentTaskService {
            tasks: self.tasks.clone(),
            vms: self.vms.clone(),
            users: self.users.clone(),
            departments: self.departments.clone(),
        }
    }

    pub fn user_service(
        &self,
    ) -> UserService<MemoryStore<User>, MemoryStore<Department>, PlainHasher> {
        UserService {
            users: self.users.clone(),
            departments: self.departments.clone(),
            hasher: PlainHasher,
        }
    }

    pub fn auth_service(
        &self,
    ) -> AuthService<MemoryStore<User>, MemoryStore<Department>, PlainHasher> {
        AuthService {
            users: self.users.clone(),
            departments: self.departments.clone(),
            hasher: PlainHasher,
        }
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn department(id: i64) -> Department {
    Department {
        id: DepartmentId(id),
        name: format!("dept-{id}"),
        description: None,
        active: true,
    }
}

pub fn user(id: i64, role: Role, department: Option<i64>) -> User {
    User {
        id: UserId(id),
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        enabled: true,
        role,
        department_id: department.map(DepartmentId),
        password_hash: "hashed:original".to_owned(),
    }
}

pub fn site(id: i64, department: Option<i64>) -> Site {
    Site {
        id: SiteId(id),
        name: format!("site-{id}"),
        address: None,
        city: Some("Lyon".to_owned()),
        country: Some("FR".to_owned()),
        department_id: department.map(DepartmentId),
    }
}

pub fn hardware_spec(name: &str) -> HardwareSpec {
    HardwareSpec {
        name: name.to_owned(),
        hardware_type: HardwareType::Server,
        model: "PowerEdge R650".to_owned(),
        serial_number: format!("SN-{name}"),
        ip_address: Some("10.0.0.10".to_owned()),
        cpu_cores: Some(32),
        ram_gb: Some(256),
        storage_gb: Some(4000),
        status: HardwareStatus::Active,
        purchase_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        warranty_end_date: NaiveDate::from_ymd_opt(2027, 3, 1).unwrap(),
    }
}

pub fn hardware(id: i64, site: i64, department: Option<i64>) -> Hardware {
    Hardware {
        id: HardwareId(id),
        spec: hardware_spec(&format!("hw-{id}")),
        site_id: SiteId(site),
        department_id: department.map(DepartmentId),
    }
}

pub fn vm_spec(name: &str) -> VmSpec {
    VmSpec {
        name: name.to_owned(),
        hostname: format!("{name}.internal"),
        ip_address: None,
        operating_system: "Debian 12".to_owned(),
        vcpu: 4,
        vram: 8,
        disk_size: 80,
        status: VmStatus::Running,
    }
}

pub fn vm(id: i64, hardware: i64, department: Option<i64>) -> VirtualMachine {
    VirtualMachine {
        id: VmId(id),
        spec: vm_spec(&format!("vm-{id}")),
        hardware_id: HardwareId(hardware),
        department_id: department.map(DepartmentId),
    }
}

pub fn task(id: i64, vm: i64, requested_by: i64, department: Option<i64>) -> DeploymentTask {
    DeploymentTask {
        id: TaskId(id),
        task_name: Some(format!("task-{id}")),
        description: None,
        vm_id: VmId(vm),
        requested_by: UserId(requested_by),
        status: DeploymentStatus::Pending,
        created_at: Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap(),
        completed_at: None,
        scheduled_date: None,
        department_id: department.map(DepartmentId),
    }
}
