use sea_orm_migration::prelude::*;

mod m20261001_000001_create_departments;
mod m20261001_000002_create_users;
mod m20261001_000003_create_sites;
mod m20261001_000004_create_hardware;
mod m20261001_000005_create_virtual_machines;
mod m20261001_000006_create_deployment_tasks;
mod m20261001_000007_add_department_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_departments::Migration),
            Box::new(m20261001_000002_create_users::Migration),
            Box::new(m20261001_000003_create_sites::Migration),
            Box::new(m20261001_000004_create_hardware::Migration),
            Box::new(m20261001_000005_create_virtual_machines::Migration),
            Box::new(m20261001_000006_create_deployment_tasks::Migration),
            Box::new(m20261001_000007_add_department_indexes::Migration),
        ]
    }
}
