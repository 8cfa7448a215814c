use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Every scoped list filters on department_id.
const INDEXES: [(&str, &str); 5] = [
    ("users", "idx_users_department_id"),
    ("sites", "idx_sites_department_id"),
    ("hardware", "idx_hardware_department_id"),
    ("virtual_machines", "idx_virtual_machines_department_id"),
    ("deployment_tasks", "idx_deployment_tasks_department_id"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, name) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .table(Alias::new(table))
                        .col(Alias::new("department_id"))
                        .name(name)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (_, name) in INDEXES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).to_owned())
                .await?;
        }
        Ok(())
    }
}
