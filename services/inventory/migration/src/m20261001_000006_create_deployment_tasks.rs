use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeploymentTasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeploymentTasks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DeploymentTasks::TaskName).string())
                    .col(ColumnDef::new(DeploymentTasks::Description).text())
                    .col(ColumnDef::new(DeploymentTasks::VmId).big_integer().not_null())
                    .col(
                        ColumnDef::new(DeploymentTasks::RequestedById)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeploymentTasks::Status)
                            .string()
                            .not_null()
                            .default("PENDING"),
                    )
                    .col(
                        ColumnDef::new(DeploymentTasks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(DeploymentTasks::CompletedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(DeploymentTasks::ScheduledDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(DeploymentTasks::DepartmentId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .from(DeploymentTasks::Table, DeploymentTasks::VmId)
                            .to(VirtualMachines::Table, VirtualMachines::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DeploymentTasks::Table, DeploymentTasks::RequestedById)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DeploymentTasks::Table, DeploymentTasks::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeploymentTasks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DeploymentTasks {
    Table,
    Id,
    TaskName,
    Description,
    VmId,
    RequestedById,
    Status,
    CreatedAt,
    CompletedAt,
    ScheduledDate,
    DepartmentId,
}

#[derive(Iden)]
enum VirtualMachines {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
}
