use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VirtualMachines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VirtualMachines::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VirtualMachines::Name).string().not_null())
                    .col(ColumnDef::new(VirtualMachines::Hostname).string().not_null())
                    .col(ColumnDef::new(VirtualMachines::IpAddress).string())
                    .col(
                        ColumnDef::new(VirtualMachines::OperatingSystem)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VirtualMachines::Vcpu).integer().not_null())
                    .col(ColumnDef::new(VirtualMachines::Vram).integer().not_null())
                    .col(ColumnDef::new(VirtualMachines::DiskSize).integer().not_null())
                    .col(
                        ColumnDef::new(VirtualMachines::Status)
                            .string()
                            .not_null()
                            .default("STOPPED"),
                    )
                    .col(
                        ColumnDef::new(VirtualMachines::HardwareId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VirtualMachines::DepartmentId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .from(VirtualMachines::Table, VirtualMachines::HardwareId)
                            .to(Hardware::Table, Hardware::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VirtualMachines::Table, VirtualMachines::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VirtualMachines::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum VirtualMachines {
    Table,
    Id,
    Name,
    Hostname,
    IpAddress,
    OperatingSystem,
    Vcpu,
    Vram,
    DiskSize,
    Status,
    HardwareId,
    DepartmentId,
}

#[derive(Iden)]
enum Hardware {
    Table,
    Id,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
}
