use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hardware::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hardware::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hardware::Name).string().not_null())
                    .col(ColumnDef::new(Hardware::HardwareType).string().not_null())
                    .col(ColumnDef::new(Hardware::Model).string().not_null())
                    .col(ColumnDef::new(Hardware::SerialNumber).string().not_null())
                    .col(ColumnDef::new(Hardware::IpAddress).string())
                    .col(ColumnDef::new(Hardware::CpuCores).integer())
                    .col(ColumnDef::new(Hardware::RamGb).integer())
                    .col(ColumnDef::new(Hardware::StorageGb).integer())
                    .col(
                        ColumnDef::new(Hardware::Status)
                            .string()
                            .not_null()
                            .default("OPERATIONAL"),
                    )
                    .col(ColumnDef::new(Hardware::PurchaseDate).date().not_null())
                    .col(ColumnDef::new(Hardware::WarrantyEndDate).date().not_null())
                    .col(ColumnDef::new(Hardware::SiteId).big_integer().not_null())
                    .col(ColumnDef::new(Hardware::DepartmentId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Hardware::Table, Hardware::SiteId)
                            .to(Sites::Table, Sites::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Hardware::Table, Hardware::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hardware::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Hardware {
    Table,
    Id,
    Name,
    HardwareType,
    Model,
    SerialNumber,
    IpAddress,
    CpuCores,
    RamGb,
    StorageGb,
    Status,
    PurchaseDate,
    WarrantyEndDate,
    SiteId,
    DepartmentId,
}

#[derive(Iden)]
enum Sites {
    Table,
    Id,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
}
