use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sites::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sites::Name).string().not_null())
                    .col(ColumnDef::new(Sites::Address).string())
                    .col(ColumnDef::new(Sites::City).string())
                    .col(ColumnDef::new(Sites::Country).string())
                    .col(ColumnDef::new(Sites::DepartmentId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sites::Table, Sites::DepartmentId)
                            .to(Departments::Table, Departments::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sites::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sites {
    Table,
    Id,
    Name,
    Address,
    City,
    Country,
    DepartmentId,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
}
