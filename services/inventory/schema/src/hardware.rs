use sea_orm::entity::prelude::*;

/// Physical asset installed at a site.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hardware")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub hardware_type: String,
    pub model: String,
    pub serial_number: String,
    pub ip_address: Option<String>,
    pub cpu_cores: Option<i32>,
    pub ram_gb: Option<i32>,
    pub storage_gb: Option<i32>,
    pub status: String,
    pub purchase_date: Date,
    pub warranty_end_date: Date,
    pub site_id: i64,
    pub department_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sites::Entity",
        from = "Column::SiteId",
        to = "super::sites::Column::Id"
    )]
    Site,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::virtual_machines::Entity")]
    VirtualMachines,
}

impl Related<super::sites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Site.def()
    }
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::virtual_machines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VirtualMachines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
