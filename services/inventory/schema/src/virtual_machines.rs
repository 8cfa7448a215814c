use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "virtual_machines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub hostname: String,
    pub ip_address: Option<String>,
    pub operating_system: String,
    pub vcpu: i32,
    pub vram: i32,
    pub disk_size: i32,
    pub status: String,
    pub hardware_id: i64,
    pub department_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hardware::Entity",
        from = "Column::HardwareId",
        to = "super::hardware::Column::Id"
    )]
    Hardware,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::deployment_tasks::Entity")]
    DeploymentTasks,
}

impl Related<super::hardware::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hardware.def()
    }
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::deployment_tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeploymentTasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
