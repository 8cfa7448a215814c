use sea_orm::entity::prelude::*;

/// A requested deployment onto one virtual machine.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "deployment_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub task_name: Option<String>,
    pub description: Option<String>,
    pub vm_id: i64,
    pub requested_by_id: i64,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub scheduled_date: Option<chrono::DateTime<chrono::Utc>>,
    pub department_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::virtual_machines::Entity",
        from = "Column::VmId",
        to = "super::virtual_machines::Column::Id"
    )]
    VirtualMachine,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::RequestedById",
        to = "super::users::Column::Id"
    )]
    RequestedBy,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
}

impl Related<super::virtual_machines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VirtualMachine.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequestedBy.def()
    }
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
