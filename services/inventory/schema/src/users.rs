use sea_orm::entity::prelude::*;

/// Account record; `password_hash` is an argon2 PHC string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub enabled: bool,
    pub role: String,
    pub department_id: Option<i64>,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::deployment_tasks::Entity")]
    DeploymentTasks,
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
