use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "credit_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub label_short: String, // e.g. "QS"
    pub label: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dp_course_generic::Entity")]
    GenericCourses,
}

impl Related<super::dp_course_generic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GenericCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
