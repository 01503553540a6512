use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "core_learning_outcomes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub label: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_learning_outcomes::Entity")]
    CourseLearningOutcomes,
}

impl Related<super::course_learning_outcomes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseLearningOutcomes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
