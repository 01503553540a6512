use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table for many-to-many relationship between courses and core learning outcomes
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_learning_outcomes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course_id: String,
    pub core_learning_outcome_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::core_learning_outcomes::Entity",
        from = "Column::CoreLearningOutcomeId",
        to = "super::core_learning_outcomes::Column::Id"
    )]
    CoreLearningOutcome,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::core_learning_outcomes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoreLearningOutcome.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
