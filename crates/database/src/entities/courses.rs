use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String, // e.g. "MATH 110" or "CS& 101"
    pub label: String,
    pub lower_credit_bound: Option<f64>,
    pub upper_credit_bound: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_learning_outcomes::Entity")]
    CourseLearningOutcomes,
    #[sea_orm(has_many = "super::dp_course_specific::Entity")]
    ProgramCourses,
}

impl Related<super::course_learning_outcomes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseLearningOutcomes.def()
    }
}

impl Related<super::dp_course_specific::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgramCourses.def()
    }
}

// Many-to-many relationship with core learning outcomes
impl Related<super::core_learning_outcomes::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_learning_outcomes::Relation::CoreLearningOutcome.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_learning_outcomes::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
