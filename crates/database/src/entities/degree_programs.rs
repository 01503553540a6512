use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "degree_programs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub label: String,
    pub credits: Option<f64>,
    pub elective_credits: Option<f64>, // None when the program lists "N.A."
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dp_course_specific::Entity")]
    SpecificCourses,
    #[sea_orm(has_many = "super::dp_course_generic::Entity")]
    GenericCourses,
}

impl Related<super::dp_course_specific::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpecificCourses.def()
    }
}

impl Related<super::dp_course_generic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GenericCourses.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::dp_course_specific::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::dp_course_specific::Relation::DegreeProgram.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
