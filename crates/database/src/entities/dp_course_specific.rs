use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A named course required by a degree program
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dp_course_specific")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub degree_program_id: i32,
    pub course_id: String,
    pub elective: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::degree_programs::Entity",
        from = "Column::DegreeProgramId",
        to = "super::degree_programs::Column::Id"
    )]
    DegreeProgram,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::dp_course_substitute_specific::Entity")]
    SubstituteSpecific,
    #[sea_orm(has_many = "super::dp_course_substitute_generic::Entity")]
    SubstituteGeneric,
}

impl Related<super::degree_programs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DegreeProgram.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::dp_course_substitute_specific::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubstituteSpecific.def()
    }
}

impl Related<super::dp_course_substitute_generic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubstituteGeneric.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
