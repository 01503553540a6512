use models::credit_type::CreditTypeCode;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Credits of a category required by a degree program, without a named course
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dp_course_generic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub degree_program_id: i32,
    pub credit_type_id: CreditTypeCode,
    pub credits: Option<f64>,
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
        belongs_to = "super::credit_types::Entity",
        from = "Column::CreditTypeId",
        to = "super::credit_types::Column::LabelShort"
    )]
    CreditType,
}

impl Related<super::degree_programs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DegreeProgram.def()
    }
}

impl Related<super::credit_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreditType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
