use models::credit_type::CreditTypeCode;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A generic credit bucket that may replace its parent program course
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dp_course_substitute_generic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub parent_id: i32,
    pub credit_type_id: CreditTypeCode,
    pub credits: Option<f64>,
    pub elective: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dp_course_specific::Entity",
        from = "Column::ParentId",
        to = "super::dp_course_specific::Column::Id"
    )]
    Parent,
    #[sea_orm(
        belongs_to = "super::credit_types::Entity",
        from = "Column::CreditTypeId",
        to = "super::credit_types::Column::LabelShort"
    )]
    CreditType,
}

impl Related<super::dp_course_specific::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parent.def()
    }
}

impl Related<super::credit_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreditType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
