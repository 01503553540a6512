use crate::entities::{core_learning_outcomes, credit_types};
use models::{credit_type::CreditTypeCode, outcome::CORE_OUTCOMES};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, TransactionTrait,
};
use std::collections::HashSet;

/// Number of rows inserted by a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub outcomes: usize,
    pub credit_types: usize,
}

pub struct SeedService;

impl SeedService {
    /// Seeds the fixed reference tables, inserting only rows that are absent.
    ///
    /// Outcomes are matched by label and credit types by code, so running this
    /// again against a seeded database inserts nothing.
    pub async fn initialize(db: &DatabaseConnection) -> Result<SeedSummary, DbErr> {
        let txn = db.begin().await?;

        let existing_labels: HashSet<String> = core_learning_outcomes::Entity::find()
            .all(&txn)
            .await?
            .into_iter()
            .map(|outcome| outcome.label)
            .collect();

        let new_outcomes: Vec<core_learning_outcomes::ActiveModel> = CORE_OUTCOMES
            .iter()
            .filter(|seed| !existing_labels.contains(seed.label))
            .map(|seed| core_learning_outcomes::ActiveModel {
                id: Set(seed.id),
                label: Set(seed.label.to_string()),
                description: Set(seed.description.to_string()),
            })
            .collect();

        let existing_codes: HashSet<String> = credit_types::Entity::find()
            .all(&txn)
            .await?
            .into_iter()
            .map(|credit_type| credit_type.label_short)
            .collect();

        let new_credit_types: Vec<credit_types::ActiveModel> = CreditTypeCode::all()
            .into_iter()
            .filter(|code| !existing_codes.contains(code.code()))
            .map(|code| credit_types::ActiveModel {
                label_short: Set(code.code().to_string()),
                label: Set(code.label().to_string()),
            })
            .collect();

        let summary = SeedSummary {
            outcomes: new_outcomes.len(),
            credit_types: new_credit_types.len(),
        };

        if !new_outcomes.is_empty() {
            core_learning_outcomes::Entity::insert_many(new_outcomes)
                .exec_without_returning(&txn)
                .await?;
        }
        if !new_credit_types.is_empty() {
            credit_types::Entity::insert_many(new_credit_types)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        log::info!(
            "Seeded {} core learning outcomes and {} credit types",
            summary.outcomes,
            summary.credit_types
        );
        Ok(summary)
    }

    /// Whether every seeded outcome and credit type is present
    pub async fn has_reference_data(db: &DatabaseConnection) -> Result<bool, DbErr> {
        let outcome_ids: Vec<i32> = CORE_OUTCOMES.iter().map(|seed| seed.id).collect();
        let outcomes = core_learning_outcomes::Entity::find()
            .filter(core_learning_outcomes::Column::Id.is_in(outcome_ids))
            .count(db)
            .await?;

        let codes: Vec<&str> = CreditTypeCode::all()
            .into_iter()
            .map(CreditTypeCode::code)
            .collect();
        let credit_types = credit_types::Entity::find()
            .filter(credit_types::Column::LabelShort.is_in(codes))
            .count(db)
            .await?;

        Ok(outcomes as usize == CORE_OUTCOMES.len()
            && credit_types as usize == CreditTypeCode::all().len())
    }

    /// Ids of every outcome currently stored
    pub async fn outcome_ids(db: &DatabaseConnection) -> Result<HashSet<i32>, DbErr> {
        Ok(core_learning_outcomes::Entity::find()
            .all(db)
            .await?
            .into_iter()
            .map(|outcome| outcome.id)
            .collect())
    }
}
