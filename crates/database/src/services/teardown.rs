use crate::entities::{
    course_learning_outcomes, courses, degree_programs, dp_course_generic, dp_course_specific,
    dp_course_substitute_generic, dp_course_substitute_specific,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, TransactionTrait};

pub struct TeardownService;

impl TeardownService {
    /// Deletes every row an import created, returning how many were removed.
    ///
    /// The seeded outcome and credit type tables are kept, so an import can
    /// run again straight away.
    pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, DbErr> {
        let txn = db.begin().await?;

        // Children before parents
        let mut deleted = 0;
        deleted += dp_course_substitute_generic::Entity::delete_many()
            .exec(&txn)
            .await?
            .rows_affected;
        deleted += dp_course_substitute_specific::Entity::delete_many()
            .exec(&txn)
            .await?
            .rows_affected;
        deleted += dp_course_generic::Entity::delete_many()
            .exec(&txn)
            .await?
            .rows_affected;
        deleted += dp_course_specific::Entity::delete_many()
            .exec(&txn)
            .await?
            .rows_affected;
        deleted += course_learning_outcomes::Entity::delete_many()
            .exec(&txn)
            .await?
            .rows_affected;
        deleted += courses::Entity::delete_many()
            .exec(&txn)
            .await?
            .rows_affected;
        deleted += degree_programs::Entity::delete_many()
            .exec(&txn)
            .await?
            .rows_affected;

        txn.commit().await?;

        log::info!("Deleted {deleted} imported rows");
        Ok(deleted)
    }
}
