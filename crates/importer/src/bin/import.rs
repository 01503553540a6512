use anyhow::{Context, Result};
use clap::Parser;
use database::{
    db::connect,
    services::{seed::SeedService, teardown::TeardownService},
};
use importer::{catalog::DuplicateOutcomePolicy, run_import};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

/// Literal the operator must type before everything is deleted
const CONFIRMATION_WORD: &str = "wumpus";

/// Imports the ATA degree program spreadsheet
#[derive(Parser, Debug)]
#[command(name = "import", version)]
struct Args {
    /// CSV export of the degree program spreadsheet
    filepath: PathBuf,

    /// Seed the core learning outcomes and credit types, then exit
    #[arg(long, conflicts_with = "delete")]
    initialize: bool,

    /// Delete every imported row after confirmation, then exit
    #[arg(long)]
    delete: bool,

    /// How to treat an outcome listed twice for the same course
    #[arg(long, value_enum, default_value_t = DuplicateOutcomePolicy::Skip)]
    on_duplicate_outcome: DuplicateOutcomePolicy,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

/// Whether the operator's answer confirms deletion
fn confirms_deletion(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(CONFIRMATION_WORD)
}

fn prompt_for_deletion() -> Result<bool> {
    print!(
        "This will PERMANENTLY DELETE all data currently loaded in the application. \
         Type '{CONFIRMATION_WORD}' to confirm: "
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(confirms_deletion(&answer))
}

async fn delete(db: &DatabaseConnection) -> Result<()> {
    if !prompt_for_deletion()? {
        println!("Nothing deleted. Type the word without quotes.");
        return Ok(());
    }

    let removed = TeardownService::delete_all(db).await?;
    println!("All gone ({removed} rows removed).");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let db = connect(&args.database_url)
        .await
        .context("Failed to connect to the database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to apply migrations")?;

    if args.initialize {
        let summary = SeedService::initialize(&db).await?;
        println!(
            "Reference data ready ({} outcomes and {} credit types added).",
            summary.outcomes, summary.credit_types
        );
        return Ok(());
    }

    if args.delete {
        return delete(&db).await;
    }

    let summary = run_import(&db, &args.filepath, args.on_duplicate_outcome)
        .await
        .with_context(|| format!("Failed to import {}", args.filepath.display()))?;

    println!(
        "Imported {} degree programs, {} courses and {} course learning outcomes.",
        summary.programs, summary.courses, summary.course_outcomes
    );
    println!(
        "Saved {} required courses, {} generic credits and {} substitutes.",
        summary.specific,
        summary.generic,
        summary.substitute_specific + summary.substitute_generic
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_confirms_deletion() {
        assert!(confirms_deletion("wumpus\n"));
        assert!(confirms_deletion("  WUMPUS "));
        assert!(!confirms_deletion("'wumpus'"));
        assert!(!confirms_deletion(""));
    }

    #[test]
    fn test_args() {
        Args::command().debug_assert();

        let args = Args::try_parse_from([
            "import",
            "programs.csv",
            "--on-duplicate-outcome",
            "abandon",
            "--database-url",
            "sqlite::memory:",
        ])
        .unwrap();
        assert_eq!(args.on_duplicate_outcome, DuplicateOutcomePolicy::Abandon);
        assert!(!args.initialize);

        assert!(
            Args::try_parse_from([
                "import",
                "programs.csv",
                "--initialize",
                "--delete",
                "--database-url",
                "sqlite::memory:",
            ])
            .is_err()
        );
    }
}
