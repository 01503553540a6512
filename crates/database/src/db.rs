use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Environment variable holding the connection string
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Creates a database connection from `DATABASE_URL`, honouring a `.env` file
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    dotenvy::dotenv().ok();
    let url = std::env::var(DATABASE_URL_VAR)
        .map_err(|_| DbErr::Custom(format!("{DATABASE_URL_VAR} is not set")))?;

    connect(&url).await
}

/// Creates a database connection for an explicit URL
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url);
    options.sqlx_logging(false);

    // Every pooled connection to an in-memory SQLite database sees its own
    // empty database
    if url.starts_with("sqlite::memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}
