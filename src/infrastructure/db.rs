use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    // An in-memory SQLite database lives as long as its connection; keep one.
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            email TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        // Membership sets are JSON arrays mutated in place by single UPDATEs
        r#"
        CREATE TABLE IF NOT EXISTS meetings (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            attendees TEXT NOT NULL DEFAULT '[]',
            tickets TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS tickets (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            description TEXT,
            created_at TEXT NOT NULL
        )
        "#,
        // No foreign key on meeting_id: meeting deletes do not cascade
        r#"
        CREATE TABLE IF NOT EXISTS stories (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            meeting_id TEXT NOT NULL,
            meeting TEXT NOT NULL,
            estimates TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        "CREATE INDEX IF NOT EXISTS idx_stories_meeting_id ON stories(meeting_id)",
    ];

    for sql in statements {
        db.execute(Statement::from_string(db.get_database_backend(), sql.to_owned()))
            .await?;
    }

    tracing::debug!("Schema migrations applied");
    Ok(())
}
