//! Schema setup for the trivia tables

use sqlx::PgPool;

/// Categories inserted into an empty database
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Create tables if missing and seed default categories.
///
/// Safe to run on every startup.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            difficulty INTEGER NOT NULL CHECK (difficulty BETWEEN 1 AND 5)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    let seeded = seed_categories(pool).await?;
    if seeded > 0 {
        tracing::info!(count = seeded, "Seeded default categories");
    }

    tracing::info!("Trivia migrations complete");
    Ok(())
}

/// Insert the default categories when the table is empty.
///
/// Returns the number of rows inserted.
async fn seed_categories(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let names: Vec<String> = DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect();

    let result = sqlx::query(
        r#"
        INSERT INTO categories (type)
        SELECT name FROM UNNEST($1::text[]) WITH ORDINALITY AS t(name, ord)
        WHERE NOT EXISTS (SELECT 1 FROM categories)
        ORDER BY ord
        "#,
    )
    .bind(names)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
