use super::{NewUser, StoreError, User, UserStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, postgres::PgRow, Connection, PgPool, Row};
use std::time::Duration;
use tracing::{info_span, Instrument};
use uuid::Uuid;

const SCHEMA_SQL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/schema.sql"));

#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Connect a small pool to `dsn`.
    ///
    /// # Errors
    /// Returns an error if the database is unreachable.
    pub async fn connect(dsn: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .min_connections(1)
            .max_connections(5)
            .max_lifetime(Duration::from_secs(60 * 2))
            .test_before_acquire(true)
            .connect(dsn)
            .await
            .context("Failed to connect to database")?;

        Ok(Self { pool })
    }

    /// Apply `sql/schema.sql`. Every statement is idempotent.
    ///
    /// # Errors
    /// Returns an error if a statement fails.
    pub async fn migrate(&self) -> Result<()> {
        for (index, statement) in split_sql_statements(SCHEMA_SQL).iter().enumerate() {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .with_context(|| format!("failed to execute schema statement {}", index + 1))?;
        }

        Ok(())
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let query = "SELECT id, email, password, avatar, created_at FROM users WHERE lower(email) = lower($1)";
        let span = info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await?;

        row.map(|row| user_from_row(&row)).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let query = "INSERT INTO users (id, email, password, avatar) VALUES ($1, $2, $3, $4) RETURNING created_at";
        let span = info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        );
        let id = Uuid::new_v4();
        let row = sqlx::query(query)
            .bind(id)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.avatar)
            .fetch_one(&self.pool)
            .instrument(span)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    StoreError::Duplicate
                } else {
                    StoreError::Database(err)
                }
            })?;

        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(User {
            id,
            email: user.email,
            password: user.password_hash,
            avatar: user.avatar,
            created_at,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let acquire_span = info_span!(
            "db.acquire",
            db.system = "postgresql",
            db.operation = "ACQUIRE"
        );
        let mut conn = self.pool.acquire().instrument(acquire_span).await?;

        let ping_span = info_span!("db.ping", db.system = "postgresql", db.operation = "PING");
        conn.ping().instrument(ping_span).await?;

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgresql"
    }
}

fn user_from_row(row: &PgRow) -> Result<User, StoreError> {
    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
        avatar: row.try_get("avatar")?,
        created_at: row.try_get("created_at")?,
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();

    for line in sql.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }
        current.push_str(line);
        current.push('\n');

        if trimmed.ends_with(';') {
            let statement = current.trim();
            if !statement.is_empty() {
                statements.push(statement.to_string());
            }
            current.clear();
        }
    }

    let leftover = current.trim();
    if !leftover.is_empty() {
        statements.push(leftover.to_string());
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct TestDbError {
        code: Option<&'static str>,
    }

    impl fmt::Display for TestDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "test database error")
        }
    }

    impl StdError for TestDbError {}

    impl DatabaseError for TestDbError {
        fn message(&self) -> &str {
            "test database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    #[test]
    fn is_unique_violation_matches_sqlstate() {
        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("23505"),
        }));
        assert!(is_unique_violation(&err));

        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("99999"),
        }));
        assert!(!is_unique_violation(&err));

        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn schema_splits_into_table_and_index() {
        let statements = split_sql_statements(SCHEMA_SQL);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS users"));
        assert!(statements[1].contains("lower(email)"));
    }

    #[test]
    fn split_keeps_trailing_statement_without_semicolon() {
        let statements = split_sql_statements("SELECT 1;\nSELECT 2");
        assert_eq!(statements, vec!["SELECT 1;".to_string(), "SELECT 2".to_string()]);
    }
}
