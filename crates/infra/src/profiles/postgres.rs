//! Postgres-backed employer profile store.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE employer_profiles (
//!     user_id       TEXT PRIMARY KEY,
//!     company_name  TEXT NULL,
//!     is_subscribed BOOLEAN NULL,
//!     updated_at    TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | PoolClosed / PoolTimedOut / Io | `Unavailable` |
//! | Database, ColumnDecode, anything else | `Database { operation, .. }` |

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::instrument;

use jobboard_core::UserId;

use super::{EmployerProfile, EmployerProfileStore, StoreError};

pub struct PostgresEmployerProfileStore {
    pool: Arc<PgPool>,
}

impl PostgresEmployerProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Arc::new(pool) }
    }

    /// Open a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }
}

#[async_trait::async_trait]
impl EmployerProfileStore for PostgresEmployerProfileStore {
    #[instrument(skip_all, fields(user_id = %user_id))]
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<EmployerProfile>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT
                user_id,
                company_name,
                is_subscribed,
                updated_at
            FROM employer_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_employer_profile", e))?;

        row.map(|r| row_to_profile(&r)).transpose()
    }
}

fn row_to_profile(row: &PgRow) -> Result<EmployerProfile, StoreError> {
    let decode = |e: sqlx::Error| map_sqlx_error("decode_employer_profile", e);

    let raw_id: String = row.try_get("user_id").map_err(decode)?;
    let user_id = UserId::new(raw_id).map_err(|e| StoreError::Database {
        operation: "decode_employer_profile",
        message: e.to_string(),
    })?;

    Ok(EmployerProfile {
        user_id,
        company_name: row.try_get::<Option<String>, _>("company_name").map_err(decode)?,
        is_subscribed: row.try_get::<Option<bool>, _>("is_subscribed").map_err(decode)?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at").map_err(decode)?,
    })
}

fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable(format!("{operation}: connection pool unavailable"))
        }
        sqlx::Error::Io(e) => StoreError::Unavailable(format!("{operation}: {e}")),
        sqlx::Error::Database(db_err) => StoreError::Database {
            operation,
            message: db_err.message().to_string(),
        },
        other => StoreError::Database {
            operation,
            message: other.to_string(),
        },
    }
}
