use crate::assets::MigrationAssets;
use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Executor, Pool, Sqlite,
};
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info};

const SAMPLE_DATA: &str = include_str!("sample_data.sql");

#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    pub fn pool(&self) -> Pool<Sqlite> {
        self.pool.clone()
    }

    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        // Create database if it doesn't exist (for SQLite)
        if !Sqlite::database_exists(&config.url).await? {
            info!("Creating database {}", config.url);
            Sqlite::create_database(&config.url).await?;
        }

        let options = SqliteConnectOptions::from_str(&config.url)?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.unwrap_or(5))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Private in-memory database on a single long-lived connection.
    ///
    /// Every SQLite `:memory:` connection is its own database, so the pool is
    /// pinned to one connection that never idles out.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<()> {
        self.run_embedded_migrations().await?;
        Ok(())
    }

    async fn run_embedded_migrations(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _sqlx_migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                success BOOLEAN NOT NULL,
                checksum BLOB NOT NULL,
                execution_time BIGINT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        for (name, content) in MigrationAssets::get_migrations() {
            // "0001_initial_schema.sql" -> 1
            let version: i64 = name
                .split('_')
                .next()
                .and_then(|v| v.parse().ok())
                .ok_or_else(|| anyhow::anyhow!("Migration {} has no numeric version prefix", name))?;

            let existing = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE version = ? AND success = true",
            )
            .bind(version)
            .fetch_one(&self.pool)
            .await?;

            if existing > 0 {
                debug!("Migration {} already applied", name);
                continue;
            }

            let start = Instant::now();
            let mut transaction = self.pool.begin().await?;

            match (&mut *transaction).execute(content.as_str()).await {
                Ok(_) => {
                    let execution_time = start.elapsed().as_millis() as i64;
                    let checksum = Self::calculate_checksum(&content);

                    sqlx::query(
                        r#"
                        INSERT INTO _sqlx_migrations (version, description, success, checksum, execution_time)
                        VALUES (?, ?, true, ?, ?)
                        "#,
                    )
                    .bind(version)
                    .bind(&name)
                    .bind(&checksum)
                    .bind(execution_time)
                    .execute(&mut *transaction)
                    .await?;

                    transaction.commit().await?;
                    info!("Applied migration: {} ({}ms)", name, execution_time);
                }
                Err(e) => {
                    transaction.rollback().await?;
                    return Err(anyhow::anyhow!("Migration {} failed: {}", name, e));
                }
            }
        }

        Ok(())
    }

    fn calculate_checksum(content: &str) -> Vec<u8> {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        content.hash(&mut hasher);
        hasher.finish().to_be_bytes().to_vec()
    }

    /// Insert the classic clinic sample data. Rows carry fixed ids, so
    /// running this twice leaves the tables unchanged.
    pub async fn seed_sample_data(&self) -> Result<()> {
        let mut transaction = self.pool.begin().await?;
        (&mut *transaction).execute(SAMPLE_DATA).await?;
        transaction.commit().await?;
        info!("Sample data loaded");
        Ok(())
    }

    pub async fn health_check(&self) -> Result<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    /// Versions recorded as applied, oldest first
    pub async fn applied_migrations(&self) -> Result<Vec<i64>> {
        let versions = sqlx::query_scalar::<_, i64>(
            "SELECT version FROM _sqlx_migrations WHERE success = true ORDER BY version",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_apply_once() {
        let database = Database::in_memory().await.unwrap();
        database.migrate().await.unwrap();
        database.migrate().await.unwrap();

        assert_eq!(database.applied_migrations().await.unwrap(), vec![1]);
        database.health_check().await.unwrap();
    }

    #[tokio::test]
    async fn test_sample_data_is_idempotent() {
        let database = Database::in_memory().await.unwrap();
        database.migrate().await.unwrap();
        database.seed_sample_data().await.unwrap();
        database.seed_sample_data().await.unwrap();

        let vets = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vets")
            .fetch_one(&database.pool())
            .await
            .unwrap();
        let owners = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM owners")
            .fetch_one(&database.pool())
            .await
            .unwrap();
        assert_eq!(vets, 6);
        assert_eq!(owners, 10);
    }

    #[tokio::test]
    async fn test_file_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("clinic.db").display());
        let config = DatabaseConfig {
            url,
            max_connections: Some(2),
            seed_sample_data: false,
        };

        let database = Database::new(&config).await.unwrap();
        database.migrate().await.unwrap();
        assert!(dir.path().join("clinic.db").exists());
    }
}
