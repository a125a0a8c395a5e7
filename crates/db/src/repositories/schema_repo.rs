//! Repository over `information_schema`.

use sqlx::PgPool;

/// Read access to catalog metadata.
pub struct SchemaRepo;

impl SchemaRepo {
    /// Names of the base tables in `schema`, sorted.
    ///
    /// An unknown schema yields an empty list.
    pub async fn list_base_tables(pool: &PgPool, schema: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT table_name::text FROM information_schema.tables \
             WHERE table_schema = $1 AND table_type = 'BASE TABLE' \
             ORDER BY table_name",
        )
        .bind(schema)
        .fetch_all(pool)
        .await
    }
}
