use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::models::Profile;
use crate::store::{expect_single, ProfileStore, StoreError};

// `id` may be a uuid column; cast so it always decodes into `String`.
const PROFILE_COLUMNS: &str = r#"
    id::text AS id, linkedin_url, full_name, location_resolved,
    current_company, current_title,
    years_experience::float8 AS years_experience,
    years_at_current_company::float8 AS years_at_current_company,
    skills_tags, focus_area_tags, excellence_tags, domain_tags,
    notes, created_at, updated_at
"#;

/// Reads profiles directly from Postgres.
#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at DESC");
        let rows: Vec<Profile> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        debug!("Postgres returned {} profiles", rows.len());
        Ok(rows)
    }

    async fn get_profile(&self, id: &str) -> Result<Profile, StoreError> {
        // Fetch all matches rather than LIMIT 1 so a duplicated id is reported, not hidden.
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id::text = $1");
        let rows: Vec<Profile> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        expect_single(rows, id)
    }
}
