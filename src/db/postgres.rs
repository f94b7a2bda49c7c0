use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::repository::{CatalogRepository, InteractionRepository},
    error::AppResult,
    models::{InteractionEvent, InteractionRecord, PlayerRecord},
};

/// Creates a PostgreSQL connection pool
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Catalog snapshot read from the `players` table
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogStore {
    async fn load_players(&self) -> AppResult<Vec<PlayerRecord>> {
        let players = sqlx::query_as::<_, PlayerRecord>(
            r#"
            SELECT person_id::text AS id, first_name, last_name, position, team_id,
                   pts, reb, ast, from_year, to_year
            FROM players
            ORDER BY person_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to load players");
            e
        })?;

        tracing::debug!(count = players.len(), "Loaded player catalog");
        Ok(players)
    }
}

/// Interaction history stored in the `user_interactions` table
pub struct PgInteractionStore {
    pool: PgPool,
}

impl PgInteractionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionRepository for PgInteractionStore {
    async fn recent_interactions(
        &self,
        user_id: &str,
        limit: usize,
    ) -> AppResult<Vec<InteractionRecord>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, InteractionRecord>(
            r#"
            SELECT user_id, item_id, weight, created_at
            FROM user_interactions
            WHERE user_id = $1 AND item_type = 'player'
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %user_id, "Failed to load interactions");
            e
        })?;

        Ok(rows)
    }

    async fn record(&self, event: &InteractionEvent) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO user_interactions (user_id, item_type, item_id, event_type, weight)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&event.user_id)
        .bind(&event.item_type)
        .bind(&event.item_id)
        .bind(&event.event_type)
        .bind(event.weight)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
