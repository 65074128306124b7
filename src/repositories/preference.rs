//! Preference repository for database operations.

use anyhow::Result;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::entities::preference;

/// Repository for key/value preference rows.
pub struct PreferenceRepository;

impl PreferenceRepository {
    /// Get a single row by key.
    pub async fn get<C>(conn: &C, key: &str) -> Result<Option<preference::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(preference::Entity::find_by_id(key.to_string()).one(conn).await?)
    }

    /// Insert or overwrite the value stored under `key`.
    pub async fn upsert<C>(conn: &C, key: &str, value: &str) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let model = preference::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        };

        preference::Entity::insert(model)
            .on_conflict(
                OnConflict::column(preference::Column::Key)
                    .update_columns([preference::Column::Value, preference::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;

        Ok(())
    }

    /// Delete the row for `key`, returning whether one existed.
    pub async fn delete<C>(conn: &C, key: &str) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = preference::Entity::delete_by_id(key.to_string()).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
