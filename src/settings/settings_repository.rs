use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::app_settings::dsl::*;
use crate::settings::AppSetting;
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

// Define the trait for SettingsRepository
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get_setting(&self, setting_key_param: &str) -> Result<String>;
    async fn update_setting(&self, setting_key_param: &str, setting_value_param: &str)
        -> Result<()>;
}

pub struct SettingsRepository {
    pool: Arc<DbPool>,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SettingsRepository { pool }
    }
}

// Implement the trait for SettingsRepository
#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_setting(&self, setting_key_param: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;
        app_settings
            .filter(setting_key.eq(setting_key_param))
            .select(setting_value)
            .first(&mut conn)
            .map_err(Error::from)
    }

    async fn update_setting(
        &self,
        setting_key_param: &str,
        setting_value_param: &str,
    ) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(app_settings)
            .values(AppSetting {
                setting_key: setting_key_param.to_string(),
                setting_value: setting_value_param.to_string(),
            })
            .execute(&mut conn)
            .map_err(Error::from)?;
        Ok(())
    }
}
