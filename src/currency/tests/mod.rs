
use crate::errors::{DatabaseError, Error, Result};
use crate::settings::SettingsRepositoryTrait;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory stand-in for the sqlite-backed settings repository, so service
/// tests run without a database file.
pub(crate) struct MemorySettingsRepository {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySettingsRepository {
    pub fn new() -> Self {
        MemorySettingsRepository {
            values: Mutex::new(HashMap::new()),
        }
    }

    pub fn seeded(key: &str, value: &str) -> Self {
        let repository = MemorySettingsRepository::new();
        repository
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        repository
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl SettingsRepositoryTrait for MemorySettingsRepository {
    fn get_setting(&self, setting_key: &str) -> Result<String> {
        self.values
            .lock()
            .unwrap()
            .get(setting_key)
            .cloned()
            .ok_or(Error::Database(DatabaseError::QueryFailed(
                diesel::result::Error::NotFound,
            )))
    }

    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(setting_key.to_string(), setting_value.to_string());
        Ok(())
    }
}
