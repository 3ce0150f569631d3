use super::currency_code::CurrencyCode;
use super::currency_errors::CurrencyError;
use super::{format, registry};
use crate::constants::DISPLAY_CURRENCY_KEY;
use crate::errors::{DatabaseError, Error, Result};
use crate::settings::SettingsRepositoryTrait;
use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};

/// Trait defining the contract for the currency display service.
#[async_trait]
pub trait CurrencyDisplayServiceTrait: Send + Sync {
    fn initialize(&self) -> Result<()>;
    fn get_currency(&self) -> CurrencyCode;
    async fn set_currency(&self, code: CurrencyCode) -> Result<()>;
    fn format_price(&self, amount: Decimal) -> String;
}

pub struct CurrencyDisplayService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
    selection: RwLock<CurrencyCode>,
}

impl CurrencyDisplayService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        CurrencyDisplayService {
            settings_repository,
            selection: RwLock::new(CurrencyCode::BASE),
        }
    }

    /// Reads the persisted selection, treating absent and unrecognized
    /// values as the base currency. Nothing is written back here; the
    /// persisted value only changes on an explicit `set_currency`.
    fn load_persisted_selection(&self) -> Result<CurrencyCode> {
        match self.settings_repository.get_setting(DISPLAY_CURRENCY_KEY) {
            Ok(value) => match value.parse::<CurrencyCode>() {
                Ok(code) => Ok(code),
                Err(_) => {
                    warn!(
                        "Unrecognized persisted display currency '{}', falling back to {}",
                        value,
                        CurrencyCode::BASE
                    );
                    Ok(CurrencyCode::BASE)
                }
            },
            Err(Error::Database(DatabaseError::QueryFailed(diesel::result::Error::NotFound))) => {
                Ok(CurrencyCode::BASE)
            }
            Err(e) => Err(e),
        }
    }
}

// Implement the trait for CurrencyDisplayService
#[async_trait]
impl CurrencyDisplayServiceTrait for CurrencyDisplayService {
    fn initialize(&self) -> Result<()> {
        let selected = self.load_persisted_selection()?;
        debug!("Initializing display currency to {}", selected);

        let mut selection = self
            .selection
            .write()
            .map_err(|e| CurrencyError::CacheError(e.to_string()))?;
        *selection = selected;
        Ok(())
    }

    fn get_currency(&self) -> CurrencyCode {
        match self.selection.read() {
            Ok(selection) => *selection,
            // A writer never leaves the selection partially updated, so the
            // last written value is still valid after a poison.
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    async fn set_currency(&self, code: CurrencyCode) -> Result<()> {
        // Persist first so storage and the in-memory selection never
        // disagree after a failed write.
        self.settings_repository
            .update_setting(DISPLAY_CURRENCY_KEY, code.as_str())
            .await?;

        let mut selection = self
            .selection
            .write()
            .map_err(|e| CurrencyError::CacheError(e.to_string()))?;
        *selection = code;
        Ok(())
    }

    fn format_price(&self, amount: Decimal) -> String {
        let code = self.get_currency();
        let converted = amount * registry::multiplier_for(code);
        format!(
            "{}{}",
            registry::symbol_for(code),
            format::format_display_amount(converted)
        )
    }
}
