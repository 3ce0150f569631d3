mod common;

use std::sync::Arc;

use rust_decimal_macros::dec;
use storefront_core::constants::DISPLAY_CURRENCY_KEY;
use storefront_core::currency::{
    CurrencyCode, CurrencyDisplayService, CurrencyDisplayServiceTrait,
};
use storefront_core::settings::{SettingsRepository, SettingsRepositoryTrait};

#[tokio::test]
async fn selection_survives_a_new_session_over_the_same_database() {
    let db_dir = common::get_test_db_path("selection_survives");
    let pool = common::setup_pool(&db_dir);

    {
        let repository = Arc::new(SettingsRepository::new(pool.clone()));
        let service = CurrencyDisplayService::new(repository);
        service.initialize().expect("Failed to initialize service");
        assert_eq!(service.get_currency(), CurrencyCode::Usd);

        service
            .set_currency(CurrencyCode::Xcd)
            .await
            .expect("Failed to set currency");
        assert_eq!(service.format_price(dec!(100)), "EC$270.00");
    }

    // A fresh service over the same storage simulates a new session
    let repository = Arc::new(SettingsRepository::new(pool));
    let service = CurrencyDisplayService::new(repository);
    service.initialize().expect("Failed to initialize service");

    assert_eq!(service.get_currency(), CurrencyCode::Xcd);
    assert_eq!(service.format_price(dec!(100)), "EC$270.00");

    common::delete_db_dir(&db_dir);
}

#[tokio::test]
async fn corrupted_persisted_value_initializes_to_base_currency() {
    let db_dir = common::get_test_db_path("corrupted_value");
    let pool = common::setup_pool(&db_dir);

    let repository = Arc::new(SettingsRepository::new(pool));
    repository
        .update_setting(DISPLAY_CURRENCY_KEY, "not-a-currency")
        .await
        .expect("Failed to write setting");

    let service = CurrencyDisplayService::new(repository);
    service.initialize().expect("Failed to initialize service");

    assert_eq!(service.get_currency(), CurrencyCode::Usd);
    assert_eq!(service.format_price(dec!(12.5)), "$12.50");

    common::delete_db_dir(&db_dir);
}

#[tokio::test]
async fn repository_round_trips_the_setting_row() {
    let db_dir = common::get_test_db_path("setting_round_trip");
    let pool = common::setup_pool(&db_dir);

    let repository = SettingsRepository::new(pool);
    repository
        .update_setting(DISPLAY_CURRENCY_KEY, "TTD")
        .await
        .expect("Failed to write setting");
    repository
        .update_setting(DISPLAY_CURRENCY_KEY, "JMD")
        .await
        .expect("Failed to overwrite setting");

    let stored = repository
        .get_setting(DISPLAY_CURRENCY_KEY)
        .expect("Failed to read setting");
    assert_eq!(stored, "JMD");

    common::delete_db_dir(&db_dir);
}
