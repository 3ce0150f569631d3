pub mod db;

pub mod constants;
pub mod currency;
pub mod errors;
pub mod schema;
pub mod settings;

pub use currency::*;
