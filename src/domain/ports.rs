use crate::domain::model::{Gender, Prediction};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Synchronous string key-value store scoped to one origin (a file, or memory).
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> Option<u64>;
    fn store_path(&self) -> &str;
    fn ignore_stale_predictions(&self) -> bool;
}

#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, name: &str) -> Result<Prediction>;
}

/// The form surface: one text field, two exclusive choice controls and three
/// display regions (error, prediction, saved answer).
pub trait FormView: Send + Sync {
    fn name_input(&self) -> String;
    fn is_checked(&self, gender: Gender) -> bool;
    fn check(&self, gender: Gender);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
    fn set_prediction_text(&self, text: &str);
    fn set_saved_text(&self, text: &str);
}
