pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{
    http::GenderizeClient,
    storage::{JsonFileStore, MemoryStore},
    view::{TerminalView, ViewState},
};
pub use crate::config::FormConfig;
pub use crate::core::{controller::FormController, validator::validate_name};
pub use crate::domain::model::{ActionStatus, CurrentSelection, Gender, Prediction};
pub use crate::utils::error::{FormError, Result, ValidationError};
