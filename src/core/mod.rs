pub mod controller;
pub mod saved_store;
pub mod validator;

pub use crate::domain::model::{ActionStatus, CurrentSelection, Gender, Prediction};
pub use crate::domain::ports::{ConfigProvider, FormView, KeyValueStore, Predictor};
pub use crate::utils::error::Result;
