pub mod session;

use crate::adapters::http::GenderizeClient;
use crate::adapters::storage::JsonFileStore;
use crate::adapters::view::TerminalView;
use crate::core::controller::FormController;
use crate::core::ConfigProvider;
use crate::utils::error::Result;

pub type CliController = FormController<JsonFileStore, GenderizeClient, TerminalView>;

/// Wires the file store, the HTTP predictor and an echoing terminal view.
pub fn build_controller<C: ConfigProvider>(config: &C, view: TerminalView) -> Result<CliController> {
    let store = JsonFileStore::new(config.store_path());
    let predictor = GenderizeClient::from_config(config)?;

    tracing::debug!(
        "Form wired: endpoint={}, store={}",
        predictor.endpoint(),
        store.path().display()
    );

    Ok(FormController::new(store, predictor, view)
        .with_stale_policy(config.ignore_stale_predictions()))
}
