use crate::core::saved_store::SavedAnswers;
use crate::core::validator::validate_name;
use crate::domain::model::{ActionStatus, CurrentSelection, Gender, Prediction};
use crate::domain::ports::{FormView, KeyValueStore, Predictor};
use crate::utils::error::Result;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub const NO_PREDICTION_MESSAGE: &str = "No prediction available for this name";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching prediction";
pub const NO_SAVED_GENDER_MESSAGE: &str = "No saved gender";

enum SubmitStep {
    Finished(ActionStatus),
    Fetch { name: String, ticket: u64 },
}

/// Drives the form: submit, save and clear.
///
/// The view, store and predictor are injected; the current-selection mirror
/// and the submit generation counter are owned per session. All methods take
/// `&self`, so several submits may be awaited concurrently. When
/// `ignore_stale` is set, a prediction that arrives after a newer submit has
/// started is dropped instead of overwriting the newer result.
pub struct FormController<S: KeyValueStore, P: Predictor, V: FormView> {
    answers: SavedAnswers<S>,
    predictor: P,
    view: V,
    current: Mutex<CurrentSelection>,
    generation: AtomicU64,
    ignore_stale: bool,
}

impl<S: KeyValueStore, P: Predictor, V: FormView> FormController<S, P, V> {
    pub fn new(store: S, predictor: P, view: V) -> Self {
        Self {
            answers: SavedAnswers::new(store),
            predictor,
            view,
            current: Mutex::new(CurrentSelection::default()),
            generation: AtomicU64::new(0),
            ignore_stale: true,
        }
    }

    pub fn with_stale_policy(mut self, ignore_stale: bool) -> Self {
        self.ignore_stale = ignore_stale;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn answers(&self) -> &SavedAnswers<S> {
        &self.answers
    }

    pub fn current_selection(&self) -> CurrentSelection {
        self.lock_current().clone()
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, CurrentSelection> {
        // the mirror is plain data, a poisoned lock still holds a usable value
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Validates the typed name, showing the reason on failure.
    fn checked_name(&self) -> std::result::Result<String, ActionStatus> {
        let name = self.view.name_input();
        match validate_name(&name) {
            Ok(()) => {
                self.view.hide_error();
                Ok(name)
            }
            Err(reason) => {
                tracing::info!("Rejected name {:?}: {}", name, reason);
                self.view.show_error(&reason.to_string());
                Err(ActionStatus::Rejected(reason))
            }
        }
    }

    fn update_saved_value(&self, name: &str, gender: Gender) {
        self.view
            .set_saved_text(&format!("name {} belongs to a {}", name, gender));
        let mut current = self.lock_current();
        current.name = name.to_string();
        current.gender = Some(gender);
    }

    /// Shows the saved answer for `name`, if there is one.
    pub fn show_saved_value(&self, name: &str) -> Result<Option<Gender>> {
        let saved = self.answers.get(name)?;
        match saved {
            Some(gender) => self.update_saved_value(name, gender),
            None => self
                .view
                .set_saved_text(&format!("No saved gender for {}", name)),
        }
        Ok(saved)
    }

    /// Validates, shows the saved answer and takes a ticket right away; only
    /// the prediction fetch is deferred to the returned future. Calling this
    /// again before awaiting supersedes the earlier fetch.
    pub fn submit(&self) -> impl Future<Output = Result<ActionStatus>> + Send + '_ {
        let step = self.prepare_submit();
        async move {
            match step? {
                SubmitStep::Finished(status) => Ok(status),
                SubmitStep::Fetch { name, ticket } => {
                    Ok(self.fetch_prediction(&name, ticket).await)
                }
            }
        }
    }

    fn prepare_submit(&self) -> Result<SubmitStep> {
        let name = match self.checked_name() {
            Ok(name) => name,
            Err(status) => return Ok(SubmitStep::Finished(status)),
        };

        self.show_saved_value(&name)?;
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(SubmitStep::Fetch { name, ticket })
    }

    async fn fetch_prediction(&self, name: &str, ticket: u64) -> ActionStatus {
        tracing::debug!("Requesting prediction #{} for '{}'", ticket, name);

        let outcome = self.predictor.predict(name).await;

        if self.ignore_stale && self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(
                "Dropping prediction #{} for '{}': a newer submit is pending",
                ticket,
                name
            );
            return ActionStatus::Superseded;
        }

        match outcome {
            Ok(prediction) => self.display_prediction(&prediction, name),
            Err(e) => {
                tracing::warn!("Prediction for '{}' failed: {}", name, e);
                self.view.show_error(FETCH_ERROR_MESSAGE);
                ActionStatus::FetchFailed
            }
        }
    }

    fn display_prediction(&self, prediction: &Prediction, name: &str) -> ActionStatus {
        let Some(gender) = prediction.gender else {
            tracing::info!("No prediction available for '{}'", name);
            self.view.show_error(NO_PREDICTION_MESSAGE);
            self.view.set_prediction_text(NO_PREDICTION_MESSAGE);
            return ActionStatus::NoPrediction;
        };

        tracing::info!(
            "Predicted {} for '{}' (p={}, count={:?})",
            gender,
            name,
            prediction.probability,
            prediction.count
        );
        self.view.check(gender);
        self.view.set_prediction_text(&format!(
            "the name {} belongs to a {} with probability of {}%",
            name,
            gender,
            prediction.percentage()
        ));
        ActionStatus::Done
    }

    pub fn save(&self) -> Result<ActionStatus> {
        let name = match self.checked_name() {
            Ok(name) => name,
            Err(status) => return Ok(status),
        };

        let gender = if self.view.is_checked(Gender::Male) {
            Gender::Male
        } else {
            Gender::Female
        };

        self.answers.set(&name, gender)?;
        self.update_saved_value(&name, gender);
        tracing::info!("Saved {} for '{}'", gender, name);
        Ok(ActionStatus::Done)
    }

    /// Removes the answer for the last shown or saved name, which is not
    /// necessarily the name currently typed.
    pub fn clear(&self) -> Result<ActionStatus> {
        let name = self.lock_current().name.clone();
        if name.is_empty() {
            tracing::debug!("Nothing selected, clear leaves the store untouched");
        } else {
            self.answers.remove(&name)?;
            tracing::info!("Cleared saved answer for '{}'", name);
        }
        self.view.set_saved_text(NO_SAVED_GENDER_MESSAGE);
        Ok(ActionStatus::Done)
    }
}
