use crate::domain::model::Gender;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;

/// Typed view over a [`KeyValueStore`]: name -> saved gender.
pub struct SavedAnswers<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SavedAnswers<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get(&self, name: &str) -> Result<Option<Gender>> {
        match self.store.get_item(name)? {
            None => Ok(None),
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => match raw.parse::<Gender>() {
                Ok(gender) => Ok(Some(gender)),
                Err(e) => {
                    tracing::warn!("Ignoring saved value for '{}': {}", name, e);
                    Ok(None)
                }
            },
        }
    }

    pub fn set(&self, name: &str, gender: Gender) -> Result<()> {
        tracing::debug!("Saving '{}' -> {}", name, gender);
        self.store.set_item(name, gender.as_str())
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        tracing::debug!("Removing saved answer for '{}'", name);
        self.store.remove_item(name)
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &S {
        &self.store
    }
}
