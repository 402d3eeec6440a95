use crate::core::{FormView, Gender};
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Everything the form currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub name: String,
    pub male_checked: bool,
    pub female_checked: bool,
    pub error: Option<String>,
    pub prediction: String,
    pub saved: String,
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |checked: bool| if checked { "(x)" } else { "( )" };
        writeln!(f, "name:       {}", self.name)?;
        writeln!(
            f,
            "gender:     {} male  {} female",
            mark(self.male_checked),
            mark(self.female_checked)
        )?;
        if let Some(error) = &self.error {
            writeln!(f, "error:      {}", error)?;
        }
        writeln!(f, "prediction: {}", self.prediction)?;
        write!(f, "saved:      {}", self.saved)
    }
}

/// In-memory form surface. With `echo` on, every display change is printed
/// to stdout as it happens.
#[derive(Debug, Default)]
pub struct TerminalView {
    state: Mutex<ViewState>,
    echo: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ViewState::default()),
            echo: true,
        }
    }

    pub fn silent() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn echo(&self, region: &str, text: &str) {
        if self.echo {
            println!("[{}] {}", region, text);
        }
    }

    pub fn type_name(&self, name: &str) {
        self.state().name = name.to_string();
    }

    pub fn snapshot(&self) -> ViewState {
        self.state().clone()
    }
}

impl FormView for TerminalView {
    fn name_input(&self) -> String {
        self.state().name.clone()
    }

    fn is_checked(&self, gender: Gender) -> bool {
        let state = self.state();
        match gender {
            Gender::Male => state.male_checked,
            Gender::Female => state.female_checked,
        }
    }

    fn check(&self, gender: Gender) {
        {
            let mut state = self.state();
            state.male_checked = gender == Gender::Male;
            state.female_checked = gender == Gender::Female;
        }
        self.echo("choice", gender.as_str());
    }

    fn show_error(&self, message: &str) {
        self.state().error = Some(message.to_string());
        self.echo("error", message);
    }

    fn hide_error(&self) {
        self.state().error = None;
    }

    fn set_prediction_text(&self, text: &str) {
        self.state().prediction = text.to_string();
        self.echo("prediction", text);
    }

    fn set_saved_text(&self, text: &str) {
        self.state().saved = text.to_string();
        self.echo("saved", text);
    }
}
