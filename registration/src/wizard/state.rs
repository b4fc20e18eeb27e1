use serde::{Deserialize, Serialize};

use super::client::RegistrationReceipt;
use crate::form::RegistrationForm;
use crate::util::ValidationError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    Identity,
    Farm,
    Products,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Identity;
    pub const LAST: WizardStep = WizardStep::Products;

    /// 1-based position shown to the user.
    pub fn index(&self) -> u8 {
        match self {
            WizardStep::Identity => 1,
            WizardStep::Farm => 2,
            WizardStep::Products => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Identity => "Personal details",
            WizardStep::Farm => "Farm details",
            WizardStep::Products => "Products & profile",
        }
    }

    pub fn next(&self) -> WizardStep {
        match self {
            WizardStep::Identity => WizardStep::Farm,
            WizardStep::Farm => WizardStep::Products,
            WizardStep::Products => WizardStep::Products,
        }
    }

    pub fn previous(&self) -> WizardStep {
        match self {
            WizardStep::Identity => WizardStep::Identity,
            WizardStep::Farm => WizardStep::Identity,
            WizardStep::Products => WizardStep::Farm,
        }
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }
}

/// What the presentation layer renders after every event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub form: RegistrationForm,

    // Derived, refreshed after each action
    pub can_advance: bool,
    pub can_retreat: bool,
    pub progress_percentage: u8,

    pub validation_errors: Vec<String>,
    pub submitted: Option<RegistrationReceipt>,
}

impl WizardState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.refresh();
        state
    }

    /// Forward gate for the current step. The final step has none.
    pub fn check_gate(&self) -> Result<(), ValidationError> {
        match self.step {
            WizardStep::Identity => self.form.validate_identity(),
            WizardStep::Farm => self.form.validate_farm(),
            WizardStep::Products => Ok(()),
        }
    }

    pub fn refresh(&mut self) {
        self.can_advance = !self.step.is_last() && self.check_gate().is_ok();
        self.can_retreat = self.step != WizardStep::FIRST;
        self.progress_percentage = match self.step {
            WizardStep::Identity => 33,
            WizardStep::Farm => 66,
            WizardStep::Products => 100,
        };
    }

    pub fn clear_errors(&mut self) {
        self.validation_errors.clear();
    }

    pub fn add_error(&mut self, error: String) {
        self.validation_errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }

    /// Copy for display with password fields masked.
    pub fn redacted(&self) -> Self {
        Self {
            form: self.form.redacted(),
            ..self.clone()
        }
    }
}
