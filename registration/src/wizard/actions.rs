use serde::{Deserialize, Serialize};

use crate::catalog::{District, FarmType, ProductCategory};
use crate::form::TextField;

/// UI events, one per user interaction. Deserializable so a session can be
/// scripted as JSON, e.g. `{"action": "toggle_product", "product": "Rice"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WizardAction {
    // Workflow control
    Advance,
    Retreat,
    Reset,
    Submit,

    // Field binding
    SetText { field: TextField, value: String },
    SetFarmType { farm_type: Option<FarmType> },
    SetDistrict { district: Option<District> },
    ToggleProduct { product: ProductCategory },
    SetAgreeToTerms { agree: bool },

    // Error handling
    ClearErrors,
}

impl WizardAction {
    pub fn description(&self) -> &'static str {
        match self {
            WizardAction::Advance => "Advancing to next step",
            WizardAction::Retreat => "Going back to previous step",
            WizardAction::Reset => "Resetting registration",
            WizardAction::Submit => "Submitting registration",
            WizardAction::SetText { .. } => "Updating text field",
            WizardAction::SetFarmType { .. } => "Selecting farm type",
            WizardAction::SetDistrict { .. } => "Selecting district",
            WizardAction::ToggleProduct { .. } => "Toggling product",
            WizardAction::SetAgreeToTerms { .. } => "Updating terms consent",
            WizardAction::ClearErrors => "Clearing validation errors",
        }
    }

    /// Only submission waits on a collaborator; everything else is a local
    /// state change.
    pub fn is_async(&self) -> bool {
        matches!(self, WizardAction::Submit)
    }
}
