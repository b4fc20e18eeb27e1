use std::collections::VecDeque;
use std::sync::Arc;

use super::client::{Destination, Navigator, RegistrationClient, RegistrationReceipt};
use super::{WizardAction, WizardState, WizardStep};
use crate::catalog::{District, FarmType, ProductCategory};
use crate::config::WizardConfig;
use crate::form::TextField;
use crate::util::{ValidationError, WizardError};

pub struct RegistrationWizard {
    // Current state - single source of truth
    state: WizardState,

    config: WizardConfig,
    client: Arc<dyn RegistrationClient>,
    navigator: Arc<dyn Navigator>,

    // Action queue for sequential processing
    pending_actions: VecDeque<WizardAction>,
}

impl RegistrationWizard {
    pub fn new(client: Arc<dyn RegistrationClient>, navigator: Arc<dyn Navigator>) -> Self {
        Self::with_config(WizardConfig::default(), client, navigator)
    }

    pub fn with_config(
        config: WizardConfig,
        client: Arc<dyn RegistrationClient>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            state: WizardState::new(),
            config,
            client,
            navigator,
            pending_actions: VecDeque::new(),
        }
    }

    /// UI reads this - immutable reference
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step
    }

    /// UI calls this - synchronous, just queues the action
    pub fn dispatch(&mut self, action: WizardAction) {
        tracing::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Processes one queued action. Returns its outcome, or `None` when the
    /// queue was empty.
    pub async fn update(&mut self) -> Option<Result<(), WizardError>> {
        let action = self.pending_actions.pop_front()?;
        Some(self.handle_action(action).await)
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }

    pub fn clear_pending_actions(&mut self) {
        self.pending_actions.clear();
    }

    async fn handle_action(&mut self, action: WizardAction) -> Result<(), WizardError> {
        tracing::debug!("Processing action: {}", action.description());

        if !matches!(action, WizardAction::ClearErrors) {
            self.state.clear_errors();
        }

        let outcome = match action {
            WizardAction::Advance => self.advance().map(|_| ()).map_err(WizardError::from),
            WizardAction::Retreat => {
                self.retreat();
                Ok(())
            }
            WizardAction::Reset => {
                self.reset();
                Ok(())
            }
            WizardAction::Submit => self.submit().await.map(|_| ()),
            WizardAction::SetText { field, value } => {
                self.set_text(field, value);
                Ok(())
            }
            WizardAction::SetFarmType { farm_type } => {
                self.set_farm_type(farm_type);
                Ok(())
            }
            WizardAction::SetDistrict { district } => {
                self.set_district(district);
                Ok(())
            }
            WizardAction::ToggleProduct { product } => {
                self.toggle_product(product);
                Ok(())
            }
            WizardAction::SetAgreeToTerms { agree } => {
                self.set_agree_to_terms(agree);
                Ok(())
            }
            WizardAction::ClearErrors => {
                self.state.clear_errors();
                Ok(())
            }
        };

        self.state.refresh();
        outcome
    }
}

// Transitions
impl RegistrationWizard {
    /// Moves forward one step if the current step's gate passes. On failure
    /// nothing is changed and the message is recorded for display.
    pub fn advance(&mut self) -> Result<WizardStep, ValidationError> {
        self.state.clear_errors();
        if let Err(error) = self.state.check_gate() {
            tracing::warn!("Cannot advance from step {}: {}", self.state.step.index(), error);
            self.state.add_error(error.to_string());
            self.state.refresh();
            return Err(error);
        }

        self.state.step = self.state.step.next();
        self.state.refresh();
        tracing::info!("Advanced to step: {:?}", self.state.step);
        Ok(self.state.step)
    }

    pub fn retreat(&mut self) -> WizardStep {
        self.state.step = self.state.step.previous();
        self.state.refresh();
        tracing::info!("Went back to step: {:?}", self.state.step);
        self.state.step
    }

    pub fn reset(&mut self) {
        self.state = WizardState::new();
        self.pending_actions.clear();
        tracing::info!("Registration wizard reset");
    }

    /// Hands the completed form to the registration collaborator.
    ///
    /// Requires the final step, a form that still passes the step 1 and
    /// step 2 gates, and accepted terms. On success the navigator
    /// is sent to the login route and the wizard starts over. On collaborator
    /// failure the step and form are kept so the user can resubmit.
    pub async fn submit(&mut self) -> Result<RegistrationReceipt, WizardError> {
        self.state.clear_errors();
        if let Err(error) = self.check_submit() {
            tracing::warn!("Submission blocked: {}", error);
            self.state.add_error(error.to_string());
            return Err(error.into());
        }

        match self.client.submit_registration(self.state.form.clone()).await {
            Ok(receipt) => {
                tracing::info!("Registration submitted: {}", receipt.registration_id);
                self.navigator.navigate(Destination::Login {
                    route: self.config.login_route.clone(),
                });
                self.state = WizardState::new();
                self.state.submitted = Some(receipt.clone());
                Ok(receipt)
            }
            Err(error) => {
                tracing::error!("Registration failed: {}", error);
                self.state.add_error(error.to_string());
                Err(error.into())
            }
        }
    }

    fn check_submit(&self) -> Result<(), ValidationError> {
        if !self.state.step.is_last() {
            return Err(ValidationError::NotOnFinalStep(self.state.step));
        }
        // Earlier steps stay editable after their gate passed
        self.state.form.validate_identity()?;
        self.state.form.validate_farm()?;
        if !self.state.form.agree_to_terms {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }
}

// Field binding
impl RegistrationWizard {
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.state
            .form
            .set_text(field, value, self.config.description_max_chars);
        self.state.refresh();
    }

    pub fn set_farm_type(&mut self, farm_type: Option<FarmType>) {
        self.state.form.farm_type = farm_type;
        self.state.refresh();
    }

    pub fn set_district(&mut self, district: Option<District>) {
        self.state.form.district = district;
        self.state.refresh();
    }

    pub fn set_agree_to_terms(&mut self, agree: bool) {
        self.state.form.agree_to_terms = agree;
        self.state.refresh();
    }

    /// Adds the product if absent, removes it if present.
    pub fn toggle_product(&mut self, product: ProductCategory) {
        let selected = self.state.form.toggle_product(product);
        self.state.refresh();
        tracing::debug!("Product {} selected: {}", product, selected);
    }

    pub fn toggle_product_by_name(&mut self, name: &str) -> Result<(), ValidationError> {
        let product = name.parse::<ProductCategory>()?;
        self.toggle_product(product);
        Ok(())
    }
}
