use std::collections::BTreeSet;
use std::sync::Arc;

use super::client::{MockNavigator, MockRegistrationClient};
use super::{
    Destination, RecordingNavigator, RecordingRegistrationClient, RegistrationReceipt,
    RegistrationWizard, WizardAction, WizardStep,
};
use crate::catalog::{District, FarmType, ProductCategory};
use crate::config::WizardConfig;
use crate::form::{RegistrationForm, TextField};
use crate::util::{RegistrationError, ValidationError, WizardError};

fn recording_wizard() -> (
    RegistrationWizard,
    Arc<RecordingRegistrationClient>,
    Arc<RecordingNavigator>,
) {
    let client = Arc::new(RecordingRegistrationClient::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let wizard = RegistrationWizard::new(client.clone(), navigator.clone());
    (wizard, client, navigator)
}

fn fill_identity(wizard: &mut RegistrationWizard) {
    wizard.set_text(TextField::FarmerName, "Anil");
    wizard.set_text(TextField::Email, "a@b.com");
    wizard.set_text(TextField::Phone, "123");
    wizard.set_text(TextField::Password, "abcdefgh");
    wizard.set_text(TextField::ConfirmPassword, "abcdefgh");
}

fn fill_farm(wizard: &mut RegistrationWizard) {
    wizard.set_text(TextField::FarmName, "Green Farm");
    wizard.set_text(TextField::Location, "Kochi");
    wizard.set_district(Some(District::Ernakulam));
}

fn wizard_on_last_step(wizard: &mut RegistrationWizard) {
    fill_identity(wizard);
    wizard.advance().unwrap();
    fill_farm(wizard);
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), WizardStep::Products);
}

#[test]
fn test_wizard_initialization() {
    let (wizard, _, _) = recording_wizard();
    let state = wizard.state();

    assert_eq!(state.step, WizardStep::Identity);
    assert_eq!(state.form, RegistrationForm::default());
    assert!(!state.can_advance);
    assert!(!state.can_retreat);
    assert_eq!(state.progress_percentage, 33);
    assert!(!state.has_errors());
}

#[test]
fn test_advance_blocked_by_each_missing_identity_field() {
    let required = [
        TextField::FarmerName,
        TextField::Email,
        TextField::Phone,
        TextField::Password,
    ];

    for field in required {
        let (mut wizard, _, _) = recording_wizard();
        fill_identity(&mut wizard);
        wizard.set_text(field, "");
        let before = wizard.state().form.clone();

        let result = wizard.advance();

        assert_eq!(
            result,
            Err(ValidationError::MissingFields(vec![field.label()])),
            "field {:?}",
            field
        );
        assert_eq!(wizard.step(), WizardStep::Identity);
        assert_eq!(wizard.state().form, before);
        assert_eq!(wizard.state().validation_errors.len(), 1);
    }
}

#[test]
fn test_advance_blocked_by_password_mismatch() {
    let (mut wizard, _, _) = recording_wizard();
    fill_identity(&mut wizard);
    wizard.set_text(TextField::ConfirmPassword, "different");

    assert_eq!(wizard.advance(), Err(ValidationError::PasswordMismatch));
    assert_eq!(wizard.step(), WizardStep::Identity);
    assert_eq!(wizard.state().validation_errors, vec!["passwords do not match"]);
}

#[test]
fn test_advance_preserves_form() {
    let (mut wizard, _, _) = recording_wizard();
    fill_identity(&mut wizard);
    wizard.set_text(TextField::Whatsapp, "+91 98470 00000");
    let before = wizard.state().form.clone();

    assert_eq!(wizard.advance(), Ok(WizardStep::Farm));
    assert_eq!(wizard.state().form, before);
    assert!(wizard.state().can_retreat);
    assert_eq!(wizard.state().progress_percentage, 66);
}

#[test]
fn test_farm_gate_blocks_until_complete() {
    let (mut wizard, _, _) = recording_wizard();
    fill_identity(&mut wizard);
    wizard.advance().unwrap();

    wizard.set_text(TextField::FarmName, "Green Farm");
    assert_eq!(
        wizard.advance(),
        Err(ValidationError::MissingFields(vec!["Location", "District"]))
    );
    assert_eq!(wizard.step(), WizardStep::Farm);
    assert_eq!(wizard.state().form.farm_name, "Green Farm");

    fill_farm(&mut wizard);
    assert!(wizard.state().can_advance);
    assert_eq!(wizard.advance(), Ok(WizardStep::Products));
}

#[test]
fn test_advance_on_last_step_stays_put() {
    let (mut wizard, _, _) = recording_wizard();
    wizard_on_last_step(&mut wizard);

    assert_eq!(wizard.advance(), Ok(WizardStep::Products));
    assert!(!wizard.state().can_advance);
}

#[test]
fn test_retreat_is_clamped_and_keeps_data() {
    let (mut wizard, _, _) = recording_wizard();
    assert_eq!(wizard.retreat(), WizardStep::Identity);

    wizard_on_last_step(&mut wizard);
    let before = wizard.state().form.clone();

    assert_eq!(wizard.retreat(), WizardStep::Farm);
    assert_eq!(wizard.retreat(), WizardStep::Identity);
    assert_eq!(wizard.retreat(), WizardStep::Identity);
    assert_eq!(wizard.state().form, before);
}

#[test]
fn test_toggle_product_twice_is_identity() {
    let (mut wizard, _, _) = recording_wizard();
    wizard.toggle_product(ProductCategory::Coconut);
    let before = wizard.state().form.products.clone();

    wizard.toggle_product(ProductCategory::Rice);
    assert!(wizard.state().form.products.contains(&ProductCategory::Rice));
    wizard.toggle_product(ProductCategory::Rice);

    assert_eq!(wizard.state().form.products, before);
}

#[test]
fn test_toggle_product_by_name_rejects_unknown() {
    let (mut wizard, _, _) = recording_wizard();
    assert!(wizard.toggle_product_by_name("Spices").is_ok());
    assert_eq!(
        wizard.toggle_product_by_name("Wheat"),
        Err(ValidationError::UnknownProduct("Wheat".to_string()))
    );
    assert_eq!(
        wizard.state().form.products,
        BTreeSet::from([ProductCategory::Spices])
    );
}

#[test]
fn test_description_bound_follows_config() {
    let config = WizardConfig {
        description_max_chars: 10,
        ..WizardConfig::default()
    };
    let mut wizard = RegistrationWizard::with_config(
        config,
        Arc::new(RecordingRegistrationClient::new()),
        Arc::new(RecordingNavigator::new()),
    );

    wizard.set_text(TextField::Description, "Family farm since 1962");
    assert_eq!(wizard.state().form.description, "Family far");
}

#[tokio::test]
async fn test_submit_without_consent_does_not_call_client() {
    let mut client = MockRegistrationClient::new();
    client.expect_submit_registration().never();
    let mut navigator = MockNavigator::new();
    navigator.expect_navigate().never();

    let mut wizard = RegistrationWizard::new(Arc::new(client), Arc::new(navigator));
    wizard_on_last_step(&mut wizard);
    let before = wizard.state().form.clone();

    let result = wizard.submit().await;

    assert_eq!(
        result,
        Err(WizardError::Validation(ValidationError::TermsNotAccepted))
    );
    assert_eq!(wizard.step(), WizardStep::Products);
    assert_eq!(wizard.state().form, before);
    assert!(wizard.state().has_errors());
}

#[tokio::test]
async fn test_submit_rechecks_fields_edited_on_last_step() {
    let mut client = MockRegistrationClient::new();
    client.expect_submit_registration().never();
    let mut navigator = MockNavigator::new();
    navigator.expect_navigate().never();

    let mut wizard = RegistrationWizard::new(Arc::new(client), Arc::new(navigator));
    wizard_on_last_step(&mut wizard);
    wizard.set_agree_to_terms(true);
    wizard.set_text(TextField::FarmerName, "");

    let result = wizard.submit().await;

    assert_eq!(
        result,
        Err(WizardError::Validation(ValidationError::MissingFields(vec![
            "Full name"
        ])))
    );
    assert_eq!(wizard.step(), WizardStep::Products);
    assert!(wizard.state().has_errors());
}

#[tokio::test]
async fn test_submit_rechecks_password_and_district() {
    let (mut wizard, client, navigator) = recording_wizard();
    wizard_on_last_step(&mut wizard);
    wizard.set_agree_to_terms(true);

    wizard.set_text(TextField::ConfirmPassword, "zzz");
    assert_eq!(
        wizard.submit().await,
        Err(WizardError::Validation(ValidationError::PasswordMismatch))
    );

    wizard.set_text(TextField::ConfirmPassword, "abcdefgh");
    wizard.set_district(None);
    assert_eq!(
        wizard.submit().await,
        Err(WizardError::Validation(ValidationError::MissingFields(vec![
            "District"
        ])))
    );

    assert!(client.submissions().is_empty());
    assert!(navigator.visited().is_empty());
    assert_eq!(wizard.state().form.confirm_password, "abcdefgh");
}

#[tokio::test]
async fn test_submit_before_last_step_is_rejected() {
    let (mut wizard, client, _) = recording_wizard();
    fill_identity(&mut wizard);
    wizard.set_agree_to_terms(true);

    let result = wizard.submit().await;

    assert_eq!(
        result,
        Err(WizardError::Validation(ValidationError::NotOnFinalStep(
            WizardStep::Identity
        )))
    );
    assert!(client.submissions().is_empty());
}

#[tokio::test]
async fn test_submit_failure_keeps_state_and_does_not_navigate() {
    let mut client = MockRegistrationClient::new();
    client
        .expect_submit_registration()
        .times(1)
        .returning(|_| Err(RegistrationError::Unavailable("timeout".to_string())));
    let mut navigator = MockNavigator::new();
    navigator.expect_navigate().never();

    let mut wizard = RegistrationWizard::new(Arc::new(client), Arc::new(navigator));
    wizard_on_last_step(&mut wizard);
    wizard.set_agree_to_terms(true);
    let before = wizard.state().form.clone();

    let result = wizard.submit().await;

    assert!(matches!(result, Err(WizardError::Registration(_))));
    assert_eq!(wizard.step(), WizardStep::Products);
    assert_eq!(wizard.state().form, before);
    assert_eq!(
        wizard.state().validation_errors,
        vec!["registration service unavailable: timeout"]
    );
    assert!(wizard.state().submitted.is_none());
}

#[tokio::test]
async fn test_submit_success_navigates_once_and_resets() {
    let mut client = MockRegistrationClient::new();
    client
        .expect_submit_registration()
        .times(1)
        .withf(|form| form.farm_name == "Green Farm" && form.agree_to_terms)
        .returning(|_| Ok(RegistrationReceipt::new("ok")));
    let mut navigator = MockNavigator::new();
    navigator
        .expect_navigate()
        .times(1)
        .withf(|destination| {
            *destination
                == Destination::Login {
                    route: "/seller/login".to_string(),
                }
        })
        .return_const(());

    let mut wizard = RegistrationWizard::new(Arc::new(client), Arc::new(navigator));
    wizard_on_last_step(&mut wizard);
    wizard.set_agree_to_terms(true);

    let receipt = wizard.submit().await.unwrap();

    assert_eq!(wizard.step(), WizardStep::Identity);
    assert_eq!(wizard.state().form, RegistrationForm::default());
    assert_eq!(wizard.state().submitted.as_ref(), Some(&receipt));
}

#[tokio::test]
async fn test_end_to_end_registration() {
    let (mut wizard, client, navigator) = recording_wizard();

    fill_identity(&mut wizard);
    assert_eq!(wizard.advance(), Ok(WizardStep::Farm));

    fill_farm(&mut wizard);
    assert_eq!(wizard.advance(), Ok(WizardStep::Products));

    wizard.toggle_product(ProductCategory::Rice);
    wizard.toggle_product(ProductCategory::Coconut);
    assert_eq!(
        wizard.state().form.products,
        BTreeSet::from([ProductCategory::Rice, ProductCategory::Coconut])
    );

    wizard.set_agree_to_terms(true);
    let expected = wizard.state().form.clone();
    wizard.submit().await.unwrap();

    let submissions = client.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0], expected);
    assert_eq!(submissions[0].farmer_name, "Anil");
    assert_eq!(submissions[0].district, Some(District::Ernakulam));
    assert_eq!(navigator.visited().len(), 1);
}

#[tokio::test]
async fn test_action_queuing() {
    let (mut wizard, _, _) = recording_wizard();

    wizard.dispatch(WizardAction::SetText {
        field: TextField::FarmerName,
        value: "Anil".to_string(),
    });
    wizard.dispatch(WizardAction::SetFarmType {
        farm_type: Some(FarmType::Organic),
    });
    wizard.dispatch(WizardAction::Advance);
    assert!(wizard.has_pending_actions());

    assert!(matches!(wizard.update().await, Some(Ok(()))));
    assert!(matches!(wizard.update().await, Some(Ok(()))));
    assert!(matches!(
        wizard.update().await,
        Some(Err(WizardError::Validation(ValidationError::MissingFields(_))))
    ));
    assert!(!wizard.has_pending_actions());
    assert!(wizard.update().await.is_none());

    let state = wizard.state();
    assert_eq!(state.form.farmer_name, "Anil");
    assert_eq!(state.form.farm_type, Some(FarmType::Organic));
    assert_eq!(state.step, WizardStep::Identity);
    assert!(state.has_errors());
}

#[tokio::test]
async fn test_next_action_clears_previous_errors() {
    let (mut wizard, _, _) = recording_wizard();

    wizard.dispatch(WizardAction::Advance);
    wizard.update().await;
    assert!(wizard.state().has_errors());

    wizard.dispatch(WizardAction::ToggleProduct {
        product: ProductCategory::Tea,
    });
    wizard.update().await;
    assert!(!wizard.state().has_errors());
}

#[tokio::test]
async fn test_reset_action_discards_form() {
    let (mut wizard, _, _) = recording_wizard();
    fill_identity(&mut wizard);
    wizard.advance().unwrap();

    wizard.dispatch(WizardAction::Reset);
    wizard.update().await;

    assert_eq!(wizard.step(), WizardStep::Identity);
    assert_eq!(wizard.state().form, RegistrationForm::default());
}

#[test]
fn test_actions_deserialize_from_script() {
    let script = r#"[
        {"action": "set_text", "field": "farmer_name", "value": "Anil"},
        {"action": "set_district", "district": "Ernakulam"},
        {"action": "toggle_product", "product": "Rice"},
        {"action": "set_agree_to_terms", "agree": true},
        {"action": "advance"}
    ]"#;

    let actions: Vec<WizardAction> = serde_json::from_str(script).unwrap();

    assert_eq!(
        actions,
        vec![
            WizardAction::SetText {
                field: TextField::FarmerName,
                value: "Anil".to_string(),
            },
            WizardAction::SetDistrict {
                district: Some(District::Ernakulam),
            },
            WizardAction::ToggleProduct {
                product: ProductCategory::Rice,
            },
            WizardAction::SetAgreeToTerms { agree: true },
            WizardAction::Advance,
        ]
    );
    assert!(!actions[0].is_async());
}
