pub mod actions;
pub mod client;
pub mod manager;
pub mod state;

#[cfg(test)]
mod tests;

pub use actions::WizardAction;
pub use client::{
    Destination, Navigator, RecordingNavigator, RecordingRegistrationClient, RegistrationClient,
    RegistrationReceipt,
};
pub use manager::RegistrationWizard;
pub use state::{WizardState, WizardStep};
