pub mod errors;

pub use errors::{ConfigError, RegistrationError, ValidationError, WizardError};
