pub mod catalog;
pub mod config;
pub mod form;
pub mod login;
pub mod util;
pub mod wizard;

pub use catalog::{District, FarmType, ProductCategory};
pub use config::Config;
pub use form::{RegistrationForm, TextField};
pub use login::{LoginForm, LoginRole};
pub use util::{ConfigError, RegistrationError, ValidationError, WizardError};
pub use wizard::{
    Destination, Navigator, RegistrationClient, RegistrationReceipt, RegistrationWizard,
    WizardAction, WizardState, WizardStep,
};
