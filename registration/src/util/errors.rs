use std::path::PathBuf;

use thiserror::Error;

use crate::wizard::WizardStep;

/// A step gate or form check that did not pass. Never fatal: the form and
/// step are left as they were and the message is shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please fill in the required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("please agree to the terms and conditions")]
    TermsNotAccepted,
    #[error("registration can only be submitted from the final step (currently on step {})", .0.index())]
    NotOnFinalStep(WizardStep),
    #[error("unknown product category: {0}")]
    UnknownProduct(String),
    #[error("unknown district: {0}")]
    UnknownDistrict(String),
    #[error("unknown farm type: {0}")]
    UnknownFarmType(String),
}

/// Failure reported by the registration collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("registration rejected: {0}")]
    Rejected(String),
    #[error("registration service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
