use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::form::RegistrationForm;
use crate::util::RegistrationError;

#[cfg(test)]
use mockall::automock;

/// Acknowledgement returned by the registration collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub registration_id: String,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

impl RegistrationReceipt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            registration_id: format!("reg_{}", Uuid::new_v4()),
            received_at: Utc::now(),
            message: message.into(),
        }
    }
}

/// Persists a completed registration. The wizard calls this at most once
/// per submit and never retries.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegistrationClient: Send + Sync {
    async fn submit_registration(
        &self,
        form: RegistrationForm,
    ) -> Result<RegistrationReceipt, RegistrationError>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Destination {
    Login { route: String },
}

/// Moves the user on once a registration has been accepted.
#[cfg_attr(test, automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination);
}

/// Keeps every submitted form in memory and accepts them all.
#[derive(Debug, Default)]
pub struct RecordingRegistrationClient {
    submissions: Mutex<Vec<RegistrationForm>>,
}

impl RecordingRegistrationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<RegistrationForm> {
        self.submissions
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RegistrationClient for RecordingRegistrationClient {
    async fn submit_registration(
        &self,
        form: RegistrationForm,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        tracing::info!(
            farmer = %form.farmer_name,
            farm = %form.farm_name,
            products = form.products.len(),
            "Registration received"
        );

        let mut submissions = self
            .submissions
            .lock()
            .map_err(|_| RegistrationError::Unavailable("submission log poisoned".to_string()))?;
        submissions.push(form);

        Ok(RegistrationReceipt::new("Registration received"))
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Destination>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Destination> {
        self.visited
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: Destination) {
        tracing::info!("Navigating to {:?}", destination);
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(destination);
        }
    }
}
