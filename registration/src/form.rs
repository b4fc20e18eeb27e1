use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{District, FarmType, ProductCategory};
use crate::util::ValidationError;

pub const DESCRIPTION_MAX_CHARS: usize = 500;

const MASK: &str = "********";

/// Everything a seller enters across the three wizard steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    // Step 1: identity
    pub farmer_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,

    // Step 2: farm
    pub farm_name: String,
    pub farm_size: String,
    pub farm_type: Option<FarmType>,
    pub location: String,
    pub district: Option<District>,

    // Step 3: products and profile
    pub products: BTreeSet<ProductCategory>,
    pub experience: String,
    pub certifications: String,
    pub description: String,
    pub whatsapp: String,
    pub agree_to_terms: bool,
}

/// Free-text inputs bound by the presentation layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    FarmerName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    FarmName,
    FarmSize,
    Location,
    Experience,
    Certifications,
    Description,
    Whatsapp,
}

impl TextField {
    pub fn label(&self) -> &'static str {
        match self {
            TextField::FarmerName => "Full name",
            TextField::Email => "Email",
            TextField::Phone => "Phone",
            TextField::Password => "Password",
            TextField::ConfirmPassword => "Confirm password",
            TextField::FarmName => "Farm name",
            TextField::FarmSize => "Farm size",
            TextField::Location => "Location",
            TextField::Experience => "Experience",
            TextField::Certifications => "Certifications",
            TextField::Description => "Description",
            TextField::Whatsapp => "WhatsApp",
        }
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FarmerName => &self.farmer_name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Password => &self.password,
            TextField::ConfirmPassword => &self.confirm_password,
            TextField::FarmName => &self.farm_name,
            TextField::FarmSize => &self.farm_size,
            TextField::Location => &self.location,
            TextField::Experience => &self.experience,
            TextField::Certifications => &self.certifications,
            TextField::Description => &self.description,
            TextField::Whatsapp => &self.whatsapp,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FarmerName => &mut self.farmer_name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Password => &mut self.password,
            TextField::ConfirmPassword => &mut self.confirm_password,
            TextField::FarmName => &mut self.farm_name,
            TextField::FarmSize => &mut self.farm_size,
            TextField::Location => &mut self.location,
            TextField::Experience => &mut self.experience,
            TextField::Certifications => &mut self.certifications,
            TextField::Description => &mut self.description,
            TextField::Whatsapp => &mut self.whatsapp,
        }
    }

    /// Stores `value` as typed. The description is cut to `max_description_chars`.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>, max_description_chars: usize) {
        let mut value = value.into();
        if field == TextField::Description {
            truncate_chars(&mut value, max_description_chars);
        }
        *self.text_mut(field) = value;
    }

    /// Adds the product if absent, removes it if present. Returns whether it
    /// is selected afterwards.
    pub fn toggle_product(&mut self, product: ProductCategory) -> bool {
        if self.products.remove(&product) {
            false
        } else {
            self.products.insert(product);
            true
        }
    }

    /// Step 1 gate.
    pub fn validate_identity(&self) -> Result<(), ValidationError> {
        let missing = self.missing_text(&[
            TextField::FarmerName,
            TextField::Email,
            TextField::Phone,
            TextField::Password,
        ]);
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    /// Step 2 gate.
    pub fn validate_farm(&self) -> Result<(), ValidationError> {
        let mut missing = self.missing_text(&[TextField::FarmName, TextField::Location]);
        if self.district.is_none() {
            missing.push("District");
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        Ok(())
    }

    /// Copy safe to print or log: password fields are masked.
    pub fn redacted(&self) -> Self {
        let mut form = self.clone();
        for field in [TextField::Password, TextField::ConfirmPassword] {
            let value = form.text_mut(field);
            if !value.is_empty() {
                *value = MASK.to_string();
            }
        }
        form
    }

    fn missing_text(&self, fields: &[TextField]) -> Vec<&'static str> {
        fields
            .iter()
            .filter(|field| is_blank(self.text(**field)))
            .map(|field| field.label())
            .collect()
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn truncate_chars(value: &mut String, max_chars: usize) {
    if let Some((byte_index, _)) = value.char_indices().nth(max_chars) {
        value.truncate(byte_index);
    }
}
