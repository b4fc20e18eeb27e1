//! Fixed choice lists offered by the registration form.
//!
//! Each list is an enum so that "must be one of" holds by construction.
//! `ALL` gives the order in which the presentation layer lists the choices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::ValidationError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FarmType {
    Organic,
    Traditional,
    Mixed,
    Hydroponic,
}

impl FarmType {
    pub const ALL: [FarmType; 4] = [
        FarmType::Organic,
        FarmType::Traditional,
        FarmType::Mixed,
        FarmType::Hydroponic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FarmType::Organic => "Organic",
            FarmType::Traditional => "Traditional",
            FarmType::Mixed => "Mixed",
            FarmType::Hydroponic => "Hydroponic",
        }
    }
}

impl fmt::Display for FarmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FarmType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|farm_type| farm_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownFarmType(s.to_string()))
    }
}

/// Region a farm is registered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum District {
    Thiruvananthapuram,
    Kollam,
    Pathanamthitta,
    Alappuzha,
    Kottayam,
    Idukki,
    Ernakulam,
    Thrissur,
    Palakkad,
    Malappuram,
    Kozhikode,
    Wayanad,
    Kannur,
    Kasaragod,
}

impl District {
    pub const ALL: [District; 14] = [
        District::Thiruvananthapuram,
        District::Kollam,
        District::Pathanamthitta,
        District::Alappuzha,
        District::Kottayam,
        District::Idukki,
        District::Ernakulam,
        District::Thrissur,
        District::Palakkad,
        District::Malappuram,
        District::Kozhikode,
        District::Wayanad,
        District::Kannur,
        District::Kasaragod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            District::Thiruvananthapuram => "Thiruvananthapuram",
            District::Kollam => "Kollam",
            District::Pathanamthitta => "Pathanamthitta",
            District::Alappuzha => "Alappuzha",
            District::Kottayam => "Kottayam",
            District::Idukki => "Idukki",
            District::Ernakulam => "Ernakulam",
            District::Thrissur => "Thrissur",
            District::Palakkad => "Palakkad",
            District::Malappuram => "Malappuram",
            District::Kozhikode => "Kozhikode",
            District::Wayanad => "Wayanad",
            District::Kannur => "Kannur",
            District::Kasaragod => "Kasaragod",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for District {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|district| district.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownDistrict(s.to_string()))
    }
}

/// Product a seller can list. Ordering follows `ALL`, which keeps the
/// selected set in display order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum ProductCategory {
    Rice,
    Coconut,
    Spices,
    Vegetables,
    Fruits,
    Banana,
    Rubber,
    Tea,
    Coffee,
    Dairy,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 10] = [
        ProductCategory::Rice,
        ProductCategory::Coconut,
        ProductCategory::Spices,
        ProductCategory::Vegetables,
        ProductCategory::Fruits,
        ProductCategory::Banana,
        ProductCategory::Rubber,
        ProductCategory::Tea,
        ProductCategory::Coffee,
        ProductCategory::Dairy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Rice => "Rice",
            ProductCategory::Coconut => "Coconut",
            ProductCategory::Spices => "Spices",
            ProductCategory::Vegetables => "Vegetables",
            ProductCategory::Fruits => "Fruits",
            ProductCategory::Banana => "Banana",
            ProductCategory::Rubber => "Rubber",
            ProductCategory::Tea => "Tea",
            ProductCategory::Coffee => "Coffee",
            ProductCategory::Dairy => "Dairy",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|product| product.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownProduct(s.to_string()))
    }
}
