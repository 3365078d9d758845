//! Core donation domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// Identifier for a donation, assigned by the store.
pub type DonationId = i64;

/// A validated, non-empty donor name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct DonorName(String);

impl DonorName {
    /// Create a donor name.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyDonorName] if `name` is an empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyDonorName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a donor name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because
    /// if the non-empty invariant is violated it will cause incorrect
    /// behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for DonorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DonorName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DonorName::new(s)
    }
}

impl Display for DonorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated, non-empty donation type (e.g., 'money', 'food', 'clothing').
///
/// Types are open-ended free text: the filter menu offers the types present
/// in the store, but any non-empty string is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct DonationType(String);

impl DonationType {
    /// Create a donation type.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyDonationType] if `value` is an empty string.
    pub fn new(value: &str) -> Result<Self, Error> {
        let value = value.trim();

        if value.is_empty() {
            Err(Error::EmptyDonationType)
        } else {
            Ok(Self(value.to_string()))
        }
    }

    /// Create a donation type without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for DonationType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DonationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DonationType::new(s)
    }
}

impl Display for DonationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    /// The ID of the donation, unique within a store and never reused.
    pub id: DonationId,
    /// Who made the donation.
    pub donor_name: DonorName,
    /// What kind of donation this is.
    pub donation_type: DonationType,
    /// The value of the donation in dollars. Never negative.
    pub amount: f64,
    /// When the donation was made.
    pub date: Date,
}

/// Form data for creating and editing donations.
///
/// Presence of `amount` and `date` is enforced by the types during form
/// deserialization; the emptiness of the text fields and the sign of the
/// amount are checked by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationForm {
    /// The donor's name as entered.
    pub donor_name: String,
    /// The donation type as entered.
    pub donation_type: String,
    /// The donated amount in dollars.
    pub amount: f64,
    /// The date of the donation.
    pub date: Date,
}
