//! The in-memory donation store.

use crate::Error;

use super::domain::{Donation, DonationForm, DonationId, DonationType, DonorName};

/// Aggregate statistics for a (possibly filtered) set of donations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonationTotals {
    /// The sum of amounts, rounded to two decimal places for display.
    pub total: f64,
    /// How many donations were counted.
    pub count: usize,
}

/// Holds the collection of donations and applies all mutations to it.
///
/// Donations are kept in insertion order, which is also the display order.
/// IDs come from a monotonically increasing counter and are never reused,
/// even after a deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationStore {
    donations: Vec<Donation>,
    next_id: DonationId,
}

impl Default for DonationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DonationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            donations: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate `input` and append a new donation to the end of the list.
    ///
    /// Returns a copy of the stored donation, including its assigned ID.
    ///
    /// # Errors
    /// This function will return an [Error::EmptyDonorName],
    /// [Error::EmptyDonationType] or [Error::NegativeAmount] if the
    /// corresponding field is invalid.
    pub fn add(&mut self, input: &DonationForm) -> Result<Donation, Error> {
        let donation = Donation {
            id: self.next_id,
            donor_name: DonorName::new(&input.donor_name)?,
            donation_type: DonationType::new(&input.donation_type)?,
            amount: validate_amount(input.amount)?,
            date: input.date,
        };

        self.next_id += 1;
        self.donations.push(donation.clone());

        Ok(donation)
    }

    /// Replace all fields except `id` of the donation with `id`, keeping its
    /// position in the list.
    ///
    /// # Errors
    /// This function will return an:
    /// - [Error::UpdateMissingDonation] if no donation with `id` exists,
    /// - or the same validation errors as [DonationStore::add]. A failed
    ///   validation leaves the stored donation untouched.
    pub fn update(&mut self, id: DonationId, input: &DonationForm) -> Result<Donation, Error> {
        let donor_name = DonorName::new(&input.donor_name)?;
        let donation_type = DonationType::new(&input.donation_type)?;
        let amount = validate_amount(input.amount)?;

        let donation = self
            .donations
            .iter_mut()
            .find(|donation| donation.id == id)
            .ok_or(Error::UpdateMissingDonation)?;

        donation.donor_name = donor_name;
        donation.donation_type = donation_type;
        donation.amount = amount;
        donation.date = input.date;

        Ok(donation.clone())
    }

    /// Remove the donation with `id` from the list.
    ///
    /// # Errors
    /// This function will return an [Error::DeleteMissingDonation] if no
    /// donation with `id` exists.
    pub fn delete(&mut self, id: DonationId) -> Result<(), Error> {
        let index = self
            .donations
            .iter()
            .position(|donation| donation.id == id)
            .ok_or(Error::DeleteMissingDonation)?;

        self.donations.remove(index);

        Ok(())
    }

    /// Retrieve a copy of the donation with `id`.
    ///
    /// # Errors
    /// This function will return an [Error::DonationNotFound] if no donation
    /// with `id` exists.
    pub fn get(&self, id: DonationId) -> Result<Donation, Error> {
        self.donations
            .iter()
            .find(|donation| donation.id == id)
            .cloned()
            .ok_or(Error::DonationNotFound)
    }

    /// List donations in insertion order.
    ///
    /// When `filter` is set, only donations of that type are returned, in the
    /// same relative order. This is a pure read: calling it twice without a
    /// mutation in between yields identical results.
    pub fn list(&self, filter: Option<&DonationType>) -> Vec<Donation> {
        self.donations
            .iter()
            .filter(|donation| filter.is_none_or(|wanted| &donation.donation_type == wanted))
            .cloned()
            .collect()
    }

    /// Compute total and count over the same donations [DonationStore::list]
    /// would return for `filter`.
    ///
    /// An empty selection yields a total of 0.00 and a count of 0.
    pub fn stats(&self, filter: Option<&DonationType>) -> DonationTotals {
        let mut total = 0.0;
        let mut count = 0;

        for donation in &self.donations {
            if filter.is_none_or(|wanted| &donation.donation_type == wanted) {
                total += donation.amount;
                count += 1;
            }
        }

        DonationTotals {
            total: round_to_cents(total),
            count,
        }
    }

    /// The distinct donation types currently in the store, in first-seen
    /// order. Used to build the filter menu.
    pub fn types(&self) -> Vec<DonationType> {
        let mut types: Vec<DonationType> = Vec::new();

        for donation in &self.donations {
            if !types.contains(&donation.donation_type) {
                types.push(donation.donation_type.clone());
            }
        }

        types
    }
}

fn validate_amount(amount: f64) -> Result<f64, Error> {
    if amount < 0.0 {
        Err(Error::NegativeAmount(amount))
    } else {
        Ok(amount)
    }
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
