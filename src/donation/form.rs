//! The form fields shared by the create and edit donation pages.

use maud::{Markup, html};
use time::Date;

use crate::html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE};

use super::domain::{Donation, DonationForm};

/// The values to pre-fill the donation form with.
///
/// Empty for the create page; the draft's values for the edit page; the
/// user's rejected input when re-rendering after a validation failure.
#[derive(Debug, Default, Clone)]
pub(crate) struct DonationFormValues {
    pub donor_name: String,
    pub donation_type: String,
    pub amount: Option<f64>,
    pub date: Option<Date>,
}

impl From<&Donation> for DonationFormValues {
    fn from(donation: &Donation) -> Self {
        Self {
            donor_name: donation.donor_name.to_string(),
            donation_type: donation.donation_type.to_string(),
            amount: Some(donation.amount),
            date: Some(donation.date),
        }
    }
}

impl From<&DonationForm> for DonationFormValues {
    fn from(form: &DonationForm) -> Self {
        Self {
            donor_name: form.donor_name.clone(),
            donation_type: form.donation_type.clone(),
            amount: Some(form.amount),
            date: Some(form.date),
        }
    }
}

pub(crate) fn donation_form_fields(values: &DonationFormValues) -> Markup {
    let amount_str = values.amount.map(|amount| format!("{amount:.2}"));
    let date_str = values.date.map(|date| date.to_string());

    html! {
        div
        {
            label
                for="donor_name"
                class=(FORM_LABEL_STYLE)
            {
                "Donor's Name"
            }

            input
                id="donor_name"
                type="text"
                name="donor_name"
                placeholder="Donor's Name"
                value=(values.donor_name)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="donation_type"
                class=(FORM_LABEL_STYLE)
            {
                "Type of Donation"
            }

            input
                id="donation_type"
                type="text"
                name="donation_type"
                placeholder="e.g. money, food, clothing"
                value=(values.donation_type)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount Donated"
            }

            input
                id="amount"
                type="number"
                name="amount"
                step="0.01"
                min="0"
                placeholder="0.00"
                value=[amount_str.as_deref()]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date of Donation"
            }

            input
                id="date"
                type="date"
                name="date"
                value=[date_str.as_deref()]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
