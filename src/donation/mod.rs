//! Donation management: the in-memory store, the edit session state machine
//! and the pages and endpoints for recording, editing and deleting donations.

mod create;
mod delete;
mod domain;
mod edit;
mod edit_session;
mod form;
mod list;
mod store;

pub use create::{create_donation_endpoint, get_new_donation_page};
pub use delete::delete_donation_endpoint;
pub use domain::{Donation, DonationForm, DonationId, DonationType, DonorName};
pub use edit::{cancel_edit_endpoint, get_edit_donation_page, update_donation_endpoint};
pub use edit_session::{EditSession, EditSessionController};
pub use list::get_donations_page;
pub use store::{DonationStore, DonationTotals};
