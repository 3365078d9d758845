//! Donation deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, alert::Alert};

use super::{domain::DonationId, store::DonationStore};

/// The state needed for deleting a donation.
#[derive(Debug, Clone)]
pub struct DeleteDonationState {
    /// The shared donation store.
    pub donations: Arc<Mutex<DonationStore>>,
}

impl FromRef<AppState> for DeleteDonationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            donations: state.donations.clone(),
        }
    }
}

/// Handle donation deletion. Returns a success alert or an error.
pub async fn delete_donation_endpoint(
    Path(donation_id): Path<DonationId>,
    State(state): State<DeleteDonationState>,
) -> Response {
    let mut donations = match state.donations.lock() {
        Ok(donations) => donations,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    match donations.delete(donation_id) {
        Ok(()) => {
            tracing::info!("deleted donation {donation_id}");

            Alert::success("Donation deleted successfully").into_response()
        }
        Err(Error::DeleteMissingDonation) => Error::DeleteMissingDonation.into_alert_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting donation {donation_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}
