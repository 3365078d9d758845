//! Donation tracker is a small web app for recording charitable donations.
//!
//! Donations (donor name, type, amount, and date) are held in memory for the
//! lifetime of the server process and served as HTML pages. There is no
//! database: restarting the server clears the list.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod donation;
mod endpoints;
mod html;
mod navigation;
mod routing;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use donation::{
    Donation, DonationForm, DonationId, DonationStore, DonationTotals, DonationType, DonorName,
    EditSession, EditSessionController,
};
pub use routing::build_router;

use crate::alert::Alert;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used for a donor's name.
    #[error("Donor name cannot be empty")]
    EmptyDonorName,

    /// An empty string was used for a donation type.
    #[error("Donation type cannot be empty")]
    EmptyDonationType,

    /// A negative amount was used to create or update a donation.
    ///
    /// Donations record value received, so negative entries are treated as
    /// user error rather than a refund mechanism.
    #[error("{0} is a negative amount, which is not allowed")]
    NegativeAmount(f64),

    /// The requested donation was not found.
    ///
    /// Indicates a stale reference, e.g. the list changed between rendering
    /// a page and the user acting on it. Refreshing the list recovers.
    #[error("the requested donation could not be found")]
    DonationNotFound,

    /// Tried to update a donation that does not exist
    #[error("tried to update a donation that is not in the list")]
    UpdateMissingDonation,

    /// Tried to delete a donation that does not exist
    #[error("tried to delete a donation that is not in the list")]
    DeleteMissingDonation,

    /// Tried to commit or cancel an edit when no donation was being edited.
    ///
    /// This is a contract violation in the calling layer and is surfaced to
    /// the caller rather than silently ignored.
    #[error("no donation is currently being edited")]
    NoActiveEditSession,

    /// Could not acquire the lock on the donation store or edit session
    #[error("could not acquire the store lock")]
    StoreLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.into_alert_response()
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub(crate) fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::EmptyDonorName | Error::EmptyDonationType => (
                StatusCode::BAD_REQUEST,
                Alert::error("Missing required field", &self.to_string()),
            ),
            Error::NegativeAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid donation amount",
                    &format!("{amount} is a negative amount, which is not allowed."),
                ),
            ),
            Error::DonationNotFound => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Donation not found",
                    "The donation could not be found. Try refreshing the page.",
                ),
            ),
            Error::UpdateMissingDonation => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not update donation",
                    "The donation could not be found.",
                ),
            ),
            Error::DeleteMissingDonation => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not delete donation",
                    "The donation could not be found. \
                    Try refreshing the page to see if the donation has already been deleted.",
                ),
            ),
            Error::NoActiveEditSession => (
                StatusCode::CONFLICT,
                Alert::error(
                    "No donation is being edited",
                    "The edit may have already been submitted or cancelled. \
                    Open the donation from the list to edit it again.",
                ),
            ),
            Error::StoreLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                ),
            ),
        };

        (status_code, alert.into_html()).into_response()
    }

    /// Whether this error should be recovered by re-rendering the form with
    /// an inline message so the user can correct their input.
    pub(crate) fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyDonorName | Error::EmptyDonationType | Error::NegativeAmount(_)
        )
    }
}
